use gilrs::{Button, Event, EventType, Gilrs};
use tracing::{debug, info};

use crate::color::{Color, ColorPalette};
use crate::engine::RoboEyes;
use crate::expression::{Mood, Position};
use crate::matrix::MatrixSurface;
use crate::ports::{Clock, RandomSource, Surface};

// Toggle state the pad drives
#[derive(Debug, Clone)]
pub struct PadState {
    pub mood: Mood,
    pub palette: ColorPalette,
    pub autoblink: bool,
    pub idle: bool,
    pub cyclops: bool,
}

impl PadState {
    pub fn new() -> Self {
        Self {
            mood: Mood::Default,
            palette: ColorPalette::Classic,
            autoblink: true,
            idle: true,
            cyclops: false,
        }
    }
}

impl Default for PadState {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything whose brightness the pad can dim
pub trait Dimmable {
    fn step_brightness(&mut self, delta: f64);
}

impl Dimmable for MatrixSurface {
    fn step_brightness(&mut self, delta: f64) {
        self.set_brightness(self.brightness() + delta);
        info!("🔆 Brightness: {:.0}%", self.brightness() * 100.0);
    }
}

// Gamepad input handler
pub fn handle_gamepad_input<S, C, R>(gilrs: &mut Gilrs, eyes: &mut RoboEyes<S, C, R>, pad: &mut PadState)
where
    S: Surface + Dimmable,
    C: Clock,
    R: RandomSource,
{
    while let Some(Event { id, event, time: _ }) = gilrs.next_event() {
        debug!("🎮 Event from gamepad {}: {:?}", id, event);
        let EventType::ButtonPressed(button, _) = event else {
            continue;
        };

        match button {
            // Face buttons
            Button::South => {
                eyes.blink(true, true);
                info!("👁️  Blink");
            }
            Button::East => {
                pad.mood = pad.mood.next();
                eyes.set_mood(pad.mood);
                info!("🙂 Mood: {}", pad.mood.name());
            }
            Button::North => {
                pad.autoblink = !pad.autoblink;
                eyes.set_autoblinker(pad.autoblink, 3, 2);
                info!("👁️  Autoblink {}", if pad.autoblink { "ON" } else { "OFF" });
            }
            Button::West => {
                pad.palette = pad.palette.next();
                eyes.set_colors(pad.palette.eye_color(), Color::BLACK);
                info!("🎨 Color: {}", pad.palette.name());
            }

            // D-Pad for gaze; two held arrows give a diagonal
            Button::DPadUp | Button::DPadDown | Button::DPadLeft | Button::DPadRight => {
                let gamepad = gilrs.gamepad(id);
                let held = |b: Button| b == button || gamepad.is_pressed(b);
                let position = dpad_position(
                    held(Button::DPadUp),
                    held(Button::DPadDown),
                    held(Button::DPadLeft),
                    held(Button::DPadRight),
                );
                eyes.set_position(position);
                info!("👀 Look {:?}", position);
            }
            Button::LeftThumb | Button::RightThumb => eyes.set_position(Position::Center),

            // Shoulder buttons for bursts, triggers for brightness
            Button::LeftTrigger => {
                eyes.trigger_confusion();
                info!("😵 Confused");
            }
            Button::RightTrigger => {
                eyes.trigger_laugh();
                info!("😆 Laugh");
            }
            Button::LeftTrigger2 => eyes.surface_mut().step_brightness(-0.1),
            Button::RightTrigger2 => eyes.surface_mut().step_brightness(0.1),

            Button::Select => {
                pad.cyclops = !pad.cyclops;
                eyes.set_cyclops(pad.cyclops);
                info!("👁️  Cyclops {}", if pad.cyclops { "ON" } else { "OFF" });
            }
            Button::Start => {
                pad.idle = !pad.idle;
                eyes.set_idle_mode(pad.idle, 2, 3);
                info!("💤 Idle wander {}", if pad.idle { "ON" } else { "OFF" });
            }

            Button::Mode => {
                info!("📋 Running: {:?}", eyes.behaviors().active());
            }

            _ => {}
        }
    }
}

/// Gaze anchor for the arrows currently held; opposing arrows cancel out
pub fn dpad_position(up: bool, down: bool, left: bool, right: bool) -> Position {
    let vertical = (up && !down, down && !up);
    let horizontal = (left && !right, right && !left);
    match (vertical, horizontal) {
        ((true, _), (true, _)) => Position::NorthWest,
        ((true, _), (_, true)) => Position::NorthEast,
        ((true, _), _) => Position::North,
        ((_, true), (true, _)) => Position::SouthWest,
        ((_, true), (_, true)) => Position::SouthEast,
        ((_, true), _) => Position::South,
        (_, (true, _)) => Position::West,
        (_, (_, true)) => Position::East,
        _ => Position::Center,
    }
}

pub fn print_control_mapping() {
    info!("🎮 Controls:");
    info!("   A / South      blink");
    info!("   B / East       cycle mood");
    info!("   Y / North      toggle autoblink");
    info!("   X / West       cycle color");
    info!("   D-Pad          look N / S / W / E, hold two for diagonals");
    info!("   Stick click    look at center");
    info!("   L1 / R1        confused / laugh");
    info!("   L2 / R2        brightness down / up");
    info!("   Select         toggle cyclops");
    info!("   Start          toggle idle wander");
    info!("   Mode           list running behaviors");
}
