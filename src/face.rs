// Face state shared between the behaviors and the compositor

use tracing::{debug, warn};

use crate::behaviors::Flicker;
use crate::color::Color;
use crate::config::{EngineConfig, MIN_EYE_HEIGHT};
use crate::expression::{Mood, Position};
use crate::geometry::{EyePair, Eyelids};

/// Everything a frame is drawn from.
///
/// Behaviors write targets and flicker flags here; the compositor reads the
/// targets and advances the current values.
#[derive(Debug, Clone)]
pub struct FaceState {
    pub eyes: EyePair,
    pub eyelids: Eyelids,
    pub mood: Mood,
    pub screen_width: i32,
    pub screen_height: i32,
    pub main_color: Color,
    pub background: Color,
    pub cyclops: bool,
    pub curious: bool,
    pub h_flicker: Flicker,
    pub v_flicker: Flicker,
}

impl FaceState {
    /// Eyes start centered and shut, flagged open so the first frames
    /// animate them open.
    pub fn new(config: &EngineConfig) -> Self {
        let mut eyes = EyePair::new(
            config.eye_width,
            config.eye_height,
            config.border_radius,
            config.spacing,
        );
        eyes.center_defaults(config.screen_width, config.screen_height);
        for eye in [&mut eyes.left, &mut eyes.right] {
            eye.x.current = eye.x.default;
            eye.y.current = eye.y.default;
            eye.height.current = MIN_EYE_HEIGHT;
        }
        eyes.retarget_defaults();

        if config.eye_width < 0 || config.eye_height < 0 {
            warn!(width = config.eye_width, height = config.eye_height, "negative eye size configured");
        }

        Self {
            eyes,
            eyelids: Eyelids::default(),
            mood: Mood::default(),
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            main_color: config.main_color,
            background: config.background,
            cyclops: config.cyclops,
            curious: config.curious,
            h_flicker: Flicker::new(config.flicker.h_amplitude),
            v_flicker: Flicker::new(config.flicker.v_amplitude),
        }
    }

    pub fn constraint_x(&self) -> i32 {
        self.eyes.constraint_x(self.screen_width)
    }

    pub fn constraint_y(&self) -> i32 {
        self.eyes.constraint_y(self.screen_height)
    }

    pub fn close(&mut self, left: bool, right: bool) {
        if left {
            self.eyes.left.close();
        }
        if right {
            self.eyes.right.close();
        }
    }

    pub fn open(&mut self, left: bool, right: bool) {
        if left {
            self.eyes.left.open();
        }
        if right {
            self.eyes.right.open();
        }
    }

    /// Point the left eye at an anchor; only targets change
    pub fn look_at(&mut self, position: Position) {
        let center = (self.eyes.left.x.default, self.eyes.left.y.default);
        let (x, y) = position.target(self.constraint_x(), self.constraint_y(), center);
        self.eyes.left.x.next = x;
        self.eyes.left.y.next = y;
        debug!(?position, x, y, "gaze target");
    }

    pub fn resize_screen(&mut self, width: i32, height: i32) {
        self.screen_width = width;
        self.screen_height = height;
        self.eyes.center_defaults(width, height);
        self.eyes.retarget_defaults();
    }

    pub fn set_width(&mut self, left: i32, right: i32) {
        self.eyes.left.width.set_default(left);
        self.eyes.right.width.set_default(right);
        self.eyes.center_defaults(self.screen_width, self.screen_height);
    }

    pub fn set_height(&mut self, left: i32, right: i32) {
        self.eyes.left.height.set_default(left);
        self.eyes.right.height.set_default(right);
        self.eyes.center_defaults(self.screen_width, self.screen_height);
    }

    pub fn set_border_radius(&mut self, left: i32, right: i32) {
        self.eyes.left.border_radius.set_default(left);
        self.eyes.right.border_radius.set_default(right);
    }

    pub fn set_spacing(&mut self, spacing: i32) {
        self.eyes.spacing.set_default(spacing);
        self.eyes.center_defaults(self.screen_width, self.screen_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_face_starts_shut_and_centered() {
        let face = FaceState::new(&EngineConfig::default());
        assert_eq!(face.eyes.left.height.current, MIN_EYE_HEIGHT);
        assert_eq!(face.eyes.left.height.next, 36);
        assert!(face.eyes.left.open);
        assert_eq!((face.eyes.left.x.current, face.eyes.left.y.current), (26, 102));
        assert_eq!((face.eyes.right.x.next, face.eyes.right.y.next), (72, 102));
    }

    #[test]
    fn flicker_amplitudes_come_from_config() {
        let face = FaceState::new(&EngineConfig {
            flicker: crate::config::FlickerConfig {
                h_amplitude: 4,
                v_amplitude: 6,
            },
            ..EngineConfig::default()
        });
        assert_eq!(face.h_flicker.amplitude, 4);
        assert_eq!(face.v_flicker.amplitude, 6);
        assert!(!face.h_flicker.enabled && !face.v_flicker.enabled);
    }

    #[test]
    fn per_eye_close_leaves_other_eye_alone() {
        let mut face = FaceState::new(&EngineConfig::default());
        face.close(true, false);
        assert!(!face.eyes.left.open);
        assert!(face.eyes.right.open);
        assert_eq!(face.eyes.right.height.next, 36);
    }

    #[test]
    fn resizing_retargets_to_new_center() {
        let mut face = FaceState::new(&EngineConfig::default());
        face.resize_screen(240, 135);
        assert_eq!(face.eyes.left.x.next, (240 - 82) / 2);
        assert_eq!(face.eyes.left.y.next, (135 - 36) / 2);
        // Current position is reached by interpolation, not assigned
        assert_eq!(face.eyes.left.x.current, 26);
    }

    #[test]
    fn width_setter_updates_default_and_target() {
        let mut face = FaceState::new(&EngineConfig::default());
        face.set_width(20, 30);
        assert_eq!(face.eyes.left.width.default, 20);
        assert_eq!(face.eyes.left.width.next, 20);
        assert_eq!(face.eyes.right.width.next, 30);
        assert_eq!(face.eyes.left.width.current, 36);
    }
}
