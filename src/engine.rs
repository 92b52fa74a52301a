//! The robot-eyes engine.
//!
//! [`RoboEyes`] owns the face state, the behavior generators, the frame gate
//! and the three ports. The host calls [`RoboEyes::update`] as often as it
//! likes; a compositor pass only runs when the frame gate opens.

use tracing::{debug, info, warn};

use crate::behaviors::{Behavior, Behaviors};
use crate::color::Color;
use crate::compositor::compose_frame;
use crate::config::{EngineConfig, TimerConfig, MIN_EYE_HEIGHT};
use crate::expression::{Mood, Position};
use crate::face::FaceState;
use crate::ports::{Clock, RandomSource, Surface};
use crate::scheduler::FrameScheduler;

pub struct RoboEyes<S, C, R> {
    surface: S,
    clock: C,
    rng: R,
    scheduler: FrameScheduler,
    face: FaceState,
    behaviors: Behaviors,
}

impl<S: Surface, C: Clock, R: RandomSource> RoboEyes<S, C, R> {
    pub fn new(surface: S, clock: C, rng: R) -> Self {
        Self::with_config(EngineConfig::default(), surface, clock, rng)
    }

    pub fn with_config(config: EngineConfig, surface: S, clock: C, rng: R) -> Self {
        let mut eyes = Self {
            surface,
            clock,
            rng,
            scheduler: FrameScheduler::new(config.frame_rate),
            face: FaceState::new(&config),
            behaviors: Behaviors::new(TimerConfig::autoblink(), TimerConfig::idle()),
        };
        // Timers need the clock, so they go through the setters
        let TimerConfig { enabled, interval_secs, variation_secs } = config.autoblink;
        eyes.set_autoblinker(enabled, interval_secs, variation_secs);
        let TimerConfig { enabled, interval_secs, variation_secs } = config.idle;
        eyes.set_idle_mode(enabled, interval_secs, variation_secs);
        eyes
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Provision the surface, shut both eyes and let them animate open
    pub fn begin(&mut self, frame_rate: u32) {
        self.surface.resize(self.face.screen_width, self.face.screen_height);
        self.surface.clear(self.face.background);

        self.face.eyes.left.height.current = MIN_EYE_HEIGHT;
        self.face.eyes.right.height.current = MIN_EYE_HEIGHT;
        self.face.open(true, true);

        self.set_frame_rate(frame_rate);
        self.scheduler.reset();
        info!(
            width = self.face.screen_width,
            height = self.face.screen_height,
            frame_rate,
            "robo eyes started"
        );
    }

    /// Render a frame if one is due. Returns whether a frame was drawn.
    pub fn update(&mut self) -> bool {
        let now = self.clock.now_millis();
        if !self.scheduler.poll(now) {
            return false;
        }
        compose_frame(&mut self.face, &mut self.behaviors, &mut self.surface, now, &mut self.rng);
        true
    }

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    pub fn set_frame_rate(&mut self, frame_rate: u32) {
        self.scheduler.set_frame_rate(frame_rate);
    }

    /// Recenter on a new screen and re-provision the surface
    pub fn set_screen_size(&mut self, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            warn!(width, height, "degenerate screen size");
        }
        self.face.resize_screen(width, height);
        self.surface.resize(width, height);
        debug!(width, height, "screen resized");
    }

    pub fn set_width(&mut self, left: i32, right: i32) {
        self.face.set_width(left, right);
    }

    pub fn set_height(&mut self, left: i32, right: i32) {
        self.face.set_height(left, right);
    }

    pub fn set_border_radius(&mut self, left: i32, right: i32) {
        self.face.set_border_radius(left, right);
    }

    pub fn set_spacing(&mut self, spacing: i32) {
        self.face.set_spacing(spacing);
    }

    pub fn set_colors(&mut self, main: Color, background: Color) {
        self.face.main_color = main;
        self.face.background = background;
    }

    pub fn set_mood(&mut self, mood: Mood) {
        if self.face.mood != mood {
            debug!(mood = mood.name(), "mood changed");
        }
        self.face.mood = mood;
    }

    pub fn set_position(&mut self, position: Position) {
        self.face.look_at(position);
    }

    pub fn set_cyclops(&mut self, enabled: bool) {
        self.face.cyclops = enabled;
        debug!(enabled, "cyclops mode");
    }

    pub fn set_curiosity(&mut self, enabled: bool) {
        self.face.curious = enabled;
        debug!(enabled, "curiosity");
    }

    /// Blink every `interval_secs` plus up to `variation_secs` of jitter,
    /// counting from now
    pub fn set_autoblinker(&mut self, enabled: bool, interval_secs: u32, variation_secs: u32) {
        let config = TimerConfig { enabled, interval_secs, variation_secs };
        let now = self.clock.now_millis();
        if self.behaviors.autoblink.configure(config, now, &mut self.rng) {
            // The hold was cut short; don't leave the eyes shut
            self.face.open(true, true);
        }
        debug!(enabled, interval_secs, variation_secs, "autoblink configured");
    }

    /// Wander to a random gaze every `interval_secs` plus jitter
    pub fn set_idle_mode(&mut self, enabled: bool, interval_secs: u32, variation_secs: u32) {
        let config = TimerConfig { enabled, interval_secs, variation_secs };
        let now = self.clock.now_millis();
        self.behaviors.idle.configure(config, now);
        debug!(enabled, interval_secs, variation_secs, "idle mode configured");
    }

    /// `None` keeps the current amplitude
    pub fn set_h_flicker(&mut self, enabled: bool, amplitude: Option<i32>) {
        self.face.h_flicker.set(enabled, amplitude);
    }

    pub fn set_v_flicker(&mut self, enabled: bool, amplitude: Option<i32>) {
        self.face.v_flicker.set(enabled, amplitude);
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    pub fn trigger_confusion(&mut self) {
        self.behaviors.confusion.trigger();
    }

    pub fn trigger_laugh(&mut self) {
        self.behaviors.laugh.trigger();
    }

    pub fn open_eyes(&mut self, left: bool, right: bool) {
        self.face.open(left, right);
    }

    pub fn close_eyes(&mut self, left: bool, right: bool) {
        self.face.close(left, right);
    }

    /// Close then immediately reopen; the interpolation does the rest
    pub fn blink(&mut self, left: bool, right: bool) {
        self.face.close(left, right);
        self.face.open(left, right);
    }

    // ========================================================================
    // STATE ACCESS
    // ========================================================================

    pub fn face(&self) -> &FaceState {
        &self.face
    }

    pub fn behaviors(&self) -> &Behaviors {
        &self.behaviors
    }

    pub fn mood(&self) -> Mood {
        self.face.mood
    }

    pub fn screen_constraint_x(&self) -> i32 {
        self.face.constraint_x()
    }

    pub fn screen_constraint_y(&self) -> i32 {
        self.face.constraint_y()
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.scheduler.interval_ms()
    }

    pub fn is_confused(&self) -> bool {
        self.behaviors.confusion.is_active()
    }

    pub fn is_laughing(&self) -> bool {
        self.behaviors.laugh.is_active()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
