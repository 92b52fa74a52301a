use tracing::trace;

use super::{jittered_deadline, Behavior};
use crate::config::TimerConfig;
use crate::face::FaceState;
use crate::ports::RandomSource;

/// Random gaze changes on a jittered timer.
///
/// Only the left eye's target is picked; the right eye follows through the
/// pair coupling.
#[derive(Debug, Clone)]
pub struct IdleWander {
    config: TimerConfig,
    next_move_at: u64,
}

impl IdleWander {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            next_move_at: 0,
        }
    }

    /// Turning the generator on makes it move on the next frame
    pub fn configure(&mut self, config: TimerConfig, now: u64) {
        if config.enabled && !self.config.enabled {
            self.next_move_at = now;
        }
        self.config = config;
    }

    pub fn next_move_at(&self) -> u64 {
        self.next_move_at
    }
}

impl Behavior for IdleWander {
    fn name(&self) -> &str {
        "idle"
    }

    fn is_active(&self) -> bool {
        self.config.enabled
    }

    fn update(&mut self, face: &mut FaceState, now: u64, rng: &mut dyn RandomSource) {
        if !self.config.enabled || now < self.next_move_at {
            return;
        }

        let x = rng.random_below(face.constraint_x());
        let y = rng.random_below(face.constraint_y());
        face.eyes.left.x.next = x;
        face.eyes.left.y.next = y;
        self.next_move_at = jittered_deadline(now, self.config.interval_secs, self.config.variation_secs, rng);
        trace!(x, y, next = self.next_move_at, "idle gaze");
    }
}
