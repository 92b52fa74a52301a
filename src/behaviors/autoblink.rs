use tracing::trace;

use super::{jittered_deadline, Behavior};
use crate::config::{TimerConfig, BLINK_CLOSED_MS};
use crate::face::FaceState;
use crate::ports::RandomSource;

/// Periodic blinking.
///
/// Idle until the schedule elapses, then closes both eyes and holds them shut
/// for [`BLINK_CLOSED_MS`] before reopening.
#[derive(Debug, Clone)]
pub struct Autoblink {
    config: TimerConfig,
    next_blink_at: u64,
    holding: bool,
    reopen_at: u64,
    hold_ms: u64,
}

impl Autoblink {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            next_blink_at: 0,
            holding: false,
            reopen_at: 0,
            hold_ms: BLINK_CLOSED_MS,
        }
    }

    /// Reconfigure and restart the schedule from `now`.
    ///
    /// Returns true if a blink was cut short while the eyes were held shut.
    pub fn configure(&mut self, config: TimerConfig, now: u64, rng: &mut dyn RandomSource) -> bool {
        self.config = config;
        self.next_blink_at = jittered_deadline(now, config.interval_secs, config.variation_secs, rng);
        std::mem::replace(&mut self.holding, false)
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    pub fn next_blink_at(&self) -> u64 {
        self.next_blink_at
    }
}

impl Behavior for Autoblink {
    fn name(&self) -> &str {
        "autoblink"
    }

    fn is_active(&self) -> bool {
        self.config.enabled || self.holding
    }

    fn update(&mut self, face: &mut FaceState, now: u64, rng: &mut dyn RandomSource) {
        if self.config.enabled && !self.holding && now >= self.next_blink_at {
            face.close(true, true);
            self.holding = true;
            self.reopen_at = now + self.hold_ms;
            self.next_blink_at = jittered_deadline(now, self.config.interval_secs, self.config.variation_secs, rng);
            trace!(now, next = self.next_blink_at, "blink closed");
        }

        if self.holding && now >= self.reopen_at {
            face.open(true, true);
            self.holding = false;
            trace!(now, "blink reopened");
        }
    }
}
