use tracing::trace;

use super::Behavior;
use crate::config::{CONFUSION_AMPLITUDE, CONFUSION_DURATION_MS, LAUGH_AMPLITUDE, LAUGH_DURATION_MS};
use crate::face::FaceState;
use crate::ports::RandomSource;

/// Which flicker a burst drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    Confusion,  // Horizontal shake
    Laugh,      // Vertical bounce
}

impl BurstKind {
    fn amplitude(self) -> i32 {
        match self {
            BurstKind::Confusion => CONFUSION_AMPLITUDE,
            BurstKind::Laugh => LAUGH_AMPLITUDE,
        }
    }

    fn duration_ms(self) -> u64 {
        match self {
            BurstKind::Confusion => CONFUSION_DURATION_MS,
            BurstKind::Laugh => LAUGH_DURATION_MS,
        }
    }
}

/// One-shot, fixed-length flicker effect.
///
/// Triggering while a burst is running does not extend it.
#[derive(Debug, Clone)]
pub struct Burst {
    kind: BurstKind,
    active: bool,
    pending_start: bool,
    started_at: u64,
}

impl Burst {
    pub fn new(kind: BurstKind) -> Self {
        Self {
            kind,
            active: false,
            pending_start: true,
            started_at: 0,
        }
    }

    pub fn trigger(&mut self) {
        self.active = true;
    }

    /// Start time of the running burst
    pub fn started_at(&self) -> Option<u64> {
        (self.active && !self.pending_start).then_some(self.started_at)
    }
}

impl Behavior for Burst {
    fn name(&self) -> &str {
        match self.kind {
            BurstKind::Confusion => "confusion",
            BurstKind::Laugh => "laugh",
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn update(&mut self, face: &mut FaceState, now: u64, _rng: &mut dyn RandomSource) {
        if !self.active {
            return;
        }

        let flicker = match self.kind {
            BurstKind::Confusion => &mut face.h_flicker,
            BurstKind::Laugh => &mut face.v_flicker,
        };

        if self.pending_start {
            flicker.set(true, Some(self.kind.amplitude()));
            self.started_at = now;
            self.pending_start = false;
            trace!(kind = ?self.kind, now, "burst started");
        } else if now >= self.started_at + self.kind.duration_ms() {
            flicker.set(false, Some(0));
            self.pending_start = true;
            self.active = false;
            trace!(kind = ?self.kind, now, "burst finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::ports::FixedRandom;

    #[test]
    fn confusion_runs_for_fixed_duration() {
        let mut face = FaceState::new(&EngineConfig::default());
        let mut rng = FixedRandom(0);
        let mut burst = Burst::new(BurstKind::Confusion);
        burst.trigger();

        burst.update(&mut face, 100, &mut rng);
        assert!(face.h_flicker.enabled);
        assert_eq!(face.h_flicker.amplitude, CONFUSION_AMPLITUDE);
        assert_eq!(burst.started_at(), Some(100));

        burst.trigger();
        burst.update(&mut face, 100 + CONFUSION_DURATION_MS - 1, &mut rng);
        assert!(burst.is_active());

        burst.update(&mut face, 100 + CONFUSION_DURATION_MS, &mut rng);
        assert!(!burst.is_active());
        assert!(!face.h_flicker.enabled);
        assert_eq!(face.h_flicker.amplitude, 0);
        assert!(!face.v_flicker.enabled);
    }

    #[test]
    fn laugh_drives_vertical_flicker_and_rearms() {
        let mut face = FaceState::new(&EngineConfig::default());
        let mut rng = FixedRandom(0);
        let mut burst = Burst::new(BurstKind::Laugh);

        burst.trigger();
        burst.update(&mut face, 0, &mut rng);
        burst.update(&mut face, LAUGH_DURATION_MS, &mut rng);
        assert!(!face.v_flicker.enabled);

        burst.trigger();
        burst.update(&mut face, 2_000, &mut rng);
        assert!(face.v_flicker.enabled);
        assert_eq!(face.v_flicker.amplitude, LAUGH_AMPLITUDE);
        assert_eq!(burst.started_at(), Some(2_000));
    }
}
