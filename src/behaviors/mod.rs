// Behavior generators: each one only writes targets and flicker flags
pub mod autoblink;
pub mod burst;
pub mod curiosity;
pub mod flicker;
pub mod idle;

pub use autoblink::Autoblink;
pub use burst::{Burst, BurstKind};
pub use curiosity::height_offsets;
pub use flicker::Flicker;
pub use idle::IdleWander;

use crate::config::TimerConfig;
use crate::face::FaceState;
use crate::ports::RandomSource;

/// Common interface for the timer-driven generators
pub trait Behavior {
    fn name(&self) -> &str;

    /// Whether the generator is currently doing anything
    fn is_active(&self) -> bool;

    /// Poll the generator against the clock and write into the face
    fn update(&mut self, face: &mut FaceState, now: u64, rng: &mut dyn RandomSource);
}

/// `now + interval + uniform[0, variation)` seconds, in milliseconds
pub fn jittered_deadline(now: u64, interval_secs: u32, variation_secs: u32, rng: &mut dyn RandomSource) -> u64 {
    let variation = i32::try_from(variation_secs).unwrap_or(i32::MAX);
    let jitter = u64::try_from(rng.random_below(variation)).unwrap_or(0);
    now + u64::from(interval_secs) * 1000 + jitter * 1000
}

/// The generators polled by every compositor pass, in polling order
#[derive(Debug, Clone)]
pub struct Behaviors {
    pub autoblink: Autoblink,
    pub laugh: Burst,
    pub confusion: Burst,
    pub idle: IdleWander,
}

impl Behaviors {
    pub fn new(autoblink: TimerConfig, idle: TimerConfig) -> Self {
        Self {
            autoblink: Autoblink::new(autoblink),
            laugh: Burst::new(BurstKind::Laugh),
            confusion: Burst::new(BurstKind::Confusion),
            idle: IdleWander::new(idle),
        }
    }

    pub fn update_all(&mut self, face: &mut FaceState, now: u64, rng: &mut dyn RandomSource) {
        let generators: [&mut dyn Behavior; 4] = [
            &mut self.autoblink,
            &mut self.laugh,
            &mut self.confusion,
            &mut self.idle,
        ];
        for generator in generators {
            generator.update(face, now, rng);
        }
    }

    /// Names of the generators currently running
    pub fn active(&self) -> Vec<&str> {
        let generators: [&dyn Behavior; 4] = [&self.autoblink, &self.laugh, &self.confusion, &self.idle];
        generators
            .into_iter()
            .filter(|g| g.is_active())
            .map(|g| g.name())
            .collect()
    }
}
