//! Robo Eyes - animated robot eyes for small pixel displays
//!
//! A pair of rounded-rectangle eyes that blink, wander, squint with mood and
//! shake with confusion or laughter, drawn at a fixed frame rate through a
//! small [`Surface`] port.
//!
//! # Architecture
//!
//! - **Geometry**: current/target/default triples smoothed once per frame
//! - **Behaviors**: timer-driven generators that only write targets
//! - **Compositor**: the per-frame interpolate, animate, draw, present pass
//! - **Scheduler**: non-blocking frame gate in front of the compositor

// Module declarations
pub mod behaviors;
pub mod color;
pub mod compositor;
pub mod config;
pub mod engine;
pub mod expression;
pub mod face;
pub mod geometry;
pub mod ports;
pub mod scheduler;

#[cfg(feature = "hardware")]
pub mod gamepad;
#[cfg(feature = "hardware")]
pub mod matrix;

pub use color::{Color, ColorPalette};
pub use config::EngineConfig;
pub use engine::RoboEyes;
pub use expression::{Mood, Position};
pub use ports::{Clock, ManualClock, RandomSource, StdRandom, Surface, SystemClock};
