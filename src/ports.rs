//! Narrow interfaces to the outside world: the drawing surface, the
//! monotonic clock and the random source, plus the stock implementations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;

/// A frame surface the compositor draws into.
///
/// Drawing happens off-screen until [`Surface::present`] is called.
pub trait Surface {
    fn clear(&mut self, color: Color);

    fn fill_round_rect(&mut self, x: i32, y: i32, width: i32, height: i32, radius: i32, color: Color);

    #[allow(clippy::too_many_arguments)]
    fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color);

    /// Re-provision the backing buffer for a new screen size
    fn resize(&mut self, width: i32, height: i32);

    fn present(&mut self);
}

/// Monotonic millisecond clock
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Bounded pseudo-random integers
pub trait RandomSource {
    /// Uniform value in `[0, bound)`; any `bound <= 0` yields 0
    fn random_below(&mut self, bound: i32) -> i32;
}

// ============================================================================
// CLOCKS
// ============================================================================

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a host (or a test) can keep one handle and
/// hand the other to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_millis)),
        }
    }

    pub fn set(&self, millis: u64) {
        self.now.store(millis, Ordering::Relaxed);
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}

// ============================================================================
// RANDOM SOURCES
// ============================================================================

pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn random_below(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Always answers the same value, clamped into range
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom(pub i32);

impl RandomSource for FixedRandom {
    fn random_below(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }
        self.0.clamp(0, bound - 1)
    }
}

// ============================================================================
// RECORDING SURFACE
// ============================================================================

/// One draw call as issued by the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    RoundRect { x: i32, y: i32, width: i32, height: i32, radius: i32, color: Color },
    Triangle { points: [(i32, i32); 3], color: Color },
}

/// Headless surface that keeps the draw calls of the last presented frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    presented: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> usize {
        self.presented
    }

    /// Rounded rectangles of the last frame drawn in `color`
    pub fn round_rects(&self, color: Color) -> Vec<DrawCommand> {
        self.last_frame
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::RoundRect { color: c, .. } if *c == color))
            .copied()
            .collect()
    }

    pub fn triangles(&self) -> Vec<DrawCommand> {
        self.last_frame
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Triangle { .. }))
            .copied()
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
    }

    fn fill_round_rect(&mut self, x: i32, y: i32, width: i32, height: i32, radius: i32, color: Color) {
        self.pending.push(DrawCommand::RoundRect { x, y, width, height, radius, color });
    }

    fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color) {
        self.pending.push(DrawCommand::Triangle {
            points: [(x1, y1), (x2, y2), (x3, y3)],
            color,
        });
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.pending.clear();
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.presented += 1;
    }
}
