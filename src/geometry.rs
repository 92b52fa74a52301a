//! Eye geometry model.
//!
//! Every animated quantity is a [`Smoothed`] triple: the value drawn this
//! frame (`current`), the value it is being pulled toward (`next`) and the
//! rest value (`default`). Only behaviors and API calls write `next`; the
//! compositor moves `current` toward it with [`halve_the_gap`].

use crate::config::MIN_EYE_HEIGHT;

/// One step of single-pole smoothing with truncating integer division.
///
/// Convergence is asymptotic: approaching from below stalls one unit short of
/// the target.
pub fn halve_the_gap(current: i32, target: i32) -> i32 {
    (current + target) / 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Smoothed {
    pub current: i32,
    pub next: i32,
    pub default: i32,
}

impl Smoothed {
    pub fn new(value: i32) -> Self {
        Self {
            current: value,
            next: value,
            default: value,
        }
    }

    /// New rest value, also becoming the target
    pub fn set_default(&mut self, value: i32) {
        self.default = value;
        self.next = value;
    }

    pub fn step(&mut self) {
        self.current = halve_the_gap(self.current, self.next);
    }
}

/// Geometry of one eye
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeGeometry {
    pub width: Smoothed,
    pub height: Smoothed,
    pub x: Smoothed,
    pub y: Smoothed,
    pub border_radius: Smoothed,
    pub height_offset: i32,  // Curiosity widening, recomputed every frame
    pub open: bool,
}

impl EyeGeometry {
    pub fn new(width: i32, height: i32, border_radius: i32) -> Self {
        Self {
            width: Smoothed::new(width),
            height: Smoothed::new(height),
            x: Smoothed::new(0),
            y: Smoothed::new(0),
            border_radius: Smoothed::new(border_radius),
            height_offset: 0,
            open: true,
        }
    }

    /// Target the thinnest drawable slit with square corners
    pub fn close(&mut self) {
        self.height.next = MIN_EYE_HEIGHT;
        self.border_radius.next = 0;
        self.open = false;
    }

    pub fn open(&mut self) {
        self.open = true;
        self.height.next = self.height.default;
        self.border_radius.next = self.border_radius.default;
    }

    /// Blend the height (plus this frame's offset) and keep the eye centered.
    ///
    /// An open eye whose height decays to the closed value gets its target
    /// restored, and one that stalls within a unit of its target is snapped
    /// onto it, so reopening always lands exactly on the default height.
    pub fn step_height(&mut self) {
        let offset = self.height_offset;
        let target = self.height.next + offset;

        self.height.current = halve_the_gap(self.height.current, target);
        self.y.current += (self.height.default - self.height.current) / 2;
        self.y.current -= offset / 2;

        if self.open {
            if self.height.current <= MIN_EYE_HEIGHT + offset {
                self.height.next = self.height.default;
            }
            // Checked after the restore so short eyes still land on target
            if (self.height.next + offset - self.height.current).abs() <= 1 {
                self.height.current = self.height.next + offset;
            }
        }
    }

    /// Width, position and corner radius; no snap, the residual is accepted
    pub fn step_shape(&mut self) {
        self.width.step();
        self.x.step();
        self.y.step();
        self.border_radius.step();
    }

    pub fn is_closed(&self) -> bool {
        !self.open && self.height.current <= MIN_EYE_HEIGHT
    }
}

/// Both eyes plus the gap between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyePair {
    pub left: EyeGeometry,
    pub right: EyeGeometry,
    pub spacing: Smoothed,
}

impl EyePair {
    pub fn new(width: i32, height: i32, border_radius: i32, spacing: i32) -> Self {
        Self {
            left: EyeGeometry::new(width, height, border_radius),
            right: EyeGeometry::new(width, height, border_radius),
            spacing: Smoothed::new(spacing),
        }
    }

    /// Horizontal travel range for the left eye
    pub fn constraint_x(&self, screen_width: i32) -> i32 {
        screen_width - self.left.width.current - self.spacing.current - self.right.width.current
    }

    /// Vertical travel range for the left eye
    pub fn constraint_y(&self, screen_height: i32) -> i32 {
        screen_height - self.left.height.default
    }

    /// Recompute the resting positions that center the pair on screen.
    /// Targets are left alone.
    pub fn center_defaults(&mut self, screen_width: i32, screen_height: i32) {
        let footprint = self.left.width.default + self.spacing.default + self.right.width.default;
        self.left.x.default = (screen_width - footprint) / 2;
        self.left.y.default = (screen_height - self.left.height.default) / 2;
        self.right.x.default = self.left.x.default + self.left.width.default + self.spacing.default;
        self.right.y.default = self.left.y.default;
    }

    /// Send both eyes back to their resting positions
    pub fn retarget_defaults(&mut self) {
        self.left.x.next = self.left.x.default;
        self.left.y.next = self.left.y.default;
        self.right.x.next = self.right.x.default;
        self.right.y.next = self.right.y.default;
    }

    /// The right eye has no independent target: it trails the left eye's
    /// target by the left eye's width plus the gap.
    pub fn couple_right_to_left(&mut self) {
        self.right.x.next = self.left.x.next + self.left.width.current + self.spacing.current;
        self.right.y.next = self.left.y.next;
    }
}

/// Mood masks, each smoothed like the geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Eyelids {
    pub tired: Smoothed,
    pub angry: Smoothed,
    pub happy_bottom: Smoothed,
}
