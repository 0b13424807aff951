//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in playfield space (pixels, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from a top-left corner and a size vector.
    pub fn from_corner(pos: DVec2, size: DVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// A zero-size rectangle at the given point.
    pub fn empty_at(pos: DVec2) -> Self {
        Self::new(pos.x, pos.y, 0.0, 0.0)
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Overlap test. Touching edges do not count; empty rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

/// Playfield dimensions. Every bounds-dependent rule reads these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_FIELD_WIDTH,
            height: crate::constants::DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Length of the playfield diagonal.
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// True when a box at `pos` with `size` lies entirely outside the field.
    pub fn is_fully_outside(&self, pos: DVec2, size: DVec2) -> bool {
        pos.x + size.x < 0.0 || pos.x > self.width || pos.y + size.y < 0.0 || pos.y > self.height
    }

    /// True when a box at `pos` with `size` lies strictly inside the field.
    pub fn strictly_contains(&self, pos: DVec2, size: DVec2) -> bool {
        pos.x > 0.0 && pos.x + size.x < self.width && pos.y > 0.0 && pos.y + size.y < self.height
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
