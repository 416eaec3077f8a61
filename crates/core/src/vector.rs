//! The 2D signal value and canvas-space points.

/// Latest signal direction/magnitude reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// A position on the drawing surface, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by `v` scaled uniformly on both axes.
    ///
    /// Canvas y grows downward and the backend's y is applied as-is, so a
    /// negative y lands above the center.
    pub fn offset_by(self, v: Vector, scale: f64) -> Point {
        Point {
            x: self.x + v.x * scale,
            y: self.y + v.y * scale,
        }
    }
}
