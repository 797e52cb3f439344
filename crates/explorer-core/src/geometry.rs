// File: crates/explorer-core/src/geometry.rs
// Summary: Lightweight pixel-space helpers for pointer positions and drag rectangles.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Offset of `self` from `origin`.
    pub fn delta_from(&self, origin: PixelPoint) -> (f64, f64) { (self.x - origin.x, self.y - origin.y) }
}

/// Axis-aligned rectangle; origin is the top-left corner, sizes are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// Rectangle spanning two corners in any order.
    pub fn from_corners(a: PixelPoint, b: PixelPoint) -> Self {
        Self { x: a.x.min(b.x), y: a.y.min(b.y), width: (b.x - a.x).abs(), height: (b.y - a.y).abs() }
    }
    pub const fn left(&self) -> f64 { self.x }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub const fn top(&self) -> f64 { self.y }
    pub fn bottom(&self) -> f64 { self.y + self.height }
}
