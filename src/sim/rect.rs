//! Axis-aligned rectangle geometry
//!
//! The field uses screen coordinates: x grows rightward, y grows downward,
//! so `y` is a rectangle's top edge and `bottom()` its larger coordinate.

/// An axis-aligned rectangle (top-left corner plus extents)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge (y axis points down)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// AABB overlap test. Strict inequalities: rectangles that merely touch
    /// along an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
