//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: origin top-left, y grows downward. Entities anchor at
//! their bottom-left corner (feet on the ground line), so constructors and
//! accessors for that anchor are provided alongside the usual edges.

use glam::Vec2;

/// An axis-aligned bounding box, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width, height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Build a rect from its bottom-left anchor
    pub fn from_bottomleft(anchor: Vec2, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(anchor.x, anchor.y - size.y),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Bottom-left anchor point
    pub fn bottomleft(&self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    /// Move the rect so its bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Check if a point lies inside the rect (edges inclusive)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Exact rectangle intersection test (non-empty intersection area)
    ///
    /// Rects that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
