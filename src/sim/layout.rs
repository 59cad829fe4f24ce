//! Window layout: ground and sky bands
//!
//! Derived once per run from the window size and the ground ratio. Pure data.

use super::rect::Rect;

/// Ground/sky geometry for a window
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    /// Fraction of window height allotted to the ground band, in (0, 1)
    pub ground_ratio: f32,
}

impl Layout {
    pub fn new(width: f32, height: f32, ground_ratio: f32) -> Self {
        Self {
            width,
            height,
            ground_ratio,
        }
    }

    /// The y-coordinate of the ground line (top edge of the ground band)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height * (1.0 - self.ground_ratio)
    }

    /// Ground band rectangle
    pub fn ground(&self) -> Rect {
        Rect::new(0.0, self.ground_y(), self.width, self.height * self.ground_ratio)
    }

    /// Sky band rectangle (everything above the ground line)
    pub fn sky(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.ground_y())
    }
}
