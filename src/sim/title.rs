//! Title-screen bounce animation
//!
//! A character paces back and forth along the ground line, reversing and
//! flipping its facing when it reaches either window edge.

use glam::Vec2;

use super::layout::Layout;
use super::player::Facing;
use super::rect::Rect;
use crate::consts::*;

/// The bouncing character shown while waiting on the title screen
#[derive(Debug, Clone)]
pub struct TitleScreen {
    pub rect: Rect,
    /// Horizontal velocity in px/frame; sign is the travel direction
    pub vel_x: f32,
    pub facing: Facing,
}

impl TitleScreen {
    pub fn new(layout: &Layout) -> Self {
        Self {
            rect: Rect::from_bottomleft(
                Vec2::new(0.0, layout.ground_y()),
                Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            ),
            vel_x: TITLE_BOUNCE_VEL,
            facing: Facing::Right,
        }
    }

    /// Advance one frame of the bounce, reversing at the window edges
    pub fn advance(&mut self, window_width: f32) {
        if self.rect.right() >= window_width && self.vel_x > 0.0 {
            self.vel_x = -self.vel_x;
            self.facing = Facing::Left;
        } else if self.rect.left() <= 0.0 && self.vel_x < 0.0 {
            self.vel_x = -self.vel_x;
            self.facing = Facing::Right;
        }
        self.rect.pos.x += self.vel_x;
    }
}
