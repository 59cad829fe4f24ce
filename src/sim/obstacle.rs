//! Scrolling obstacles
//!
//! Spawn offscreen right at a randomized x, scroll left at constant speed,
//! and are pruned from the active set once fully past the left edge.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// A leftward-scrolling obstacle resting on the ground line
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub rect: Rect,
    /// Horizontal velocity in px/frame (negative: leftward)
    pub vel_x: f32,
}

impl Obstacle {
    /// Spawn at a random x in the configured range, feet on the ground line
    pub fn spawn(rng: &mut Pcg32, ground_y: f32) -> Self {
        let x = rng.random_range(OBSTACLE_SPAWN_X_MIN..=OBSTACLE_SPAWN_X_MAX) as f32;
        Self::at(x, ground_y)
    }

    /// Place an obstacle at a fixed x (single-obstacle variants, tests)
    pub fn at(x: f32, ground_y: f32) -> Self {
        Self {
            rect: Rect::from_bottomleft(
                Vec2::new(x, ground_y),
                Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            ),
            vel_x: OBSTACLE_SCROLL_VEL,
        }
    }

    /// Advance one frame of horizontal scroll
    pub fn advance(&mut self) {
        self.rect.pos.x += self.vel_x;
    }

    /// True once the right edge has passed the left window edge
    #[inline]
    pub fn offscreen(&self) -> bool {
        self.rect.right() < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const GROUND_Y: f32 = 576.0;

    #[test]
    fn test_spawn_range_and_anchor() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let ob = Obstacle::spawn(&mut rng, GROUND_Y);
            let x = ob.rect.left();
            assert!(
                (OBSTACLE_SPAWN_X_MIN as f32..=OBSTACLE_SPAWN_X_MAX as f32).contains(&x),
                "spawn x {x} out of range"
            );
            assert_eq!(ob.rect.bottom(), GROUND_Y);
            assert_eq!(ob.vel_x, OBSTACLE_SCROLL_VEL);
        }
    }

    #[test]
    fn test_scroll_reaches_left_edge() {
        // Spawned at x=1200 with vel -5: after 240 frames x == 0 exactly
        let mut ob = Obstacle::at(1200.0, GROUND_Y);
        for _ in 0..240 {
            ob.advance();
        }
        assert_eq!(ob.rect.left(), 0.0);
        assert!(!ob.offscreen());
    }

    #[test]
    fn test_offscreen_once_right_edge_passes_zero() {
        let mut ob = Obstacle::at(0.0, GROUND_Y);
        // Right edge starts at OBSTACLE_WIDTH; scroll until it crosses zero
        while ob.rect.right() >= 0.0 {
            assert!(!ob.offscreen());
            ob.advance();
        }
        assert!(ob.offscreen());
    }
}
