//! Player entity: gravity, jumping, horizontal running
//!
//! The "grounded" test is the exact comparison `bottom >= ground_y`, used for
//! both the landing clamp and jump eligibility. There is no separate boolean
//! flag and no epsilon.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// Which way the sprite faces; flips the rendered image, not the bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Sign of the direction on the x axis
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Velocity in px/frame
    pub vel: Vec2,
    /// Acceleration in px/frame²; only gravity on the y axis in practice
    pub acc: Vec2,
    pub facing: Facing,
    /// The y-coordinate the bottom edge rests on
    pub ground_y: f32,
}

impl Player {
    /// Create a player standing at the start anchor on the ground line
    pub fn new(ground_y: f32) -> Self {
        Self {
            rect: Rect::from_bottomleft(
                Vec2::new(PLAYER_START_X, ground_y),
                Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            ),
            vel: Vec2::ZERO,
            acc: Vec2::new(0.0, GRAVITY),
            facing: Facing::Right,
            ground_y,
        }
    }

    /// Whether the bottom edge is at or below the ground line
    #[inline]
    pub fn grounded(&self) -> bool {
        self.rect.bottom() >= self.ground_y
    }

    /// Jump if currently grounded; a no-op while airborne
    pub fn jump(&mut self) {
        if self.grounded() {
            self.vel.y = JUMP_IMPULSE;
        }
    }

    /// Start running in a direction (key-down)
    pub fn run(&mut self, dir: Facing) {
        self.vel.x = dir.sign() * RUN_SPEED;
        self.facing = dir;
    }

    /// Stop horizontal movement (key-up of either directional key)
    pub fn halt(&mut self) {
        self.vel.x = 0.0;
    }

    /// Accelerate downward, integrate vertical position, clamp to the ground
    pub fn apply_gravity(&mut self) {
        self.vel.y += self.acc.y;
        self.rect.pos.y += self.vel.y;

        if self.rect.bottom() >= self.ground_y {
            self.rect.set_bottom(self.ground_y);
            self.vel.y = 0.0;
        }
    }

    /// Advance one frame: horizontal velocity, then gravity + ground clamp
    pub fn advance(&mut self) {
        self.rect.pos.x += self.vel.x;
        self.apply_gravity();
    }

    /// Reposition to the start anchor with zero velocity (collision reset)
    pub fn reset(&mut self) {
        self.vel = Vec2::ZERO;
        self.rect = Rect::from_bottomleft(
            Vec2::new(PLAYER_START_X, self.ground_y),
            self.rect.size,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GROUND_Y: f32 = 576.0;

    #[test]
    fn test_grounded_frame_clamps() {
        // At rest on the ground: gravity accumulates mid-frame, then the
        // clamp restores bottom == ground_y and zeroes vel_y
        let mut player = Player::new(GROUND_Y);
        player.advance();
        assert_eq!(player.rect.bottom(), GROUND_Y);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = Player::new(GROUND_Y);
        player.jump();
        assert_eq!(player.vel.y, JUMP_IMPULSE);

        player.advance(); // now airborne
        assert!(!player.grounded());
        let vel_before = player.vel.y;
        player.jump(); // no-op
        assert_eq!(player.vel.y, vel_before);
    }

    #[test]
    fn test_jump_arc_velocity() {
        // After N airborne frames, vel_y == -10 + 0.4*N
        let mut player = Player::new(GROUND_Y);
        player.jump();
        for n in 1..=20u32 {
            player.advance();
            let expected = JUMP_IMPULSE + GRAVITY * n as f32;
            assert!(
                (player.vel.y - expected).abs() < 1e-3,
                "frame {n}: vel_y {} != {expected}",
                player.vel.y
            );
        }
    }

    #[test]
    fn test_landing_restores_ground_state() {
        let mut player = Player::new(GROUND_Y);
        player.jump();
        let mut frames = 0;
        loop {
            player.advance();
            frames += 1;
            if player.grounded() {
                break;
            }
            assert!(frames < 120, "never landed");
        }
        // Full arc with impulse -10 and gravity 0.4 lands around frame 49
        assert!((45..=55).contains(&frames), "landed at frame {frames}");
        assert_eq!(player.rect.bottom(), GROUND_Y);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_run_and_halt() {
        let mut player = Player::new(GROUND_Y);
        player.run(Facing::Left);
        assert_eq!(player.vel.x, -RUN_SPEED);
        assert_eq!(player.facing, Facing::Left);

        player.run(Facing::Right);
        assert_eq!(player.vel.x, RUN_SPEED);
        assert_eq!(player.facing, Facing::Right);

        player.halt();
        assert_eq!(player.vel.x, 0.0);
        // Facing is unchanged by stopping
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_reset_restores_start_anchor() {
        let mut player = Player::new(GROUND_Y);
        player.run(Facing::Right);
        player.jump();
        for _ in 0..10 {
            player.advance();
        }
        player.reset();
        assert_eq!(player.rect.bottomleft(), Vec2::new(PLAYER_START_X, GROUND_Y));
        assert_eq!(player.vel, Vec2::ZERO);
    }

    proptest! {
        /// Airborne velocity grows by exactly the gravity constant each frame
        #[test]
        fn prop_airborne_gravity_accumulates(impulse in -20.0f32..-5.0) {
            let mut player = Player::new(GROUND_Y);
            player.vel.y = impulse;
            let mut prev = player.vel.y;
            loop {
                player.advance();
                if player.grounded() {
                    break;
                }
                prop_assert!((player.vel.y - (prev + GRAVITY)).abs() < 1e-3);
                prev = player.vel.y;
            }
        }

        /// Whatever height the player falls from, the corrected state after
        /// landing satisfies bottom == ground_y and vel_y == 0
        #[test]
        fn prop_landing_invariant(drop in 1.0f32..400.0, vel0 in 0.0f32..15.0) {
            let mut player = Player::new(GROUND_Y);
            player.rect.set_bottom(GROUND_Y - drop);
            player.vel.y = vel0;
            for _ in 0..2000 {
                player.advance();
                if player.grounded() {
                    break;
                }
            }
            prop_assert!(player.grounded());
            prop_assert_eq!(player.rect.bottom(), GROUND_Y);
            prop_assert_eq!(player.vel.y, 0.0);
        }
    }
}
