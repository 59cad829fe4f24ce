//! Collision detection and reset handling
//!
//! After all entities have advanced, the player's bounding box is tested
//! against every active obstacle. What a hit does is configurable: the
//! resetting variant snaps the player back and clears the whole field; the
//! terminal variant ends the round and waits for restart input.

use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::rect::Rect;
use super::state::{GamePhase, GameState};

/// What happens when the player hits an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CollisionResponse {
    /// Reset the player to the start anchor and clear all obstacles
    #[default]
    Reset,
    /// End the round; the loop shows a static screen until restart input
    EndRound,
}

/// Test the player rect against every active obstacle
pub fn player_hits_any(player: &Rect, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|ob| player.overlaps(&ob.rect))
}

/// Run the per-frame collision check and apply the configured response
///
/// Returns true if a collision was handled. Checking again in the same frame
/// is a no-op: the reset clears the obstacle set, so nothing overlaps.
pub fn resolve_collisions(state: &mut GameState) -> bool {
    if !player_hits_any(&state.player.rect, &state.obstacles) {
        return false;
    }

    state.collisions += 1;
    match state.response {
        CollisionResponse::Reset => {
            state.player.reset();
            state.obstacles.clear();
        }
        CollisionResponse::EndRound => {
            state.phase = GamePhase::GameOver;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYER_START_X;
    use crate::sim::layout::Layout;
    use glam::Vec2;

    fn state_with(response: CollisionResponse) -> GameState {
        let layout = Layout::new(1080.0, 720.0, 0.20);
        let mut state = GameState::new(1, layout, response);
        state.start_round();
        state
    }

    #[test]
    fn test_no_overlap_no_reset() {
        let mut state = state_with(CollisionResponse::Reset);
        let ground_y = state.layout.ground_y();
        state.obstacles.push(Obstacle::at(800.0, ground_y));
        assert!(!resolve_collisions(&mut state));
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_reset_repositions_and_clears() {
        let mut state = state_with(CollisionResponse::Reset);
        let ground_y = state.layout.ground_y();
        state.player.rect.pos.x = 400.0;
        state.player.vel = Vec2::new(5.0, -3.0);
        // One obstacle on top of the player, one far away: both are cleared
        state.obstacles.push(Obstacle::at(410.0, ground_y));
        state.obstacles.push(Obstacle::at(900.0, ground_y));

        assert!(resolve_collisions(&mut state));
        assert_eq!(state.player.rect.bottomleft(), Vec2::new(PLAYER_START_X, ground_y));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.collisions, 1);
    }

    #[test]
    fn test_reset_is_idempotent_within_frame() {
        let mut state = state_with(CollisionResponse::Reset);
        let ground_y = state.layout.ground_y();
        state.obstacles.push(Obstacle::at(state.player.rect.left() + 10.0, ground_y));

        assert!(resolve_collisions(&mut state));
        // Second check against the now-empty set must not re-trigger
        assert!(!resolve_collisions(&mut state));
        assert_eq!(state.collisions, 1);
    }

    #[test]
    fn test_end_round_variant_goes_game_over() {
        let mut state = state_with(CollisionResponse::EndRound);
        let ground_y = state.layout.ground_y();
        state.obstacles.push(Obstacle::at(state.player.rect.left() + 10.0, ground_y));

        assert!(resolve_collisions(&mut state));
        assert_eq!(state.phase, GamePhase::GameOver);
        // Terminal variant leaves the field as-is
        assert_eq!(state.obstacles.len(), 1);
    }
}
