//! Per-frame simulation tick
//!
//! Advances the game state by exactly one frame. All constants are in
//! px/frame; pacing to the target frame rate is the backend's job.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::obstacle::Obstacle;
use super::player::Facing;
use super::state::{GamePhase, GameState};

/// How far ahead (px) the autopilot looks for an approaching obstacle
const AUTOPILOT_LOOKAHEAD: f32 = 90.0;

/// Input commands for a single frame
///
/// One-shot fields are set by the loop from drained events and cleared after
/// the tick consumes them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary button (space): start on title, jump in play, restart after
    /// game over
    pub primary: bool,
    /// Directional key pressed this frame
    pub run: Option<Facing>,
    /// Either directional key released this frame
    pub halt: bool,
    /// Pointer press position; jumps when it lands on the player sprite
    pub tap: Option<Vec2>,
    /// Spawn timer fired this frame
    pub spawn: bool,
    /// Demo mode: the game plays itself
    pub autopilot: bool,
}

impl TickInput {
    /// Clear everything except sticky flags after a tick has consumed it
    pub fn clear_one_shots(&mut self) {
        self.primary = false;
        self.run = None;
        self.halt = false;
        self.tap = None;
        self.spawn = false;
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.frames += 1;

    match state.phase {
        GamePhase::Title => {
            let width = state.layout.width;
            state.title.advance(width);
            if input.primary {
                log::info!("Round started");
                state.start_round();
            }
        }

        GamePhase::GameOver => {
            if input.primary {
                log::info!("Round restarted");
                state.start_round();
            }
        }

        GamePhase::Playing => {
            let mut input = input.clone();
            if input.autopilot {
                drive_autopilot(state, &mut input);
            }

            // Input: horizontal keys, jump, tap-on-sprite
            if let Some(dir) = input.run {
                state.player.run(dir);
            }
            if input.halt {
                state.player.halt();
            }
            if input.primary {
                state.player.jump();
            }
            if let Some(pos) = input.tap {
                if state.player.rect.contains_point(pos) {
                    state.player.jump();
                }
            }

            // Periodic spawn
            if input.spawn {
                let ground_y = state.layout.ground_y();
                let ob = Obstacle::spawn(&mut state.rng, ground_y);
                log::debug!("Obstacle spawned at x={}", ob.rect.left());
                state.obstacles.push(ob);
            }

            // Integrate, prune, then collide
            state.player.advance();
            for ob in &mut state.obstacles {
                ob.advance();
            }
            state.obstacles.retain(|ob| !ob.offscreen());

            if resolve_collisions(state) {
                log::info!(
                    "Collision at frame {} (total {})",
                    state.frames,
                    state.collisions
                );
            }
        }
    }
}

/// Demo-mode pilot: jump when the nearest obstacle ahead gets close
fn drive_autopilot(state: &GameState, input: &mut TickInput) {
    if !state.player.grounded() {
        return;
    }
    let player_right = state.player.rect.right();
    let nearest_gap = state
        .obstacles
        .iter()
        .filter(|ob| ob.rect.right() > state.player.rect.left())
        .map(|ob| ob.rect.left() - player_right)
        .fold(f32::INFINITY, f32::min);
    if nearest_gap < AUTOPILOT_LOOKAHEAD {
        input.primary = true;
    }
}
