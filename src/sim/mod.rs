//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-stepped only (constants are in px/frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;
pub mod title;

pub use collision::{CollisionResponse, player_hits_any, resolve_collisions};
pub use layout::Layout;
pub use obstacle::Obstacle;
pub use player::{Facing, Player};
pub use rect::Rect;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use title::TitleScreen;
