//! Ofrenda - a 2D side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `platform`: Windowing/input/timing collaborator surface + headless backend
//! - `game`: Frame-stepped game loop orchestration
//! - `settings`: Process-wide configuration

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
///
/// Positions are in pixels with y growing downward; velocities and
/// accelerations are in pixels per frame.
pub mod consts {
    /// Canvas size
    pub const WINDOW_WIDTH: f32 = 1080.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;

    /// Target frame rate (Hz)
    pub const FRAMERATE: u32 = 60;

    /// Fraction of window height allotted to the ground band
    pub const GROUND_RATIO: f32 = 0.20;

    /// Player start anchor (bottom-left; y comes from the layout's ground line)
    pub const PLAYER_START_X: f32 = 30.0;
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 96.0;

    /// Constant downward acceleration on the player
    pub const GRAVITY: f32 = 0.4;
    /// Upward impulse applied on jump
    pub const JUMP_IMPULSE: f32 = -10.0;
    /// Horizontal speed while a directional key is held
    pub const RUN_SPEED: f32 = 5.0;

    /// Obstacle defaults - spawn offscreen right, scroll left
    pub const OBSTACLE_WIDTH: f32 = 48.0;
    pub const OBSTACLE_HEIGHT: f32 = 48.0;
    pub const OBSTACLE_SCROLL_VEL: f32 = -5.0;
    pub const OBSTACLE_SPAWN_X_MIN: i32 = 1100;
    pub const OBSTACLE_SPAWN_X_MAX: i32 = 1300;
    /// Periodic obstacle spawn interval
    pub const SPAWN_INTERVAL_MS: u32 = 1500;

    /// Title-screen character bounce speed
    pub const TITLE_BOUNCE_VEL: f32 = 4.0;
}
