//! Game state
//!
//! All mutable state for a run lives here, owned by the game loop and passed
//! explicitly. There are no module-level flags or globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::CollisionResponse;
use super::layout::Layout;
use super::obstacle::Obstacle;
use super::player::Player;
use super::title::TitleScreen;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen with the bouncing character, waiting for start input
    Title,
    /// The play field is simulating and rendering
    Playing,
    /// Round ended (terminal collision variant); static screen until restart
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Window/ground/sky geometry, immutable per run
    pub layout: Layout,
    pub player: Player,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    pub title: TitleScreen,
    /// What a player/obstacle collision does
    pub response: CollisionResponse,
    /// Frame counter
    pub frames: u64,
    /// Collisions handled so far (resets or round ends)
    pub collisions: u32,
    /// Seeded RNG for obstacle spawn positions
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh state on the title screen
    pub fn new(seed: u64, layout: Layout, response: CollisionResponse) -> Self {
        Self {
            seed,
            phase: GamePhase::Title,
            layout,
            player: Player::new(layout.ground_y()),
            obstacles: Vec::new(),
            title: TitleScreen::new(&layout),
            response,
            frames: 0,
            collisions: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start (or restart) a round: clean play field, player at the anchor
    pub fn start_round(&mut self) {
        self.obstacles.clear();
        self.player.reset();
        self.phase = GamePhase::Playing;
    }
}
