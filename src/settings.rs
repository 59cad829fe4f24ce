//! Game settings and preferences
//!
//! Process-wide configuration: canvas geometry, pacing, spawn cadence, and
//! the collision variant. Persisted as JSON next to the binary; a missing or
//! malformed file falls back to defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{CollisionResponse, Layout};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Canvas ===
    /// Window width in pixels
    pub window_width: f32,
    /// Window height in pixels
    pub window_height: f32,
    /// Fraction of window height allotted to the ground band
    pub ground_ratio: f32,

    // === Pacing ===
    /// Target frame rate (Hz)
    pub framerate: u32,

    // === Gameplay ===
    /// Obstacle spawn timer interval
    pub spawn_interval_ms: u32,
    /// What a player/obstacle collision does
    pub on_collision: CollisionResponse,

    // === Demo ===
    /// Let the game play itself
    pub autopilot: bool,
    /// Frames the demo binary simulates before quitting
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            ground_ratio: GROUND_RATIO,
            framerate: FRAMERATE,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            on_collision: CollisionResponse::Reset,
            autopilot: true,
            demo_frames: 3600,
        }
    }
}

impl Settings {
    /// Settings file path
    const STORAGE_PATH: &'static str = "ofrenda_settings.json";

    /// Derive the run's window layout
    pub fn layout(&self) -> Layout {
        Layout::new(self.window_width, self.window_height, self.ground_ratio)
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::STORAGE_PATH) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::STORAGE_PATH);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(Self::STORAGE_PATH, json) {
                    log::warn!("Failed to save settings: {e}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }
}
