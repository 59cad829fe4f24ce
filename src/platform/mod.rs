//! Platform abstraction layer
//!
//! The windowing/rendering/input library is an external collaborator; the
//! game consumes it through the `Backend` trait: a non-blocking event drain,
//! a renderer for the current state, periodic timers, and frame pacing.
//! `headless` implements the trait without a display for tests and the demo
//! binary.

pub mod headless;

pub use headless::HeadlessBackend;

use crate::sim::GameState;

/// Handle for a registered periodic timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(pub u32);

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Left,
    Right,
}

/// Platform input events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Close requested; the loop exits
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer press at window coordinates
    PointerDown { x: f32, y: f32 },
    /// A registered periodic timer fired
    Timer(TimerId),
}

/// The collaborator surface consumed by the game loop
///
/// Failures behind this boundary (window creation, asset loading) are fatal;
/// implementations terminate the process rather than report errors upward.
pub trait Backend {
    /// Register a periodic timer that fires every `interval_ms`
    fn register_timer(&mut self, interval_ms: u32) -> TimerId;

    /// Drain all pending events without blocking
    fn poll_events(&mut self) -> Vec<Event>;

    /// Draw the current frame (background, ground, sky, entities)
    fn render(&mut self, state: &GameState);

    /// Block until the next frame boundary; returns elapsed ms
    fn pace(&mut self, target_fps: u32) -> f32;
}
