//! Headless backend
//!
//! Drives the game loop without a display: timers fire on frame counts,
//! input comes from a script of (frame, event) pairs, rendering is a no-op,
//! and pacing returns immediately. Used by the demo binary and the loop
//! tests.

use std::collections::VecDeque;

use super::{Backend, Event, Key, TimerId};
use crate::sim::{GamePhase, GameState};

/// A display-less `Backend` with scripted input and frame-counted timers
#[derive(Debug)]
pub struct HeadlessBackend {
    framerate: u32,
    /// Frames polled so far; the frame counter for timers and the script
    frame: u64,
    timers: Vec<(TimerId, u64)>,
    next_timer: u32,
    /// Pending scripted events, sorted by frame
    script: VecDeque<(u64, Event)>,
    /// Emit `Quit` once this many frames have been polled
    frame_limit: Option<u64>,
    frames_rendered: u64,
}

impl HeadlessBackend {
    pub fn new(framerate: u32) -> Self {
        Self {
            framerate,
            frame: 0,
            timers: Vec::new(),
            next_timer: 0,
            script: VecDeque::new(),
            frame_limit: None,
            frames_rendered: 0,
        }
    }

    /// Quit after this many frames
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Schedule an event for a future frame; must be called in frame order
    pub fn script(&mut self, frame: u64, event: Event) {
        debug_assert!(self.script.back().is_none_or(|(f, _)| *f <= frame));
        self.script.push_back((frame, event));
    }

    /// Convenience: press and release a key on consecutive frames
    pub fn script_key_tap(&mut self, frame: u64, key: Key) {
        self.script(frame, Event::KeyDown(key));
        self.script(frame + 1, Event::KeyUp(key));
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl Backend for HeadlessBackend {
    fn register_timer(&mut self, interval_ms: u32) -> TimerId {
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        // Round the interval to whole frames, at least one
        let interval_frames = (interval_ms as u64 * self.framerate as u64 / 1000).max(1);
        self.timers.push((id, interval_frames));
        id
    }

    fn poll_events(&mut self) -> Vec<Event> {
        self.frame += 1;
        let mut events = Vec::new();

        while let Some((frame, event)) = self.script.front().copied() {
            if frame > self.frame {
                break;
            }
            self.script.pop_front();
            events.push(event);
        }

        for (id, interval) in &self.timers {
            if self.frame % interval == 0 {
                events.push(Event::Timer(*id));
            }
        }

        if self.frame_limit.is_some_and(|limit| self.frame > limit) {
            events.push(Event::Quit);
        }

        events
    }

    fn render(&mut self, state: &GameState) {
        self.frames_rendered += 1;
        if state.frames % 600 == 0 {
            log::debug!(
                "frame {}: phase {:?}, {} obstacle(s), player at {:?}",
                state.frames,
                state.phase,
                state.obstacles.len(),
                state.player.rect.bottomleft()
            );
        }
        if state.phase == GamePhase::GameOver {
            log::trace!("game over screen");
        }
    }

    fn pace(&mut self, target_fps: u32) -> f32 {
        // No sleeping headless; report the nominal frame time
        1000.0 / target_fps.max(1) as f32
    }
}
