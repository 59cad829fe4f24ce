//! Game loop orchestration
//!
//! Owns the backend, the game state, and the pending per-frame input. Each
//! frame: drain all pending events into the input, tick the simulation, clear
//! one-shot inputs, render, pace.

use glam::Vec2;

use crate::platform::{Backend, Event, Key, TimerId};
use crate::settings::Settings;
use crate::sim::{Facing, GameState, TickInput, tick};

/// The running game: loop state on top of the simulation
pub struct Game<B: Backend> {
    backend: B,
    state: GameState,
    input: TickInput,
    spawn_timer: TimerId,
    framerate: u32,
    running: bool,
}

impl<B: Backend> Game<B> {
    pub fn new(mut backend: B, settings: &Settings, seed: u64) -> Self {
        let spawn_timer = backend.register_timer(settings.spawn_interval_ms);
        let state = GameState::new(seed, settings.layout(), settings.on_collision);
        let input = TickInput {
            autopilot: settings.autopilot,
            ..Default::default()
        };
        Self {
            backend,
            state,
            input,
            spawn_timer,
            framerate: settings.framerate,
            running: true,
        }
    }

    /// Run until a quit event arrives
    pub fn run(&mut self) {
        while self.running {
            self.frame();
        }
        log::info!(
            "Run finished: {} frames, {} collision(s)",
            self.state.frames,
            self.state.collisions
        );
    }

    /// One loop iteration: drain events, tick, render, pace
    pub fn frame(&mut self) {
        for event in self.backend.poll_events() {
            self.handle_event(event);
        }

        tick(&mut self.state, &self.input);
        self.input.clear_one_shots();

        self.backend.render(&self.state);
        self.backend.pace(self.framerate);
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit => self.running = false,
            Event::KeyDown(Key::Space) => self.input.primary = true,
            Event::KeyDown(Key::Left) => self.input.run = Some(Facing::Left),
            Event::KeyDown(Key::Right) => self.input.run = Some(Facing::Right),
            Event::KeyUp(Key::Left) | Event::KeyUp(Key::Right) => self.input.halt = true,
            Event::KeyUp(Key::Space) => {}
            Event::PointerDown { x, y } => self.input.tap = Some(Vec2::new(x, y)),
            Event::Timer(id) if id == self.spawn_timer => self.input.spawn = true,
            Event::Timer(_) => {}
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
