//! Ofrenda entry point
//!
//! Runs the game loop against the headless backend: the demo plays itself
//! (autopilot) for a configured number of frames and logs a summary. A real
//! windowing backend plugs in through the same `Backend` trait.

use std::time::{SystemTime, UNIX_EPOCH};

use ofrenda::platform::{Event, HeadlessBackend, Key};
use ofrenda::{Game, Settings};

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Ofrenda starting (seed {seed})");

    let mut backend =
        HeadlessBackend::new(settings.framerate).with_frame_limit(settings.demo_frames);
    // Leave the title screen right away
    backend.script(1, Event::KeyDown(Key::Space));
    backend.script(2, Event::KeyUp(Key::Space));

    let mut game = Game::new(backend, &settings, seed);
    game.run();
}
