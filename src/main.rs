//! Wave Rider entry point
//!
//! Initializes logging, loads the sprite asset, and runs the fixed-rate
//! game loop over a presentation backend. The crate ships no window of its
//! own, so the binary drives a scripted headless demo; a windowed frontend
//! plugs in by implementing `platform::Backend` and calling `run_loop`.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use wave_rider::consts::TICK_HZ;
use wave_rider::platform::{HeadlessBackend, InputEvent, Key, SpriteAsset, run_loop};
use wave_rider::sim::GameState;
use wave_rider::tuning::TuningState;

const SPRITE_PATH: &str = "assets/wave.png";
const TUNING_PATH: &str = "wave_rider_tuning.json";
/// Demo length: five seconds of scripted flight
const DEMO_TICKS: usize = 300;

/// Scripted demo input: toggle the ascend key every half second
fn demo_script() -> Vec<Vec<InputEvent>> {
    (0..DEMO_TICKS)
        .map(|i| match i % 60 {
            0 => vec![InputEvent::KeyDown(Key::Ascend)],
            30 => vec![InputEvent::KeyUp(Key::Ascend)],
            _ => Vec::new(),
        })
        .collect()
}

fn main() {
    env_logger::init();

    let sprite_path = std::env::var("WAVE_RIDER_SPRITE").unwrap_or_else(|_| SPRITE_PATH.into());
    let sprite = SpriteAsset::load(Path::new(&sprite_path)).unwrap_or_else(|e| {
        log::error!("Fatal: cannot load sprite {}: {}", sprite_path, e);
        std::process::exit(1);
    });
    log::debug!("Sprite ready: {}", sprite.path.display());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let tuning = TuningState::load(Path::new(TUNING_PATH));
    let mut state = GameState::with_tuning(seed, tuning);
    log::info!("Wave Rider starting (seed {})", seed);

    let mut backend = HeadlessBackend::scripted(demo_script());
    run_loop(&mut state, &mut backend, TICK_HZ);

    state.tuning.save(Path::new(TUNING_PATH));
    log::info!(
        "Demo finished: {} ticks, {} frames, {} resets",
        state.time_ticks,
        backend.frames_presented,
        state.resets
    );
}
