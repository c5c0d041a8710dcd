//! Platform abstraction layer
//!
//! The presentation backend (window, draw surface, real keyboard) lives
//! outside this crate; what the game needs from it is narrow: a stream of
//! discrete input events and a place to present frames. The canonical key
//! layout is space = ascend, up/down = scroll speed, right/left = corridor
//! width, w/s = tilt, r = reset tuning.

pub mod clock;
pub mod headless;

use std::io;
use std::path::{Path, PathBuf};

use crate::renderer::Frame;
use crate::sim::TickInput;

pub use clock::TickClock;
pub use headless::HeadlessBackend;

/// Recognized game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Hold to climb, release to dive
    Ascend,
    SpeedUp,
    SpeedDown,
    WidenCorridor,
    NarrowCorridor,
    TiltUp,
    TiltDown,
    ResetTuning,
    Quit,
}

/// One discrete event from the input backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Quit,
}

/// Presentation backend seam: event polling in, frames out
pub trait Backend {
    /// Drain all events since the last poll
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Present a finished frame
    fn present(&mut self, frame: &Frame);
}

/// Folds discrete key events into per-tick input. The ascend key is level
/// state; everything else is a one-shot edge drained by `take`.
#[derive(Debug, Default)]
pub struct InputTracker {
    ascend_held: bool,
    pending: TickInput,
    quit: bool,
}

impl InputTracker {
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Ascend) => self.ascend_held = true,
            InputEvent::KeyUp(Key::Ascend) => self.ascend_held = false,
            InputEvent::KeyDown(Key::SpeedUp) => self.pending.speed_up = true,
            InputEvent::KeyDown(Key::SpeedDown) => self.pending.speed_down = true,
            InputEvent::KeyDown(Key::WidenCorridor) => self.pending.widen_corridor = true,
            InputEvent::KeyDown(Key::NarrowCorridor) => self.pending.narrow_corridor = true,
            InputEvent::KeyDown(Key::TiltUp) => self.pending.tilt_up = true,
            InputEvent::KeyDown(Key::TiltDown) => self.pending.tilt_down = true,
            InputEvent::KeyDown(Key::ResetTuning) => self.pending.reset_tuning = true,
            InputEvent::KeyDown(Key::Quit) | InputEvent::Quit => self.quit = true,
            InputEvent::KeyUp(_) => {}
        }
    }

    /// Input for the next tick; one-shot edges are cleared
    pub fn take(&mut self) -> TickInput {
        let mut input = std::mem::take(&mut self.pending);
        input.ascend_held = self.ascend_held;
        input
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// The fixed-rate game loop: poll events, advance one tick, render, present,
/// sleep to the tick boundary. Returns when the backend reports quit.
pub fn run_loop<B: Backend>(state: &mut crate::sim::GameState, backend: &mut B, hz: u32) {
    let mut tracker = InputTracker::default();
    let mut clock = TickClock::new(hz);

    loop {
        for event in backend.poll_events() {
            tracker.handle(event);
        }
        if tracker.quit_requested() {
            break;
        }

        let input = tracker.take();
        crate::sim::tick(state, &input);
        backend.present(&crate::renderer::render(state));
        clock.wait();
    }
}

/// The one sprite asset: a 30x30 image with transparency, loaded before the
/// loop starts. A missing or empty file is a fatal startup error; decoding
/// the pixel data is the presentation backend's concern.
#[derive(Debug, Clone)]
pub struct SpriteAsset {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl SpriteAsset {
    pub fn load(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        if bytes.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("sprite image {} is empty", path.display()),
            ));
        }
        log::info!("Loaded sprite {} ({} bytes)", path.display(), bytes.len());
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }
}
