//! Headless backend
//!
//! Feeds a scripted event stream and captures presented frames. Used by the
//! integration tests and by the native demo loop (this crate ships no window
//! of its own; a real presentation backend implements `Backend` the same
//! way).

use std::collections::VecDeque;

use super::{Backend, InputEvent};
use crate::renderer::Frame;

#[derive(Debug, Default)]
pub struct HeadlessBackend {
    script: VecDeque<Vec<InputEvent>>,
    pub frames_presented: usize,
    pub last_frame: Option<Frame>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that replays one batch of events per poll, then quits
    pub fn scripted(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            script: batches.into(),
            ..Self::default()
        }
    }

    /// Queue another batch of events for a future poll
    pub fn push_events(&mut self, batch: Vec<InputEvent>) {
        self.script.push_back(batch);
    }
}

impl Backend for HeadlessBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        match self.script.pop_front() {
            Some(batch) => batch,
            // Script exhausted: ask the loop to stop
            None => vec![InputEvent::Quit],
        }
    }

    fn present(&mut self, frame: &Frame) {
        self.frames_presented += 1;
        self.last_frame = Some(frame.clone());
    }
}
