//! Fixed-rate tick clock
//!
//! Sleeps to each tick boundary. If a frame overruns its budget, the next
//! ticks run back-to-back until the clock catches up; no tick is ever
//! skipped.

use std::thread;
use std::time::{Duration, Instant};

pub struct TickClock {
    period: Duration,
    next_tick: Instant,
}

impl TickClock {
    pub fn new(hz: u32) -> Self {
        let period = Duration::from_secs(1) / hz;
        Self {
            period,
            next_tick: Instant::now() + period,
        }
    }

    /// Block until the next tick boundary (or return immediately when late)
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next_tick {
            thread::sleep(self.next_tick - now);
        }
        self.next_tick += self.period;
    }
}
