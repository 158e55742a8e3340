//! Wall-clock pacing of the fixed-rate game loop.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tui_starfield_engine::TickPacer;
//!
//! let start = Instant::now();
//! let mut pacer = TickPacer::new(Duration::from_millis(100), start);
//! let wait = pacer.finish_tick(start + Duration::from_millis(40));
//! assert_eq!(wait, Duration::from_millis(60));
//! ```

use std::time::{Duration, Instant};

/// Fixed-rate tick pacing for the game loop.
///
/// The caller passes in the current time, so the pacer itself never reads
/// the clock.
#[derive(Debug, Clone)]
pub struct TickPacer {
    tick: Duration,
    deadline: Instant,
    overruns: u64,
}

impl TickPacer {
    pub fn new(tick: Duration, now: Instant) -> Self {
        Self {
            tick,
            deadline: now + tick,
            overruns: 0,
        }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Close the current tick and return how long to sleep before the next.
    ///
    /// - On time: sleep until the deadline, the next deadline is one tick later.
    /// - Overrun: no sleep, and the next deadline is re-anchored to `now` so a
    ///   slow tick never causes a burst of catch-up ticks.
    pub fn finish_tick(&mut self, now: Instant) -> Duration {
        if now >= self.deadline {
            self.overruns += 1;
            self.deadline = now + self.tick;
            return Duration::ZERO;
        }
        let wait = self.deadline - now;
        self.deadline += self.tick;
        wait
    }

    /// Ticks that finished after their deadline.
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}
