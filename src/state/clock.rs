//! Fixed-rate tick clock for the held-key commands.
//!
//! egui repaints whenever input arrives, so frames are not evenly spaced.
//! The clock turns frame timestamps into whole ticks at the configured rate
//! and carries the remainder over to the next frame.

use std::time::Duration;

/// Upper bound on ticks replayed after a stall (e.g. a dragged window).
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Slack for float noise in frame timestamps, in seconds.
const TICK_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulator: f64,
    last_time: Option<f64>,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Length of one tick.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advances the clock to `now` (seconds) and returns the ticks elapsed.
    ///
    /// The first frame always counts as one tick.
    pub fn advance(&mut self, now: f64) -> u32 {
        let step = self.interval.as_secs_f64();
        let dt = match self.last_time {
            Some(last) => (now - last).max(0.0),
            None => step,
        };
        self.last_time = Some(now);
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator + TICK_TOLERANCE >= step && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= step;
            ticks += 1;
        }

        if ticks == MAX_TICKS_PER_FRAME {
            // Drop the backlog instead of catching up over later frames
            self.accumulator = 0.0;
        }

        ticks
    }
}
