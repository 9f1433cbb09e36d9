//! Countdown ticker.
//!
//! The ticker is a `crossbeam_channel::tick` receiver held in an `Option`.
//! Dropping the receiver cancels it, so `stop` and `start` can never leave a
//! second ticker alive.

use std::time::{Duration, Instant};

use crossbeam_channel::{never, tick, Receiver};

/// A cancellable once-per-interval ticker.
#[derive(Debug)]
pub struct Countdown {
    interval: Duration,
    ticker: Option<Receiver<Instant>>,
}

impl Countdown {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            ticker: None,
        }
    }

    /// Start ticking, replacing any running ticker.
    pub fn start(&mut self) {
        self.ticker = Some(tick(self.interval));
    }

    /// Cancel the running ticker, if any.
    pub fn stop(&mut self) {
        self.ticker = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Receiver to select on. Never fires while stopped.
    #[must_use]
    pub fn receiver(&self) -> Receiver<Instant> {
        self.ticker.clone().unwrap_or_else(never)
    }
}
