//! Fixed-interval obstacle spawn clock
//!
//! Runs on wall-clock milliseconds, independent of the frame rate.

/// Accumulates elapsed time and reports how many spawn intervals completed
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: u64,
    elapsed_ms: u64,
}

impl SpawnTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Advance the clock and return the number of fires.
    ///
    /// The remainder carries over, so the total number of fires over any
    /// split of T milliseconds is `T / interval`.
    pub fn advance(&mut self, delta_ms: u64) -> u64 {
        self.elapsed_ms += delta_ms;
        let fires = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        fires
    }

    /// Milliseconds until the next fire
    pub fn remaining_ms(&self) -> u64 {
        self.interval_ms - self.elapsed_ms
    }
}
