//! Wall-clock implementation of [`Clock`].

use crate::Clock;
use std::time::{Duration, Instant, SystemTime};

/// Clock backed by the operating system.
///
/// Ledger timestamps record when a cycle actually ran, so repeated runs
/// differ only in their timestamps.
pub struct SystemClock {
    /// Start time for monotonic duration calculations
    start: Instant,
}

impl SystemClock {
    /// Creates a new SystemClock.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
    
    fn system_time(&self) -> SystemTime {
        SystemTime::now()
    }
    
    fn advance(&self, _by: Duration) {}
}
