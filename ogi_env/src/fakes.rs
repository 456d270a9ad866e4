//! Scripted fakes for the environment traits (testing only)
//!
//! Provides `FixedEntropy` and `FixedClock`, which return predictable
//! values so tests can force hypothesis outcomes or noise extremes.

use std::cell::Cell;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{Clock, Entropy};

// ---------------------------------------------------------------------------
// FixedEntropy
// ---------------------------------------------------------------------------

/// Entropy that always lands at the same relative point of each range.
///
/// - `uniform(low, high)` returns `low + (high - low) * position`
/// - `uniform_int(low, high)` rounds the same interpolation
/// - `gaussian(mean, std)` returns `mean + z * std`
/// - `choose_index(len)` returns `index % len`
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    position: f64,
    z: f64,
    index: usize,
    draws: u64,
}

impl FixedEntropy {
    /// Midpoint of every range, zero noise, first index.
    pub fn new() -> Self {
        Self {
            position: 0.5,
            z: 0.0,
            index: 0,
            draws: 0,
        }
    }
    
    /// Every uniform draw returns the top of its range.
    pub fn at_high() -> Self {
        Self::new().with_position(1.0)
    }
    
    /// Every uniform draw returns the bottom of its range.
    pub fn at_low() -> Self {
        Self::new().with_position(0.0)
    }
    
    /// Sets the relative position (clamped to `[0, 1]`) used for uniform draws.
    pub fn with_position(mut self, position: f64) -> Self {
        self.position = position.clamp(0.0, 1.0);
        self
    }
    
    /// Sets the z-score returned by every gaussian draw.
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }
    
    /// Sets the index returned by `choose_index`.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }
    
    /// Number of draws served so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Default for FixedEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for FixedEntropy {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.draws += 1;
        if !(high > low) {
            return low;
        }
        low + (high - low) * self.position
    }
    
    fn uniform_int(&mut self, low: u64, high: u64) -> u64 {
        self.draws += 1;
        if high <= low {
            return low;
        }
        low + ((high - low) as f64 * self.position).round() as u64
    }
    
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        self.draws += 1;
        if !(std_dev >= 0.0) || !std_dev.is_finite() {
            return mean;
        }
        mean + self.z * std_dev
    }
    
    fn choose_index(&mut self, len: usize) -> usize {
        self.draws += 1;
        if len == 0 {
            return 0;
        }
        self.index % len
    }
    
    fn seed(&self) -> u64 {
        0
    }
}

// ---------------------------------------------------------------------------
// FixedClock
// ---------------------------------------------------------------------------

/// Clock frozen at a given Unix time; `advance` moves it forward.
#[derive(Debug)]
pub struct FixedClock {
    elapsed_ms: Cell<u64>,
    start_ms: u64,
}

impl FixedClock {
    /// Creates a clock reading `start_ms` milliseconds since the Unix epoch.
    pub fn at(start_ms: u64) -> Self {
        Self {
            elapsed_ms: Cell::new(0),
            start_ms,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.get())
    }
    
    fn system_time(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.start_ms + self.elapsed_ms.get())
    }
    
    fn advance(&self, by: Duration) {
        self.elapsed_ms.set(self.elapsed_ms.get() + by.as_millis() as u64);
    }
}
