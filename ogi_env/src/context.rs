//! Core environment traits for OGI agents.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// The random source every agent, metric and synchronizer draws from.
///
/// # Implementations
///
/// - **Simulation**: `SeededEntropy` - ChaCha8 stream derived from a 64-bit seed
/// - **Tests**: scripted fakes returning fixed values
///
/// # Determinism
///
/// Callers draw in a fixed order per operation, so two sources with the
/// same seed produce identical simulations.
pub trait Entropy {
    /// Uniform float in `[low, high]`.
    ///
    /// Returns `low` when the range is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
    
    /// Uniform integer in `[low, high]` (both inclusive).
    fn uniform_int(&mut self, low: u64, high: u64) -> u64;
    
    /// Gaussian sample with the given mean and standard deviation.
    ///
    /// Never fails: an invalid deviation yields the mean.
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64;
    
    /// Uniform index into a collection of `len` items (0 when empty).
    fn choose_index(&mut self, len: usize) -> usize;
    
    /// Returns the seed behind this source (0 if unseeded).
    fn seed(&self) -> u64;
}

/// Source of timestamps for ledger entries.
///
/// - **Simulation**: `SimClock` (in `ogi_sim`) - virtual time advanced per cycle
/// - **Production**: `SystemClock` - wall clock
pub trait Clock {
    /// Monotonic time since the clock was created.
    fn now(&self) -> Duration;
    
    /// Wall-clock time used for record timestamps.
    fn system_time(&self) -> SystemTime;
    
    /// Moves the clock forward by one simulated step.
    ///
    /// Virtual clocks advance; the wall clock ignores this.
    fn advance(&self, by: Duration);
    
    /// Milliseconds since the Unix epoch.
    fn timestamp_ms(&self) -> u64 {
        self.system_time()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
