//! Virtual clock for deterministic ledger timestamps.

use ogi_env::Clock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Simulation clock that only moves when the runner advances it.
///
/// Virtual time 0 maps to 2024-01-01 00:00:00 UTC, so ledger timestamps
/// are identical across runs with the same configuration.
pub struct SimClock {
    /// Current virtual time (nanoseconds since simulation start)
    virtual_time_ns: Arc<AtomicU64>,
    
    /// Epoch offset (virtual time 0 maps to this wall-clock time)
    epoch: SystemTime,
}

impl SimClock {
    /// Creates a clock at virtual time 0.
    pub fn new() -> Self {
        Self {
            virtual_time_ns: Arc::new(AtomicU64::new(0)),
            epoch: UNIX_EPOCH + Duration::from_secs(1704067200), // 2024-01-01 00:00:00 UTC
        }
    }
    
    /// Sets the virtual time to a specific value.
    pub fn set_time(&self, time_ns: u64) {
        self.virtual_time_ns.store(time_ns, Ordering::SeqCst);
    }
    
    /// Returns the current virtual time in nanoseconds.
    pub fn time_ns(&self) -> u64 {
        self.virtual_time_ns.load(Ordering::SeqCst)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SimClock {
    fn clone(&self) -> Self {
        Self {
            virtual_time_ns: Arc::clone(&self.virtual_time_ns),
            epoch: self.epoch,
        }
    }
}

impl Clock for SimClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.time_ns())
    }
    
    fn system_time(&self) -> SystemTime {
        self.epoch + self.now()
    }
    
    fn advance(&self, by: Duration) {
        self.virtual_time_ns.fetch_add(by.as_nanos() as u64, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_sim_clock_time() {
        let clock = SimClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(1));
        
        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.now(), Duration::from_millis(1500));
    }
    
    #[test]
    fn test_sim_clock_epoch() {
        let clock = SimClock::new();
        assert_eq!(clock.timestamp_ms(), 1_704_067_200_000);
        
        clock.set_time(Duration::from_secs(3600).as_nanos() as u64);
        assert_eq!(clock.timestamp_ms(), 1_704_067_200_000 + 3_600_000);
    }
    
    #[test]
    fn test_sim_clock_clone_shares_time() {
        let clock1 = SimClock::new();
        let clock2 = clock1.clone();
        
        clock1.advance(Duration::from_secs(5));
        
        // Both should see the same time
        assert_eq!(clock1.now(), clock2.now());
    }
}
