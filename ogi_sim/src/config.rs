//! Simulation configuration.

use crate::error::SimError;
use crate::scenarios::ScenarioId;

use ogi_core::sync::DEFAULT_SYNC_PERIOD;
use ogi_env::{Clock, SystemClock};
use std::time::Duration;

use crate::context::SimClock;

/// Largest accepted cycle count per scenario.
pub const MAX_CYCLES_PER_SCENARIO: u64 = 1_000_000;

/// Largest accepted agent count per strategy.
pub const MAX_AGENTS_PER_VARIANT: usize = 10_000;

/// Which clock stamps ledger entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockMode {
    /// Virtual time starting at 2024-01-01, one `cycle_duration` per cycle
    #[default]
    Virtual,
    
    /// Operating-system wall clock
    Wall,
}

impl ClockMode {
    /// Builds a fresh clock for one scenario run.
    pub fn build(&self) -> Box<dyn Clock> {
        match self {
            ClockMode::Virtual => Box::new(SimClock::new()),
            ClockMode::Wall => Box::new(SystemClock::new()),
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Master seed for determinism
    pub seed: u64,
    
    /// Agents instantiated per strategy
    pub agents_per_variant: usize,
    
    /// Cycles run per scenario
    pub cycles_per_scenario: u64,
    
    /// Cycles between deferred synchronization events
    pub sync_period: u64,
    
    /// Scenarios to run, in order
    pub scenarios: Vec<ScenarioId>,
    
    /// Virtual time that passes per cycle
    pub cycle_duration: Duration,
    
    /// Clock used for ledger timestamps
    pub clock: ClockMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            agents_per_variant: 5,
            cycles_per_scenario: 20,
            sync_period: DEFAULT_SYNC_PERIOD,
            scenarios: ScenarioId::all(),
            cycle_duration: Duration::from_secs(3600),
            clock: ClockMode::Virtual,
        }
    }
}

impl SimConfig {
    /// Sets the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
    
    /// Sets the number of agents per strategy.
    pub fn with_agents(mut self, agents: usize) -> Self {
        self.agents_per_variant = agents;
        self
    }
    
    /// Sets the number of cycles per scenario.
    pub fn with_cycles(mut self, cycles: u64) -> Self {
        self.cycles_per_scenario = cycles;
        self
    }
    
    /// Sets the synchronization period.
    pub fn with_sync_period(mut self, period: u64) -> Self {
        self.sync_period = period;
        self
    }
    
    /// Replaces the scenario list.
    pub fn with_scenarios(mut self, scenarios: Vec<ScenarioId>) -> Self {
        self.scenarios = scenarios;
        self
    }
    
    /// Sets the ledger clock.
    pub fn with_clock(mut self, clock: ClockMode) -> Self {
        self.clock = clock;
        self
    }
    
    /// Rejects configurations the runner cannot execute.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.agents_per_variant < 1 {
            return Err(SimError::invalid("agent count must be at least 1"));
        }
        if self.agents_per_variant > MAX_AGENTS_PER_VARIANT {
            return Err(SimError::invalid(format!(
                "agent count {} exceeds {}",
                self.agents_per_variant, MAX_AGENTS_PER_VARIANT
            )));
        }
        if self.cycles_per_scenario < 1 {
            return Err(SimError::invalid("cycle count must be at least 1"));
        }
        if self.cycles_per_scenario > MAX_CYCLES_PER_SCENARIO {
            return Err(SimError::invalid(format!(
                "cycle count {} exceeds {}",
                self.cycles_per_scenario, MAX_CYCLES_PER_SCENARIO
            )));
        }
        if self.sync_period < 1 {
            return Err(SimError::invalid("synchronization period must be at least 1"));
        }
        if self.scenarios.is_empty() {
            return Err(SimError::invalid("at least one scenario is required"));
        }
        Ok(())
    }
}
