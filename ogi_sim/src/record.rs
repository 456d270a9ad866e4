//! Records produced by a simulation run.

use serde::{Deserialize, Serialize};

/// One row of output: both strategies' metrics for a (scenario, cycle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub scenario: String,
    pub cycle: u64,
    
    /// Mean coherence of the independent (OGI) agents
    pub coherence_independent: f64,
    
    /// Mean coherence of the synchronized (Federated) agents
    pub coherence_synchronized: f64,
    
    pub drift_independent: f64,
    pub drift_synchronized: f64,
    
    /// Deferred-sync volume this cycle (0 on non-sync cycles)
    pub comm_independent_mb: f64,
    
    /// Sum of every synchronized agent's upload this cycle
    pub comm_synchronized_mb: f64,
    
    pub agent_count_independent: usize,
    pub agent_count_synchronized: usize,
}

impl MetricRecord {
    /// Column names, in CSV order.
    pub const CSV_HEADER: &'static str = "scenario,cycle,coherence_independent,coherence_synchronized,\
drift_independent,drift_synchronized,comm_independent_mb,comm_synchronized_mb,\
agent_count_independent,agent_count_synchronized";

    /// Formats the record as one CSV row (no trailing newline).
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{}",
            self.scenario,
            self.cycle,
            self.coherence_independent,
            self.coherence_synchronized,
            self.drift_independent,
            self.drift_synchronized,
            self.comm_independent_mb,
            self.comm_synchronized_mb,
            self.agent_count_independent,
            self.agent_count_synchronized,
        )
    }
}

/// Event severity / source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLevel {
    Info,
    Sync,
    Supervisor,
}

/// A line of the simulation event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimEvent {
    pub scenario: String,
    pub cycle: u64,
    pub level: EventLevel,
    pub message: String,
}

impl SimEvent {
    pub fn new(scenario: &str, cycle: u64, level: EventLevel, message: impl Into<String>) -> Self {
        Self {
            scenario: scenario.to_string(),
            cycle,
            level,
            message: message.into(),
        }
    }
    
    /// Formats the event as `Cycle 05 [scenario] message`.
    pub fn log_line(&self) -> String {
        format!("Cycle {:02} [{}] {}", self.cycle, self.scenario, self.message)
    }
}
