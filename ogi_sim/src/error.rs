//! Error types for the simulation harness.

use ogi_core::LedgerError;
use thiserror::Error;

/// Errors that can occur while configuring, running or exporting a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A configuration value is out of range (zero agents, cycles, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    
    /// Scenario name did not match any known scenario
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
    
    /// An agent's ledger rejected an entry
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
    
    /// Writing results failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    /// Encoding results as JSON failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimError {
    /// Creates an invalid-configuration error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
