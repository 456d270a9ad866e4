//! Continuously-synchronized (Federated) agent.
//!
//! Every cycle trains locally, uploads the update to the central server and
//! downloads the new global model. There is no deferral and no batching:
//! each cycle pays the full upload cost.

use ogi_env::{AgentId, Entropy};
use serde::{Deserialize, Serialize};

use crate::agent::LearningAgent;
use crate::metrics;

/// Range the simulated local loss is drawn from.
pub const LOCAL_LOSS_RANGE: (f64, f64) = (0.1, 0.5);

/// Range (inclusive) of samples trained per cycle.
pub const SAMPLES_RANGE: (u64, u64) = (100, 1000);

/// Mean upload volume per cycle (MB).
pub const UPLOAD_COST_MEAN_MB: f64 = 45.0;

/// Standard deviation of the upload volume (MB).
pub const UPLOAD_COST_STD_MB: f64 = 8.0;

/// Result of one local training step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalUpdate {
    /// Label of the new local weights, `weights_v<cycle>`
    pub model_updates: String,
    
    /// Simulated training loss
    pub local_loss: f64,
    
    /// Samples seen this cycle
    pub samples_trained: u64,
    
    /// Volume uploaded for this update (MB)
    pub communication_mb: f64,
}

/// What the server hands back after an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerResponse {
    /// Global model version after aggregation
    pub global_model_version: u64,
    
    /// Label of the aggregated weights, `global_v<cycle>`
    pub aggregated_weights: String,
    
    /// Volume transferred (MB)
    pub communication_mb: f64,
}

/// An agent that synchronizes with a central server every cycle.
#[derive(Debug, Clone)]
pub struct SynchronizedAgent {
    id: AgentId,
    scenario: String,
    cycle: u64,
    global_model_version: u64,
    total_communication_mb: f64,
}

impl SynchronizedAgent {
    /// Creates an agent at cycle 0 holding global model version 0.
    pub fn new(id: AgentId, scenario: &str) -> Self {
        Self {
            id,
            scenario: scenario.to_string(),
            cycle: 0,
            global_model_version: 0,
            total_communication_mb: 0.0,
        }
    }
    
    /// Runs one train → upload → download cycle.
    ///
    /// Draws, in order: local loss, samples trained, upload volume.
    pub fn advance(&mut self, entropy: &mut dyn Entropy) -> LocalUpdate {
        let mut update = self.local_training(entropy);
        let response = self.upload(entropy);
        update.communication_mb = response.communication_mb;
        self.download(&response);
        self.cycle += 1;
        update
    }
    
    fn local_training(&self, entropy: &mut dyn Entropy) -> LocalUpdate {
        LocalUpdate {
            model_updates: format!("weights_v{}", self.cycle),
            local_loss: entropy.uniform(LOCAL_LOSS_RANGE.0, LOCAL_LOSS_RANGE.1),
            samples_trained: entropy.uniform_int(SAMPLES_RANGE.0, SAMPLES_RANGE.1),
            communication_mb: 0.0,
        }
    }
    
    fn upload(&self, entropy: &mut dyn Entropy) -> ServerResponse {
        ServerResponse {
            global_model_version: self.global_model_version + 1,
            aggregated_weights: format!("global_v{}", self.cycle),
            communication_mb: entropy.gaussian(UPLOAD_COST_MEAN_MB, UPLOAD_COST_STD_MB),
        }
    }
    
    fn download(&mut self, response: &ServerResponse) {
        self.global_model_version = response.global_model_version;
        self.total_communication_mb += response.communication_mb;
    }
    
    /// Version of the global model currently held.
    pub fn global_model_version(&self) -> u64 {
        self.global_model_version
    }
    
    /// Total volume uploaded over the agent's life (MB).
    pub fn total_communication_mb(&self) -> f64 {
        self.total_communication_mb
    }
}

impl LearningAgent for SynchronizedAgent {
    fn id(&self) -> &AgentId {
        &self.id
    }
    
    fn scenario(&self) -> &str {
        &self.scenario
    }
    
    fn cycle(&self) -> u64 {
        self.cycle
    }
    
    fn coherence_index(&self, entropy: &mut dyn Entropy) -> f64 {
        metrics::synchronized_coherence(entropy)
    }
    
    fn drift(&self, entropy: &mut dyn Entropy) -> f64 {
        metrics::synchronized_drift(entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ogi_env::fakes::FixedEntropy;
    use ogi_env::SeededEntropy;
    
    fn agent() -> SynchronizedAgent {
        SynchronizedAgent::new(AgentId::indexed("fl", 0), "disaster_response")
    }
    
    #[test]
    fn test_every_cycle_bumps_version() {
        let mut a = agent();
        let mut entropy = SeededEntropy::new(42);
        
        for expected in 1..=20 {
            a.advance(&mut entropy);
            assert_eq!(a.global_model_version(), expected);
            assert_eq!(a.cycle(), expected);
        }
    }
    
    #[test]
    fn test_update_carries_upload_cost() {
        let mut a = agent();
        let mut entropy = FixedEntropy::new().with_z(1.0);
        
        let update = a.advance(&mut entropy);
        
        assert_eq!(update.model_updates, "weights_v0");
        assert_relative_eq!(update.communication_mb, 53.0);
        assert_relative_eq!(update.local_loss, 0.3, epsilon = 1e-12);
        assert_eq!(update.samples_trained, 550);
        assert_relative_eq!(a.total_communication_mb(), 53.0);
    }
    
    #[test]
    fn test_labels_follow_cycle() {
        let mut a = agent();
        let mut entropy = FixedEntropy::new();
        a.advance(&mut entropy);
        a.advance(&mut entropy);
        let third = a.advance(&mut entropy);
        assert_eq!(third.model_updates, "weights_v2");
    }
    
    #[test]
    fn test_cost_accumulates_every_cycle() {
        let mut a = agent();
        let mut entropy = FixedEntropy::new();
        for _ in 0..10 {
            a.advance(&mut entropy);
        }
        assert_relative_eq!(a.total_communication_mb(), 450.0, epsilon = 1e-9);
    }
    
    #[test]
    fn test_coherence_bounds_hold() {
        let a = agent();
        let mut entropy = SeededEntropy::new(99);
        for _ in 0..1_000 {
            let c = a.coherence_index(&mut entropy);
            assert!((0.40..=0.70).contains(&c));
        }
    }
}
