//! Learning Agent - the behaviour both strategies share.
//!
//! The runner drives two very different agents through the same cycle loop
//! and only needs a handful of things from each: who it is, how far it has
//! developed, and its current metrics.
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │      IndependentAgent        │   │      SynchronizedAgent       │
//! │  hypothesis → test → ledger  │   │  local → upload → download   │
//! │  (air-gapped, deferred sync) │   │  (every cycle, full upload)  │
//! └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                └──────────── LearningAgent ───────┘
//!                     id / cycle / coherence / drift
//! ```

use ogi_env::{AgentId, Entropy};

use crate::metrics::mean;

/// Common surface of both agent variants.
pub trait LearningAgent {
    /// Agent identifier.
    fn id(&self) -> &AgentId;
    
    /// Scenario this agent was created for.
    fn scenario(&self) -> &str;
    
    /// Number of cycles completed so far.
    fn cycle(&self) -> u64;
    
    /// Current coherence index (draws noise from `entropy`).
    fn coherence_index(&self, entropy: &mut dyn Entropy) -> f64;
    
    /// Current drift (draws noise from `entropy`).
    fn drift(&self, entropy: &mut dyn Entropy) -> f64;
}

/// Mean coherence across `agents`, sampled in slice order.
pub fn mean_coherence<A: LearningAgent>(agents: &[A], entropy: &mut dyn Entropy) -> f64 {
    mean(agents.iter().map(|a| a.coherence_index(entropy)))
}

/// Mean drift across `agents`, sampled in slice order.
pub fn mean_drift<A: LearningAgent>(agents: &[A], entropy: &mut dyn Entropy) -> f64 {
    mean(agents.iter().map(|a| a.drift(entropy)))
}
