//! OGI Core - Learning-Strategy Models for the OGI vs Federated Comparison
//!
//! This library models two synthetic multi-agent learning strategies:
//! 1. **Independent development (OGI)**: air-gapped self-revision with an
//!    append-only ledger and deferred, snapshot-based synchronization
//! 2. **Continuous synchronization (Federated)**: upload and download of
//!    the global model on every cycle
//!
//! Everything here is synchronous arithmetic on in-memory state. Randomness
//! and time come in through `ogi_env`.

pub mod agent;
pub mod framework;
pub mod independent;
pub mod ledger;
pub mod metrics;
pub mod sync;
pub mod synchronized;

// Re-export key types for convenience
pub use agent::{mean_coherence, mean_drift, LearningAgent};
pub use framework::{Framework, FrameworkMap};
pub use independent::{CycleResult, Hypothesis, IndependentAgent};
pub use ledger::{Ledger, LedgerEntry, LedgerError};
pub use sync::{FrameworkSnapshot, FrameworkUpdate, SyncOutcome, Synchronizer};
pub use synchronized::{LocalUpdate, ServerResponse, SynchronizedAgent};
