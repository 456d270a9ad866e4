//! Deferred synchronization between independent agents.
//!
//! Every `period` cycles the independent agents exchange compressed
//! insights. The exchange works on snapshots:
//!
//! ```text
//! agents ──snapshot()──► [FrameworkSnapshot] ──synchronize()──► SyncOutcome
//!    ▲                                                             │
//!    └──────────────────── apply_update() ◄── updates ─────────────┘
//! ```
//!
//! All nudges of one event are computed against the pre-sync snapshot, and
//! snapshots are put into agent-id order before accumulating. Reordering the
//! input therefore cannot change the result, not even in the last bit.

use ogi_env::{AgentId, Entropy};
use serde::{Deserialize, Serialize};

use crate::framework::{cap_strength, FrameworkMap};

/// Cycles between synchronization events.
pub const DEFAULT_SYNC_PERIOD: u64 = 5;

/// Fraction of a peer's difference applied per nudge.
pub const NUDGE_RATE: f64 = 0.02;

/// Mean insight-transfer volume per event (MB).
pub const INSIGHT_COST_MEAN_MB: f64 = 15.0;

/// Standard deviation of the insight-transfer volume (MB).
pub const INSIGHT_COST_STD_MB: f64 = 3.0;

/// Read-only copy of one agent's frameworks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkSnapshot {
    pub agent_id: AgentId,
    pub frameworks: FrameworkMap,
}

/// Post-sync framework values for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkUpdate {
    pub agent_id: AgentId,
    pub frameworks: FrameworkMap,
}

/// Result of one synchronization event.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    /// Volume of the insight transfer (MB)
    pub comm_mb: f64,
    
    /// Updates in agent-id order; agents sharing no framework get none
    pub updates: Vec<FrameworkUpdate>,
}

/// Schedules and computes synchronization events.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    period: u64,
    nudge_rate: f64,
}

impl Synchronizer {
    /// Creates a synchronizer firing every `period` cycles.
    pub fn new(period: u64) -> Self {
        Self {
            period,
            nudge_rate: NUDGE_RATE,
        }
    }
    
    pub fn period(&self) -> u64 {
        self.period
    }
    
    /// True on cycles 0, period, 2*period, ...
    pub fn is_due(&self, cycle: u64) -> bool {
        self.period > 0 && cycle % self.period == 0
    }
    
    /// Computes one synchronization event.
    ///
    /// The transfer volume is drawn first and does not depend on how many
    /// agents or frameworks take part. Then for every ordered pair (A, B)
    /// with A ≠ B and every framework both hold, A accumulates
    /// `0.02 * (B - A)` from the snapshot values; the sum is capped at 0.95.
    pub fn synchronize(&self, snapshots: &[FrameworkSnapshot], entropy: &mut dyn Entropy) -> SyncOutcome {
        let comm_mb = entropy.gaussian(INSIGHT_COST_MEAN_MB, INSIGHT_COST_STD_MB);
        SyncOutcome {
            comm_mb,
            updates: self.plan_updates(snapshots),
        }
    }
    
    fn plan_updates(&self, snapshots: &[FrameworkSnapshot]) -> Vec<FrameworkUpdate> {
        let mut ordered: Vec<&FrameworkSnapshot> = snapshots.iter().collect();
        ordered.sort_by(|a, b| a.agent_id.cmp(&b.agent_id));
        
        let mut updates = Vec::new();
        for (i, own) in ordered.iter().enumerate() {
            let mut next = FrameworkMap::new();
            
            for (framework, own_value) in &own.frameworks {
                let mut delta = 0.0;
                let mut shared = false;
                for (j, peer) in ordered.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    if let Some(peer_value) = peer.frameworks.get(framework) {
                        delta += self.nudge_rate * (peer_value - own_value);
                        shared = true;
                    }
                }
                if shared {
                    next.insert(*framework, cap_strength(own_value + delta));
                }
            }
            
            if !next.is_empty() {
                updates.push(FrameworkUpdate {
                    agent_id: own.agent_id.clone(),
                    frameworks: next,
                });
            }
        }
        updates
    }
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new(DEFAULT_SYNC_PERIOD)
    }
}
