//! Independent-development (OGI) agent.
//!
//! Develops in isolation through self-revision cycles:
//! 1. Generate a hypothesis about one reasoning framework
//! 2. Test it against local experience
//! 3. Integrate it if validation passed
//! 4. Record the outcome in the append-only ledger
//!
//! Cross-agent exchange happens only through the periodic
//! [`Synchronizer`](crate::sync::Synchronizer), never inside a cycle.

use ogi_env::{AgentId, Clock, Entropy};
use serde::{Deserialize, Serialize};

use crate::agent::LearningAgent;
use crate::framework::{cap_strength, Framework, FrameworkMap, DEFAULT_STRENGTH};
use crate::ledger::{Ledger, LedgerEntry, LedgerError};
use crate::metrics;
use crate::sync::{FrameworkSnapshot, FrameworkUpdate};

/// Change type recorded for every hypothesis.
pub const CHANGE_TYPE: &str = "framework_revision";

/// Range hypothesis confidence is drawn from.
pub const CONFIDENCE_RANGE: (f64, f64) = (0.6, 0.9);

/// Range a hypothesis test's success rate is drawn from.
pub const SUCCESS_RANGE: (f64, f64) = (0.7, 0.95);

/// A test passes when its success rate is strictly above this.
pub const PASS_THRESHOLD: f64 = 0.75;

/// Range (inclusive) of insights gained per test.
pub const INSIGHT_RANGE: (u64, u64) = (3, 7);

/// Strength gained per unit success rate on a passing test.
pub const LEARNING_RATE: f64 = 0.02;

/// Proposed revision of a reasoning framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    /// Kind of change (always `framework_revision`)
    pub change_type: String,
    
    /// Framework the revision targets
    pub target: Framework,
    
    /// Label of the proposed change, `Revision_<cycle>`
    pub proposed_change: String,
    
    /// Confidence in the hypothesis, `[0.6, 0.9]`
    pub confidence: f64,
}

/// Outcome of testing a hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    /// The hypothesis that was tested
    pub hypothesis: Hypothesis,
    
    /// Simulated success rate, `[0.7, 0.95]`
    pub success_rate: f64,
    
    /// `success_rate > 0.75`
    pub validation_passed: bool,
    
    /// Insights gained, `[3, 7]`
    pub insights_gained: u64,
}

/// An agent developing through air-gapped self-revision.
#[derive(Debug, Clone)]
pub struct IndependentAgent {
    id: AgentId,
    scenario: String,
    cycle: u64,
    frameworks: FrameworkMap,
    ledger: Ledger,
}

impl IndependentAgent {
    /// Creates an agent at cycle 0 with no frameworks and an empty ledger.
    pub fn new(id: AgentId, scenario: &str) -> Self {
        Self {
            id,
            scenario: scenario.to_string(),
            cycle: 0,
            frameworks: FrameworkMap::new(),
            ledger: Ledger::new(),
        }
    }
    
    /// Runs one development cycle and returns its result.
    ///
    /// Draws, in order: target framework, confidence, success rate, insights.
    /// The ledger entry is written before any framework changes, so a failed
    /// append leaves the agent untouched.
    pub fn advance(
        &mut self,
        entropy: &mut dyn Entropy,
        clock: &dyn Clock,
    ) -> Result<CycleResult, LedgerError> {
        let hypothesis = self.generate_hypothesis(entropy);
        let result = Self::test_hypothesis(hypothesis, entropy);
        self.record(&result, clock)?;
        self.integrate(&result);
        self.cycle += 1;
        Ok(result)
    }
    
    fn generate_hypothesis(&self, entropy: &mut dyn Entropy) -> Hypothesis {
        let target = Framework::ALL[entropy.choose_index(Framework::ALL.len()) % Framework::ALL.len()];
        let confidence = entropy.uniform(CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1);
        Hypothesis {
            change_type: CHANGE_TYPE.to_string(),
            target,
            proposed_change: format!("Revision_{}", self.cycle),
            confidence,
        }
    }
    
    fn test_hypothesis(hypothesis: Hypothesis, entropy: &mut dyn Entropy) -> CycleResult {
        let success_rate = entropy.uniform(SUCCESS_RANGE.0, SUCCESS_RANGE.1);
        let insights_gained = entropy.uniform_int(INSIGHT_RANGE.0, INSIGHT_RANGE.1);
        CycleResult {
            hypothesis,
            success_rate,
            validation_passed: success_rate > PASS_THRESHOLD,
            insights_gained,
        }
    }
    
    fn integrate(&mut self, result: &CycleResult) {
        if !result.validation_passed {
            return;
        }
        let strength = self
            .frameworks
            .entry(result.hypothesis.target)
            .or_insert(DEFAULT_STRENGTH);
        *strength = cap_strength(*strength + LEARNING_RATE * result.success_rate);
    }
    
    fn record(&mut self, result: &CycleResult, clock: &dyn Clock) -> Result<(), LedgerError> {
        let entry = LedgerEntry::for_payload(
            self.cycle,
            clock.timestamp_ms(),
            &result.hypothesis.change_type,
            result.validation_passed,
            result,
        )?;
        self.ledger.append(entry)
    }
    
    /// Current framework strengths.
    pub fn frameworks(&self) -> &FrameworkMap {
        &self.frameworks
    }
    
    /// Strength of one framework, if it has been developed.
    pub fn strength(&self, framework: Framework) -> Option<f64> {
        self.frameworks.get(&framework).copied()
    }
    
    /// The development ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    
    /// Read-only copy of the framework strengths for synchronization.
    pub fn snapshot(&self) -> FrameworkSnapshot {
        FrameworkSnapshot {
            agent_id: self.id.clone(),
            frameworks: self.frameworks.clone(),
        }
    }
    
    /// Applies a synchronizer update addressed to this agent.
    ///
    /// Returns false (and changes nothing) if the update is for another agent.
    pub fn apply_update(&mut self, update: &FrameworkUpdate) -> bool {
        if update.agent_id != self.id {
            return false;
        }
        for (framework, value) in &update.frameworks {
            self.frameworks.insert(*framework, cap_strength(*value));
        }
        true
    }
}

impl LearningAgent for IndependentAgent {
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
        metrics::independent_coherence(self.cycle, entropy)
    }
    
    fn drift(&self, entropy: &mut dyn Entropy) -> f64 {
        metrics::independent_drift(self.cycle, entropy)
    }
}
