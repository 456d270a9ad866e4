//! Scenario runner - executes the OGI vs Federated comparison.
//!
//! Each scenario instantiates `agents_per_variant` agents of both strategies
//! and runs them in lockstep. One cycle:
//!
//! 1. Advance every independent agent (hypothesis, test, ledger entry)
//! 2. Advance every synchronized agent, summing upload volume
//! 3. On sync cycles, snapshot the independent agents, synchronize and apply
//! 4. Sample coherence then drift for both strategies
//! 5. Emit one [`MetricRecord`] and the cycle's events
//!
//! Every scenario draws from its own entropy stream derived from the master
//! seed, so a scenario's records do not depend on which others ran before it.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::record::{EventLevel, MetricRecord, SimEvent};
use crate::scenarios::ScenarioId;

use ogi_core::{
    mean_coherence, mean_drift, FrameworkUpdate, IndependentAgent, LearningAgent, SynchronizedAgent,
    Synchronizer,
};
use ogi_env::{derive_stream_seed, AgentId, Entropy, SeededEntropy};
use tracing::{debug, info};

/// Results from running a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    /// Scenario that was run
    pub scenario: ScenarioId,
    
    /// Seed of the scenario's entropy stream
    pub seed: u64,
    
    /// One record per cycle, in cycle order
    pub records: Vec<MetricRecord>,
    
    /// Event log, in emission order
    pub events: Vec<SimEvent>,
    
    /// Number of deferred sync events
    pub sync_events: usize,
    
    /// Ledger entries across all independent agents
    pub ledger_entries: usize,
}

/// Results of every configured scenario, in run order.
#[derive(Debug, Clone, Default)]
pub struct SimulationOutput {
    pub results: Vec<ScenarioResult>,
}

impl SimulationOutput {
    /// All metric records, scenario by scenario.
    pub fn records(&self) -> Vec<MetricRecord> {
        self.results.iter().flat_map(|r| r.records.iter().cloned()).collect()
    }
    
    /// All events, scenario by scenario.
    pub fn events(&self) -> Vec<SimEvent> {
        self.results.iter().flat_map(|r| r.events.iter().cloned()).collect()
    }
}

/// Runs comparison scenarios.
pub struct ScenarioRunner {
    config: SimConfig,
}

impl ScenarioRunner {
    /// Creates a runner after validating the configuration.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { config })
    }
    
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
    
    /// Seed of the entropy stream a scenario draws from.
    pub fn scenario_seed(&self, scenario: ScenarioId) -> u64 {
        derive_stream_seed(self.config.seed, scenario.stream())
    }
    
    /// Runs every configured scenario in order.
    pub fn run_all(&self) -> Result<SimulationOutput, SimError> {
        let mut output = SimulationOutput::default();
        for scenario in &self.config.scenarios {
            output.results.push(self.run(*scenario)?);
        }
        Ok(output)
    }
    
    /// Runs one scenario on its seeded entropy stream.
    pub fn run(&self, scenario: ScenarioId) -> Result<ScenarioResult, SimError> {
        let mut entropy = SeededEntropy::new(self.scenario_seed(scenario));
        self.run_with_entropy(scenario, &mut entropy)
    }
    
    /// Runs one scenario drawing from the given entropy source.
    pub fn run_with_entropy(
        &self,
        scenario: ScenarioId,
        entropy: &mut dyn Entropy,
    ) -> Result<ScenarioResult, SimError> {
        let name = scenario.name();
        let agents = self.config.agents_per_variant;
        let clock = self.config.clock.build();
        let synchronizer = Synchronizer::new(self.config.sync_period);
        
        info!(
            "Starting scenario: {} (seed={}, sync every {} cycles)",
            scenario.title(),
            entropy.seed(),
            synchronizer.period()
        );
        debug!("{}", scenario.description());
        
        let mut independent: Vec<IndependentAgent> = (0..agents)
            .map(|i| IndependentAgent::new(AgentId::indexed("ogi", i), name))
            .collect();
        let mut synchronized: Vec<SynchronizedAgent> = (0..agents)
            .map(|i| SynchronizedAgent::new(AgentId::indexed("fl", i), name))
            .collect();
        
        let mut records = Vec::new();
        let mut events = Vec::new();
        let mut sync_events = 0;
        
        for cycle in 0..self.config.cycles_per_scenario {
            let mut validated = 0;
            for agent in independent.iter_mut() {
                if agent.advance(entropy, clock.as_ref())?.validation_passed {
                    validated += 1;
                }
            }
            
            let comm_synchronized_mb: f64 = synchronized
                .iter_mut()
                .map(|agent| agent.advance(entropy).communication_mb)
                .sum();
            
            let comm_independent_mb = if synchronizer.is_due(cycle) {
                let (comm_mb, applied) = deferred_sync(&synchronizer, &mut independent, entropy);
                sync_events += 1;
                events.push(SimEvent::new(
                    name,
                    cycle,
                    EventLevel::Sync,
                    format!(
                        "Deferred sync: {:.1} MB of compressed insight, {} agents updated",
                        comm_mb, applied
                    ),
                ));
                comm_mb
            } else {
                0.0
            };
            
            let record = MetricRecord {
                scenario: name.to_string(),
                cycle,
                coherence_independent: mean_coherence(&independent, entropy),
                coherence_synchronized: mean_coherence(&synchronized, entropy),
                drift_independent: mean_drift(&independent, entropy),
                drift_synchronized: mean_drift(&synchronized, entropy),
                comm_independent_mb,
                comm_synchronized_mb,
                agent_count_independent: independent.len(),
                agent_count_synchronized: synchronized.len(),
            };
            
            events.push(SimEvent::new(
                name,
                cycle,
                EventLevel::Info,
                format!(
                    "Federated: uploaded {:.1} MB of weights across {} agents",
                    comm_synchronized_mb,
                    synchronized.len()
                ),
            ));
            events.push(SimEvent::new(
                name,
                cycle,
                EventLevel::Info,
                format!(
                    "OGI: self-revision complete, {}/{} hypotheses validated",
                    validated,
                    independent.len()
                ),
            ));
            if synchronizer.is_due(cycle) {
                events.push(SimEvent::new(
                    name,
                    cycle,
                    EventLevel::Supervisor,
                    format!(
                        "Supervisor: OGI coherence {:+.1}% vs Federated",
                        coherence_gap_pct(&record)
                    ),
                ));
            }
            
            debug!(
                "[{}] cycle {}: coherence {:.3}/{:.3}, drift {:.3}/{:.3}, comm {:.1}/{:.1} MB",
                name,
                cycle,
                record.coherence_independent,
                record.coherence_synchronized,
                record.drift_independent,
                record.drift_synchronized,
                record.comm_independent_mb,
                record.comm_synchronized_mb,
            );
            
            records.push(record);
            clock.advance(self.config.cycle_duration);
        }
        
        let ledger_entries = independent.iter().map(|a| a.ledger().len()).sum();
        info!(
            "Scenario {} complete: {} cycles, {} sync events, {} ledger entries",
            name,
            records.len(),
            sync_events,
            ledger_entries
        );
        
        Ok(ScenarioResult {
            scenario,
            seed: entropy.seed(),
            records,
            events,
            sync_events,
            ledger_entries,
        })
    }
}

/// Snapshots the agents, synchronizes them and applies the updates.
///
/// Returns the transfer volume and the number of agents updated.
fn deferred_sync(
    synchronizer: &Synchronizer,
    agents: &mut [IndependentAgent],
    entropy: &mut dyn Entropy,
) -> (f64, usize) {
    let snapshots: Vec<_> = agents.iter().map(|a| a.snapshot()).collect();
    let outcome = synchronizer.synchronize(&snapshots, entropy);
    (outcome.comm_mb, apply_updates(agents, &outcome.updates))
}

/// Applies updates to their addressees; returns how many agents changed.
fn apply_updates(agents: &mut [IndependentAgent], updates: &[FrameworkUpdate]) -> usize {
    let mut applied = 0;
    for update in updates {
        if let Some(agent) = agents.iter_mut().find(|a| a.id() == &update.agent_id) {
            if agent.apply_update(update) {
                applied += 1;
            }
        }
    }
    applied
}

fn coherence_gap_pct(record: &MetricRecord) -> f64 {
    if record.coherence_synchronized == 0.0 {
        return 0.0;
    }
    (record.coherence_independent - record.coherence_synchronized) / record.coherence_synchronized * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockMode;
    use approx::assert_relative_eq;
    use ogi_core::{metrics, Framework, FrameworkMap};
    use ogi_env::fakes::FixedEntropy;
    use proptest::prelude::*;
    
    #[test]
    fn test_default_run_shape() {
        let runner = ScenarioRunner::new(SimConfig::default()).unwrap();
        let result = runner.run(ScenarioId::MedicalDiagnosis).unwrap();
        
        assert_eq!(result.records.len(), 20);
        assert_eq!(result.sync_events, 4);
        assert_eq!(result.ledger_entries, 100);
        
        for (i, record) in result.records.iter().enumerate() {
            assert_eq!(record.cycle, i as u64);
            assert_eq!(record.scenario, "medical_diagnosis");
            assert_eq!(record.agent_count_independent, 5);
            assert_eq!(record.agent_count_synchronized, 5);
            assert!(record.comm_synchronized_mb > 0.0);
            
            let due = i % 5 == 0;
            assert_eq!(record.comm_independent_mb != 0.0, due, "cycle {}", i);
        }
    }
    
    #[test]
    fn test_same_seed_same_records() {
        let a = ScenarioRunner::new(SimConfig::default().with_seed(7)).unwrap().run_all().unwrap();
        let b = ScenarioRunner::new(SimConfig::default().with_seed(7)).unwrap().run_all().unwrap();
        assert_eq!(a.records(), b.records());
        assert_eq!(a.events(), b.events());
        
        let c = ScenarioRunner::new(SimConfig::default().with_seed(8)).unwrap().run_all().unwrap();
        assert_ne!(a.records(), c.records());
    }
    
    #[test]
    fn test_scenarios_isolated_from_run_order() {
        let forward = SimConfig::default()
            .with_scenarios(vec![ScenarioId::MedicalDiagnosis, ScenarioId::AutonomousLabs]);
        let reverse = SimConfig::default()
            .with_scenarios(vec![ScenarioId::AutonomousLabs, ScenarioId::MedicalDiagnosis]);
        
        let a = ScenarioRunner::new(forward).unwrap().run_all().unwrap();
        let b = ScenarioRunner::new(reverse).unwrap().run_all().unwrap();
        
        assert_eq!(a.results[0].records, b.results[1].records);
        assert_eq!(a.results[1].records, b.results[0].records);
    }
    
    #[test]
    fn test_wall_clock_does_not_change_records() {
        let virtual_run = ScenarioRunner::new(SimConfig::default()).unwrap();
        let wall_run = ScenarioRunner::new(SimConfig::default().with_clock(ClockMode::Wall)).unwrap();
        
        let a = virtual_run.run(ScenarioId::DisasterResponse).unwrap();
        let b = wall_run.run(ScenarioId::DisasterResponse).unwrap();
        assert_eq!(a.records, b.records);
    }
    
    fn agent_holding(index: usize, value: f64) -> IndependentAgent {
        let mut agent = IndependentAgent::new(AgentId::indexed("ogi", index), "autonomous_labs");
        let mut frameworks = FrameworkMap::new();
        frameworks.insert(Framework::CausalInference, value);
        let update = FrameworkUpdate {
            agent_id: agent.id().clone(),
            frameworks,
        };
        assert!(agent.apply_update(&update));
        agent
    }
    
    #[test]
    fn test_deferred_sync_moves_agents_together() {
        let mut agents = vec![agent_holding(0, 0.5), agent_holding(1, 0.9), agent_holding(2, 0.7)];
        let synchronizer = Synchronizer::new(5);
        
        let (comm_mb, applied) = deferred_sync(&synchronizer, &mut agents, &mut FixedEntropy::new());
        
        assert_relative_eq!(comm_mb, 15.0, epsilon = 1e-12);
        assert_eq!(applied, 3);
        // 0.5 + 0.02 * (0.9 - 0.5) + 0.02 * (0.7 - 0.5)
        assert_relative_eq!(agents[0].strength(Framework::CausalInference).unwrap(), 0.512, epsilon = 1e-12);
        // 0.9 + 0.02 * (0.5 - 0.9) + 0.02 * (0.7 - 0.9)
        assert_relative_eq!(agents[1].strength(Framework::CausalInference).unwrap(), 0.888, epsilon = 1e-12);
        assert_relative_eq!(agents[2].strength(Framework::CausalInference).unwrap(), 0.7, epsilon = 1e-12);
    }
    
    #[test]
    fn test_deferred_sync_leaves_unshared_frameworks() {
        let mut lone = IndependentAgent::new(AgentId::indexed("ogi", 1), "autonomous_labs");
        let mut frameworks = FrameworkMap::new();
        frameworks.insert(Framework::UncertaintyHandling, 0.8);
        lone.apply_update(&FrameworkUpdate {
            agent_id: AgentId::indexed("ogi", 1),
            frameworks,
        });
        let mut agents = vec![agent_holding(0, 0.6), lone];
        
        let (_, applied) = deferred_sync(&Synchronizer::default(), &mut agents, &mut FixedEntropy::new());
        
        assert_eq!(applied, 0);
        assert_eq!(agents[0].strength(Framework::CausalInference), Some(0.6));
        assert_eq!(agents[1].strength(Framework::UncertaintyHandling), Some(0.8));
    }
    
    #[test]
    fn test_huge_cycle_count_rejected() {
        let result = ScenarioRunner::new(SimConfig::default().with_cycles(u64::MAX));
        assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
    }
    
    #[test]
    fn test_scenario_seed_drives_run() {
        let runner = ScenarioRunner::new(SimConfig::default()).unwrap();
        let result = runner.run(ScenarioId::AutonomousLabs).unwrap();
        assert_eq!(result.seed, runner.scenario_seed(ScenarioId::AutonomousLabs));
        assert_eq!(result.seed, derive_stream_seed(42, 3));
    }
    
    #[test]
    fn test_invalid_config_rejected() {
        let result = ScenarioRunner::new(SimConfig::default().with_agents(0));
        assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
    }
    
    #[test]
    fn test_fixed_entropy_run() {
        let config = SimConfig::default().with_agents(3).with_cycles(6).with_sync_period(5);
        let runner = ScenarioRunner::new(config).unwrap();
        let mut entropy = FixedEntropy::new();
        
        let result = runner.run_with_entropy(ScenarioId::AutonomousLabs, &mut entropy).unwrap();
        
        assert_eq!(result.records.len(), 6);
        let first = &result.records[0];
        // Agents have completed one cycle when sampled
        assert_relative_eq!(first.coherence_independent, metrics::independent_coherence_base(1), epsilon = 1e-12);
        assert_relative_eq!(first.coherence_synchronized, 0.55, epsilon = 1e-12);
        assert_relative_eq!(first.drift_independent, metrics::independent_drift_base(1), epsilon = 1e-12);
        assert_relative_eq!(first.comm_synchronized_mb, 3.0 * 45.0, epsilon = 1e-9);
        assert_relative_eq!(first.comm_independent_mb, 15.0, epsilon = 1e-12);
        assert_eq!(result.records[1].comm_independent_mb, 0.0);
        assert_relative_eq!(result.records[5].comm_independent_mb, 15.0, epsilon = 1e-12);
    }
    
    #[test]
    fn test_events_include_supervisor_on_sync() {
        let runner = ScenarioRunner::new(SimConfig::default().with_cycles(6)).unwrap();
        let result = runner.run(ScenarioId::DisasterResponse).unwrap();
        
        let supervisor: Vec<u64> = result
            .events
            .iter()
            .filter(|e| e.level == EventLevel::Supervisor)
            .map(|e| e.cycle)
            .collect();
        assert_eq!(supervisor, vec![0, 5]);
        
        let sync_lines = result.events.iter().filter(|e| e.level == EventLevel::Sync).count();
        assert_eq!(sync_lines, 2);
    }
    
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]
        
        #[test]
        fn records_stay_in_range(seed in any::<u64>(), agents in 1usize..6, period in 1u64..8) {
            let config = SimConfig::default()
                .with_seed(seed)
                .with_agents(agents)
                .with_cycles(12)
                .with_sync_period(period)
                .with_scenarios(vec![ScenarioId::AutonomousLabs]);
            let result = ScenarioRunner::new(config).unwrap().run(ScenarioId::AutonomousLabs).unwrap();
            
            prop_assert_eq!(result.records.len(), 12);
            prop_assert_eq!(result.ledger_entries, agents * 12);
            for record in &result.records {
                prop_assert!((metrics::INDEPENDENT_COHERENCE_MIN..=metrics::INDEPENDENT_COHERENCE_MAX)
                    .contains(&record.coherence_independent));
                prop_assert!((metrics::SYNCHRONIZED_COHERENCE_MIN..=metrics::SYNCHRONIZED_COHERENCE_MAX)
                    .contains(&record.coherence_synchronized));
                if record.cycle % period != 0 {
                    prop_assert_eq!(record.comm_independent_mb, 0.0);
                }
            }
        }
    }
}
