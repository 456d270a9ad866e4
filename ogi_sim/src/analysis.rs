//! Run summary statistics.
//!
//! Condenses the metric records of a run into the headline comparison:
//! final-cycle coherence and drift per strategy, and total communication.

use ogi_core::metrics::mean;
use serde::{Deserialize, Serialize};

use crate::record::MetricRecord;

/// Per-scenario slice of a [`RunSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub scenario: String,
    pub final_coherence_independent: f64,
    pub final_coherence_synchronized: f64,
    pub total_comm_independent_mb: f64,
    pub total_comm_synchronized_mb: f64,
    
    /// Cycles on which a deferred sync transferred data
    pub sync_events: usize,
}

/// Headline comparison of the two strategies over a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Records the summary was computed from
    pub record_count: usize,
    
    /// Last cycle index present in the records
    pub final_cycle: u64,
    
    /// Mean coherence over final-cycle records
    pub final_coherence_independent: f64,
    pub final_coherence_synchronized: f64,
    
    /// `(independent - synchronized) / synchronized * 100`
    pub coherence_improvement_pct: f64,
    
    /// Mean drift over final-cycle records
    pub final_drift_independent: f64,
    pub final_drift_synchronized: f64,
    
    /// Total communication over every record
    pub total_comm_independent_mb: f64,
    pub total_comm_synchronized_mb: f64,
    
    /// `(synchronized - independent) / synchronized * 100`
    pub comm_reduction_pct: f64,
    
    pub scenarios: Vec<ScenarioSummary>,
}

impl RunSummary {
    /// Summarizes a run. Returns `None` when there are no records.
    pub fn from_records(records: &[MetricRecord]) -> Option<Self> {
        let final_cycle = records.iter().map(|r| r.cycle).max()?;
        let finals: Vec<&MetricRecord> = records.iter().filter(|r| r.cycle == final_cycle).collect();
        
        let final_coherence_independent = mean(finals.iter().map(|r| r.coherence_independent));
        let final_coherence_synchronized = mean(finals.iter().map(|r| r.coherence_synchronized));
        let total_comm_independent_mb: f64 = records.iter().map(|r| r.comm_independent_mb).sum();
        let total_comm_synchronized_mb: f64 = records.iter().map(|r| r.comm_synchronized_mb).sum();
        
        Some(Self {
            record_count: records.len(),
            final_cycle,
            final_coherence_independent,
            final_coherence_synchronized,
            coherence_improvement_pct: relative_pct(
                final_coherence_independent - final_coherence_synchronized,
                final_coherence_synchronized,
            ),
            final_drift_independent: mean(finals.iter().map(|r| r.drift_independent)),
            final_drift_synchronized: mean(finals.iter().map(|r| r.drift_synchronized)),
            total_comm_independent_mb,
            total_comm_synchronized_mb,
            comm_reduction_pct: relative_pct(
                total_comm_synchronized_mb - total_comm_independent_mb,
                total_comm_synchronized_mb,
            ),
            scenarios: summarize_scenarios(records),
        })
    }
}

fn relative_pct(difference: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        difference / baseline * 100.0
    }
}

fn summarize_scenarios(records: &[MetricRecord]) -> Vec<ScenarioSummary> {
    // Keep first-seen order
    let mut names: Vec<&str> = Vec::new();
    for record in records {
        if !names.contains(&record.scenario.as_str()) {
            names.push(&record.scenario);
        }
    }
    
    names
        .into_iter()
        .map(|name| {
            let rows: Vec<&MetricRecord> = records.iter().filter(|r| r.scenario == name).collect();
            let last = rows.iter().max_by_key(|r| r.cycle);
            ScenarioSummary {
                scenario: name.to_string(),
                final_coherence_independent: last.map(|r| r.coherence_independent).unwrap_or(0.0),
                final_coherence_synchronized: last.map(|r| r.coherence_synchronized).unwrap_or(0.0),
                total_comm_independent_mb: rows.iter().map(|r| r.comm_independent_mb).sum(),
                total_comm_synchronized_mb: rows.iter().map(|r| r.comm_synchronized_mb).sum(),
                sync_events: rows.iter().filter(|r| r.comm_independent_mb != 0.0).count(),
            }
        })
        .collect()
}
