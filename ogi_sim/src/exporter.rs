//! File exporter for simulation results.
//!
//! Writes a run into an output directory:
//! - `metrics.csv`: one row per (scenario, cycle)
//! - `metrics.json`: the same records as a JSON array
//! - `events.log`: the event log, one line per event
//! - `summary.json`: the [`RunSummary`], when there is one

use crate::analysis::RunSummary;
use crate::error::SimError;
use crate::record::{MetricRecord, SimEvent};
use crate::runner::SimulationOutput;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes simulation output into a directory.
#[derive(Debug, Clone)]
pub struct SimExport {
    dir: PathBuf,
}

impl SimExport {
    pub const METRICS_CSV: &'static str = "metrics.csv";
    pub const METRICS_JSON: &'static str = "metrics.json";
    pub const EVENTS_LOG: &'static str = "events.log";
    pub const SUMMARY_JSON: &'static str = "summary.json";
    
    /// Creates an exporter targeting `dir`. Nothing is touched until a write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
    
    pub fn dir(&self) -> &Path {
        &self.dir
    }
    
    /// Writes every artifact, creating the directory if needed.
    ///
    /// Returns the paths written.
    pub fn write_all(
        &self,
        output: &SimulationOutput,
        summary: Option<&RunSummary>,
    ) -> Result<Vec<PathBuf>, SimError> {
        fs::create_dir_all(&self.dir)?;
        
        let records = output.records();
        let mut written = vec![
            self.write_csv(&records)?,
            self.write_json(&records)?,
            self.write_events(&output.events())?,
        ];
        if let Some(summary) = summary {
            written.push(self.write_summary(summary)?);
        }
        Ok(written)
    }
    
    /// Writes `metrics.csv`.
    pub fn write_csv(&self, records: &[MetricRecord]) -> Result<PathBuf, SimError> {
        self.write_file(Self::METRICS_CSV, records_to_csv(records).as_bytes())
    }
    
    /// Writes `metrics.json`.
    pub fn write_json(&self, records: &[MetricRecord]) -> Result<PathBuf, SimError> {
        let json = serde_json::to_string_pretty(records)?;
        self.write_file(Self::METRICS_JSON, json.as_bytes())
    }
    
    /// Writes `events.log`.
    pub fn write_events(&self, events: &[SimEvent]) -> Result<PathBuf, SimError> {
        let mut log = String::new();
        for event in events {
            log.push_str(&event.log_line());
            log.push('\n');
        }
        self.write_file(Self::EVENTS_LOG, log.as_bytes())
    }
    
    /// Writes `summary.json`.
    pub fn write_summary(&self, summary: &RunSummary) -> Result<PathBuf, SimError> {
        let json = serde_json::to_string_pretty(summary)?;
        self.write_file(Self::SUMMARY_JSON, json.as_bytes())
    }
    
    fn write_file(&self, name: &str, contents: &[u8]) -> Result<PathBuf, SimError> {
        let path = self.dir.join(name);
        let mut file = File::create(&path)?;
        file.write_all(contents)?;
        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

/// Renders records as CSV with a header row.
pub fn records_to_csv(records: &[MetricRecord]) -> String {
    let mut csv = String::from(MetricRecord::CSV_HEADER);
    csv.push('\n');
    for record in records {
        csv.push_str(&record.to_csv_row());
        csv.push('\n');
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::runner::ScenarioRunner;
    use crate::scenarios::ScenarioId;
    
    fn small_run() -> SimulationOutput {
        let config = SimConfig::default()
            .with_cycles(6)
            .with_scenarios(vec![ScenarioId::MedicalDiagnosis, ScenarioId::DisasterResponse]);
        ScenarioRunner::new(config).unwrap().run_all().unwrap()
    }
    
    #[test]
    fn test_csv_has_header_and_rows() {
        let output = small_run();
        let csv = records_to_csv(&output.records());
        let lines: Vec<&str> = csv.lines().collect();
        
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], MetricRecord::CSV_HEADER);
        assert!(lines[1].starts_with("medical_diagnosis,0,"));
        assert!(lines[12].starts_with("disaster_response,5,"));
    }
    
    #[test]
    fn test_write_all_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("results");
        let output = small_run();
        let summary = RunSummary::from_records(&output.records());
        
        let export = SimExport::new(&dir);
        assert_eq!(export.dir(), dir.as_path());
        let written = export.write_all(&output, summary.as_ref()).unwrap();
        
        assert_eq!(written.len(), 4);
        for name in [
            SimExport::METRICS_CSV,
            SimExport::METRICS_JSON,
            SimExport::EVENTS_LOG,
            SimExport::SUMMARY_JSON,
        ] {
            assert!(dir.join(name).is_file(), "missing {}", name);
        }
    }
    
    #[test]
    fn test_json_round_trips_records() {
        let tmp = tempfile::tempdir().unwrap();
        let output = small_run();
        let records = output.records();
        
        let path = SimExport::new(tmp.path()).write_json(&records).unwrap();
        let loaded: Vec<MetricRecord> = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        
        assert_eq!(loaded, records);
    }
    
    #[test]
    fn test_events_log_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let output = small_run();
        
        let path = SimExport::new(tmp.path()).write_events(&output.events()).unwrap();
        let log = fs::read_to_string(path).unwrap();
        
        assert_eq!(log.lines().count(), output.events().len());
        assert!(log.lines().any(|l| l.starts_with("Cycle 00 [medical_diagnosis] Deferred sync")));
    }
    
    #[test]
    fn test_unwritable_directory_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, b"x").unwrap();
        
        let result = SimExport::new(blocker.join("out")).write_all(&small_run(), None);
        assert!(matches!(result, Err(SimError::Io(_))));
    }
}
