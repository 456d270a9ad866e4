//! OGI Simulation Harness
//!
//! Runs the independent-development (OGI) and continuously-synchronized
//! (Federated) strategies side by side over a set of named scenarios and
//! collects comparable metrics.
//!
//! # Determinism
//!
//! All randomness derives from one 64-bit master seed. Each scenario gets its
//! own stream (`derive_stream_seed(seed, scenario.stream())`), and ledger
//! timestamps come from a virtual clock, so the same configuration always
//! yields the same records.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      ScenarioRunner                         │
//! │   SimConfig ──► per scenario: SeededEntropy + SimClock      │
//! │                                                             │
//! │   ┌──────────────────┐          ┌──────────────────┐        │
//! │   │ IndependentAgent │ x N      │ SynchronizedAgent│ x N    │
//! │   └────────┬─────────┘          └────────┬─────────┘        │
//! │            │ every period                │ every cycle      │
//! │       Synchronizer                  upload volume           │
//! │            └──────────► MetricRecord ◄───┘                  │
//! └───────────────────────────────┬────────────────────────────┘
//!                                 ▼
//!                    RunSummary / SimExport (files)
//! ```
//!
//! # Usage
//!
//! ```
//! use ogi_sim::{ScenarioRunner, SimConfig};
//! use ogi_sim::scenarios::ScenarioId;
//!
//! let config = SimConfig::default().with_cycles(10);
//! let runner = ScenarioRunner::new(config).unwrap();
//! let result = runner.run(ScenarioId::MedicalDiagnosis).unwrap();
//! assert_eq!(result.records.len(), 10);
//! ```

mod analysis;
mod config;
mod context;
mod error;
mod exporter;
mod record;
mod runner;
pub mod scenarios;

pub use analysis::{RunSummary, ScenarioSummary};
pub use config::{ClockMode, SimConfig, MAX_AGENTS_PER_VARIANT, MAX_CYCLES_PER_SCENARIO};
pub use context::SimClock;
pub use error::SimError;
pub use exporter::{records_to_csv, SimExport};
pub use record::{EventLevel, MetricRecord, SimEvent};
pub use runner::{ScenarioResult, ScenarioRunner, SimulationOutput};
