//! OGI vs Federated Simulator CLI
//!
//! Runs the comparison scenarios and reports or exports the results.

use clap::Parser;
use ogi_sim::scenarios::ScenarioId;
use ogi_sim::{RunSummary, ScenarioRunner, SimConfig, SimError, SimExport};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ogi-sim")]
#[command(about = "Seeded comparison of OGI and Federated learning strategies")]
struct Args {
    /// Master seed for determinism (0 = random from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,
    
    /// Agents per strategy
    #[arg(short, long, default_value = "5")]
    agents: usize,
    
    /// Cycles per scenario
    #[arg(short, long, default_value = "20")]
    cycles: u64,
    
    /// Cycles between deferred synchronization events
    #[arg(long, default_value = "5")]
    sync_period: u64,
    
    /// Scenario to run (medical_diagnosis, disaster_response, autonomous_labs, all)
    #[arg(short = 'S', long, default_value = "all")]
    scenario: String,
    
    /// Directory to write metrics.csv, metrics.json, events.log and summary.json
    #[arg(short, long)]
    output: Option<PathBuf>,
    
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
    
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    
    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
    
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), SimError> {
    if !args.json {
        info!("OGI vs Federated Simulator v{}", env!("CARGO_PKG_VERSION"));
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }
    
    let scenarios: Vec<ScenarioId> = if args.scenario == "all" {
        ScenarioId::all()
    } else {
        vec![args
            .scenario
            .parse::<ScenarioId>()
            .map_err(|_| SimError::UnknownScenario(args.scenario.clone()))?]
    };
    
    let seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    } else {
        args.seed
    };
    
    let config = SimConfig::default()
        .with_seed(seed)
        .with_agents(args.agents)
        .with_cycles(args.cycles)
        .with_sync_period(args.sync_period)
        .with_scenarios(scenarios);
    
    let runner = ScenarioRunner::new(config)?;
    info!(
        "{} agents per strategy, {} cycles, {} scenario(s)",
        runner.config().agents_per_variant,
        runner.config().cycles_per_scenario,
        runner.config().scenarios.len()
    );
    let output = runner.run_all()?;
    let summary = RunSummary::from_records(&output.records());
    
    if let Some(dir) = &args.output {
        let export = SimExport::new(dir);
        let written = export.write_all(&output, summary.as_ref())?;
        info!("Wrote {} files to {}", written.len(), export.dir().display());
    }
    
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    
    if let Some(summary) = &summary {
        print_summary(seed, summary);
    }
    Ok(())
}

fn print_summary(seed: u64, summary: &RunSummary) {
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("Seed {} | {} records | final cycle {}", seed, summary.record_count, summary.final_cycle);
    for s in &summary.scenarios {
        info!(
            "  {:<20} coherence {:.3} vs {:.3} | comm {:.1} vs {:.1} MB | {} syncs",
            s.scenario,
            s.final_coherence_independent,
            s.final_coherence_synchronized,
            s.total_comm_independent_mb,
            s.total_comm_synchronized_mb,
            s.sync_events,
        );
    }
    info!(
        "Coherence: OGI {:.3} vs Federated {:.3} ({:+.1}%)",
        summary.final_coherence_independent, summary.final_coherence_synchronized, summary.coherence_improvement_pct
    );
    info!(
        "Drift: OGI {:.3} vs Federated {:.3}",
        summary.final_drift_independent, summary.final_drift_synchronized
    );
    info!(
        "Communication: OGI {:.1} MB vs Federated {:.1} MB ({:.1}% less)",
        summary.total_comm_independent_mb, summary.total_comm_synchronized_mb, summary.comm_reduction_pct
    );
}
