//! `wealth-sim [config.json]`
//!
//! Runs a multi-cluster simulation and prints a per-cluster summary.
//! Without a path the embedded default configuration is used.

use std::process::ExitCode;
use wealth_runner::{ClusterSimulation, SimulationResults, load_config, load_default_config};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(results) => {
            print_summary(&results);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> wealth_runner::Result<SimulationResults> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {path}");
            load_config(path)?
        }
        None => load_default_config()?,
    };

    let mut sim = ClusterSimulation::with_config(config)?;
    sim.run()
}

fn print_summary(results: &SimulationResults) {
    println!("\n=== Simulation Results ({} steps) ===\n", results.steps_completed);
    println!(
        "{:<10} {:>6} {:>14} {:>14} {:>10}",
        "Cluster", "Size", "Final value", "Hist. avg", "Defections"
    );
    for summary in &results.clusters {
        let average = summary
            .historical_average
            .map(|avg| format!("{avg:.4}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:>6} {:>14.4} {:>14} {:>10}",
            summary.group_id.as_str(),
            summary.cluster_size,
            summary.final_value,
            average,
            summary.total_defections
        );
    }
    if results.exhausted {
        println!("\n(stopped early: trajectory exhausted)");
    }
}
