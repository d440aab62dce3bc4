//! ## spegel-cli
//! Entrypoint for the queue telemetry exporter: establishes the export
//! session, wires the tap onto the simulated transmission queue, and runs
//! the deterministic event loop. A startup failure (no consumer listening
//! at the rendezvous path) exits non-zero before any simulated event runs.

use clap::Parser;
use spegel_telemetry::{EventLogger, MetricsRecorder};

mod commands;

use commands::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    EventLogger::init();
    let metrics = MetricsRecorder::new();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(run_args) => commands::run_export_mode(run_args, metrics),
    }
}
