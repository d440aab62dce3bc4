use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use spegel_capture::QueueTap;
use spegel_config::SpegelConfig;
use spegel_export::ExportSession;
use spegel_sim::{Scenario, Simulator};
use spegel_telemetry::MetricsRecorder;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the simulation and export queue admissions to the consumer
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Scenario file to replay; the built-in two-node scenario otherwise.
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,

    /// Configuration file, overriding the config/spegel.yaml lookup.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rendezvous socket path, overriding the configured one.
    #[arg(long)]
    pub socket: Option<PathBuf>,
}

pub fn run_export_mode(
    args: RunArgs,
    metrics: MetricsRecorder,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = match &args.config {
        Some(path) => SpegelConfig::load_from_path(path)?,
        None => SpegelConfig::load()?,
    };
    if let Some(socket) = args.socket {
        config.export.socket_path = socket;
    }

    let scenario = match &args.scenario {
        Some(path) => Scenario::load_from_path(path)?,
        None => Scenario::default(),
    };

    // The consumer must already be listening: connect failure aborts here,
    // before the event loop ever runs.
    let session = ExportSession::connect(&config.export)?;
    info!(
        path = %config.export.socket_path.display(),
        "Export session established"
    );

    let mut sim = Simulator::new(&config.simulator);
    sim.load_scenario(&scenario)?;
    QueueTap::new(session, sim.clock(), metrics.clone()).attach(sim.hooks_mut());
    sim.run()?;

    print!("{}", metrics.gather_metrics()?);
    Ok(())
}
