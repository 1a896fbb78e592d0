use std::io;
use std::path::PathBuf;

use allowance_engine::config::{ConfigLoader, FileConfigSource};
use allowance_engine::refresh::{
    AllowanceState, AllowanceTracker, Clock, JsonLinesSink, SystemClock, TracingSink, run_daily,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "allowance-engine", version, about = "Weekly allowance calculator")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "allowance.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every child once and print the states as JSON
    Evaluate {
        /// Date to evaluate on (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Refresh now and then every day at local midnight
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let today = SystemClock.now().date();
    let config = ConfigLoader::load(&cli.config, today)?.into_config();

    match cli.command {
        Commands::Evaluate { as_of } => {
            let mut tracker =
                AllowanceTracker::new(config, Vec::<AllowanceState>::new(), TracingSink);
            tracker.refresh(as_of.unwrap_or(today));
            serde_json::to_writer_pretty(io::stdout().lock(), tracker.states())?;
            println!();
        }
        Commands::Run => {
            info!(config = %cli.config.display(), "Starting daily allowance refresh");
            let tracker =
                AllowanceTracker::new(config, JsonLinesSink::new(io::stdout()), TracingSink);
            let source = FileConfigSource::new(cli.config.clone());
            run_daily(tracker, SystemClock, source).await;
        }
    }

    Ok(())
}
