mod args;
mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dystros_core::config::DystrosConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

use crate::args::CollectionSetArgs;

#[derive(Parser)]
#[command(name = "dystros")]
#[command(about = "List events and tasks from your local iCalendar collections")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events in chronological order
    Events {
        #[command(flatten)]
        paths: CollectionSetArgs,
    },
    /// List tasks in the order they are stored
    Todos {
        #[command(flatten)]
        paths: CollectionSetArgs,
    },
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();
    let config = DystrosConfig::load()?;

    match cli.command {
        Commands::Events { paths } => commands::events::run(paths.collection_set(&config)?),
        Commands::Todos { paths } => commands::todos::run(paths.collection_set(&config)?),
    }
}

/// `RUST_LOG` when it is set and valid, `warn` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
