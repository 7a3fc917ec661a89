//! Schools importer CLI
//!
//! Synchronizes a SQLite database with the schools knowledge graph.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing on stderr so query output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "schools=debug,schools_sync=debug,schools_db=debug,schools_sparql=debug"
    } else {
        "schools=info,schools_sync=info,schools_db=info"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    cli.execute().await
}
