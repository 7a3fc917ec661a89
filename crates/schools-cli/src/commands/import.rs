//! Knowledge graph import command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use schools_core::{Config, EntityKind};
use schools_sparql::SparqlClient;
use schools_sync::ImportOptions;

use crate::output;

#[derive(Args, Default)]
pub struct ImportArgs {
    /// Import a single entity (city, school, dzi or score)
    #[arg(long)]
    pub only: Option<EntityKind>,

    /// Fetch and reconcile without writing to the database
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn execute(args: ImportArgs, config: &Config) -> Result<()> {
    let client = SparqlClient::new(&config.sparql).context("Failed to create SPARQL client")?;
    let pool = schools_db::init_pool(&config.database.path)
        .with_context(|| format!("Failed to open database {}", config.database.path.display()))?;

    println!(
        "{} {} {} {}",
        "Importing from".bold(),
        client.endpoint().cyan(),
        "into".bold(),
        config.database.path.display().to_string().cyan()
    );

    let options = ImportOptions {
        only: args.only,
        dry_run: args.dry_run,
    };
    let report = schools_sync::run_full_import(&client, &pool, &options).await?;

    output::print_import_report(&report);
    Ok(())
}
