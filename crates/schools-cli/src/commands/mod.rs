//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use schools_core::Config;

pub mod import;
pub mod query;
pub mod status;

/// Import Bulgarian schools, DZI sessions and scores from the schools
/// knowledge graph into SQLite
#[derive(Parser)]
#[command(name = "schools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file (defaults to ./schools.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SPARQL endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// SQLite database file
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Defaults to `import`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import entities from the knowledge graph (default)
    Import(import::ImportArgs),

    /// Run an ad-hoc SELECT query and print the rows as CSV
    Query(query::QueryArgs),

    /// Show row counts of the imported tables
    Status,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = self.load_config()?;

        match self.command {
            None => import::execute(import::ImportArgs::default(), &config).await,
            Some(Commands::Import(args)) => import::execute(args, &config).await,
            Some(Commands::Query(args)) => query::execute(args, &config).await,
            Some(Commands::Status) => status::execute(&config),
        }
    }

    /// Resolve configuration: file and environment, then command-line flags.
    fn load_config(&self) -> Result<Config> {
        let mut config =
            Config::load(self.config.as_deref()).context("Failed to load configuration")?;

        if let Some(endpoint) = &self.endpoint {
            config.sparql.endpoint = endpoint.clone();
        }
        if let Some(database) = &self.database {
            config.database.path = database.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schools_core::EntityKind;

    #[test]
    fn test_no_subcommand_defaults_to_import() {
        let cli = Cli::try_parse_from(["schools"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_import_flags() {
        let cli =
            Cli::try_parse_from(["schools", "import", "--only", "score", "--dry-run"]).unwrap();
        match cli.command {
            Some(Commands::Import(args)) => {
                assert_eq!(args.only, Some(EntityKind::Score));
                assert!(args.dry_run);
            }
            _ => panic!("expected import"),
        }
    }

    #[test]
    fn test_unknown_entity_rejected() {
        assert!(Cli::try_parse_from(["schools", "import", "--only", "region"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "schools",
            "--endpoint",
            "http://localhost:7200/repositories/schools",
            "--database",
            "/tmp/schools-test.sqlite",
            "status",
        ])
        .unwrap();

        let config = cli.load_config().unwrap();
        assert_eq!(config.sparql.endpoint, "http://localhost:7200/repositories/schools");
        assert_eq!(config.database.path, PathBuf::from("/tmp/schools-test.sqlite"));
    }
}
