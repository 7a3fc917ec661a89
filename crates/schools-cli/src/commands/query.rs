//! Ad-hoc SPARQL query command.

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

use schools_core::Config;
use schools_sparql::SparqlClient;
use tracing::debug;

#[derive(Args)]
pub struct QueryArgs {
    /// File holding the SELECT query, or `-` for stdin
    pub file: PathBuf,
}

pub async fn execute(args: QueryArgs, config: &Config) -> Result<()> {
    let sparql = read_query(&args.file)?;
    debug!(file = %args.file.display(), bytes = sparql.len(), "Running ad-hoc query");
    let client = SparqlClient::new(&config.sparql).context("Failed to create SPARQL client")?;

    let rows = client.query(&sparql).await?;

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(std::io::stdout());
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    eprintln!("{} row(s)", rows.len());
    Ok(())
}

fn read_query(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read query from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}
