//! Database status command.

use anyhow::{Context, Result};

use schools_core::Config;
use schools_db::queries::tables::table_counts;

use crate::output;

pub fn execute(config: &Config) -> Result<()> {
    let pool = schools_db::init_pool(&config.database.path)
        .with_context(|| format!("Failed to open database {}", config.database.path.display()))?;

    let counts = table_counts(&pool)?;
    output::print_table_counts(&config.database.path, &counts);
    Ok(())
}
