//! Database migrations.

use crate::pool::{DbError, DbPool, DbResult};
use rusqlite_migration::{Migrations, M};
use tracing::debug;

/// SQL schema definition.
const SCHEMA: &str = include_str!("schema.sql");

/// Bring the database schema up to date.
pub fn run_migrations(pool: &DbPool) -> DbResult<()> {
    let migrations = Migrations::new(vec![M::up(SCHEMA)]);

    pool.with_conn_mut(|conn| {
        migrations
            .to_latest(conn)
            .map_err(|e| DbError::Migration(e.to_string()))
    })?;

    debug!("Database schema is up to date");
    Ok(())
}
