//! Schools Database Layer
//!
//! SQLite connection handling, the embedded table schema and the storage
//! writer used by the importers.

pub mod migrations;
pub mod pool;
pub mod queries;

pub use pool::{DbError, DbPool, DbResult};

/// Open (or create) the database at `path` and bring its schema up to date.
pub fn init_pool(path: &std::path::Path) -> DbResult<DbPool> {
    let pool = DbPool::open(path)?;
    migrations::run_migrations(&pool)?;
    Ok(pool)
}
