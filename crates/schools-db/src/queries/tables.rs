//! Table-level statistics.

use schools_core::schema::ALL_TABLES;

use crate::pool::{DbPool, DbResult};

/// Row count of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCount {
    pub table: &'static str,
    pub rows: u64,
}

/// Count rows in every importer table, in import order.
pub fn table_counts(pool: &DbPool) -> DbResult<Vec<TableCount>> {
    pool.with_conn(|conn| {
        ALL_TABLES
            .iter()
            .map(|schema| -> DbResult<TableCount> {
                let rows: i64 = conn.query_row(
                    &format!("SELECT COUNT(*) FROM {}", schema.name),
                    [],
                    |row| row.get(0),
                )?;
                Ok(TableCount {
                    table: schema.name,
                    rows: rows as u64,
                })
            })
            .collect()
    })
}
