//! Generic record storage keyed by primary key.
//!
//! Statements are built from a [`TableSchema`] and values are bound by
//! column name, so a record can never land in the wrong column.

use std::collections::HashSet;

use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, ToSql};
use tracing::{debug, info};

use schools_core::{Record, TableSchema, Value};

use crate::pool::{DbPool, DbResult};

/// Outcome of writing one table's insert and update sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyResult {
    pub inserted: usize,
    pub updated: usize,
}

/// Convert a typed cell into an SQLite value.
pub fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Text(s) => SqlValue::Text(s.clone()),
        Value::Date(d) => SqlValue::Text(d.format("%Y-%m-%d").to_string()),
        Value::Real(v) => SqlValue::Real(*v),
        Value::Integer(v) => SqlValue::Integer(*v),
        Value::Null => SqlValue::Null,
    }
}

/// Read the distinct primary keys currently stored in a table.
pub fn existing_ids(conn: &Connection, schema: &TableSchema) -> DbResult<HashSet<String>> {
    let sql = format!("SELECT DISTINCT {} FROM {}", schema.primary_key(), schema.name);
    let mut stmt = conn.prepare(&sql)?;

    let ids = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<HashSet<_>, _>>()?;

    debug!(table = schema.name, count = ids.len(), "Loaded existing ids");
    Ok(ids)
}

fn insert_sql(schema: &TableSchema) -> String {
    let columns: Vec<_> = schema.column_names().collect();
    let placeholders: Vec<_> = columns.iter().map(|c| format!(":{}", c)).collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.name,
        columns.join(", "),
        placeholders.join(", ")
    )
}

fn update_sql(schema: &TableSchema) -> String {
    let assignments: Vec<_> = schema
        .value_columns()
        .iter()
        .map(|c| format!("{0} = :{0}", c.name))
        .collect();

    format!(
        "UPDATE {table} SET {assignments} WHERE {pk} = :{pk}",
        table = schema.name,
        assignments = assignments.join(", "),
        pk = schema.primary_key()
    )
}

/// Named parameters for every column of `record`.
fn named_params(schema: &TableSchema, record: &Record) -> Vec<(String, SqlValue)> {
    record
        .ordered(schema)
        .map(|(name, value)| (format!(":{}", name), to_sql_value(value)))
        .collect()
}

fn execute_each(
    conn: &Connection,
    sql: &str,
    schema: &TableSchema,
    records: &[Record],
) -> DbResult<usize> {
    let mut stmt = conn.prepare(sql)?;

    for record in records {
        let params = named_params(schema, record);
        let bound: Vec<(&str, &dyn ToSql)> = params
            .iter()
            .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
            .collect();
        stmt.execute(bound.as_slice())?;
    }

    Ok(records.len())
}

/// Insert one row per record.
pub fn insert_records(
    conn: &Connection,
    schema: &TableSchema,
    records: &[Record],
) -> DbResult<usize> {
    execute_each(conn, &insert_sql(schema), schema, records)
}

/// Update every non-key column of each record, matched by primary key.
pub fn update_records(
    conn: &Connection,
    schema: &TableSchema,
    records: &[Record],
) -> DbResult<usize> {
    execute_each(conn, &update_sql(schema), schema, records)
}

/// Insert then update inside one transaction, committing once.
///
/// Any failing statement rolls back the whole transaction.
pub fn apply(
    pool: &DbPool,
    schema: &TableSchema,
    to_insert: &[Record],
    to_update: &[Record],
) -> DbResult<ApplyResult> {
    pool.with_conn_mut(|conn| {
        let tx = conn.transaction()?;

        let inserted = insert_records(&tx, schema, to_insert)?;
        let updated = update_records(&tx, schema, to_update)?;

        tx.commit()?;

        info!(table = schema.name, inserted, updated, "Committed");
        Ok(ApplyResult { inserted, updated })
    })
}
