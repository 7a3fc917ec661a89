//! Per-entity row transformers.
//!
//! Each transformer receives every raw row fetched for one entity and
//! returns the typed rows handed to reconciliation. Rows are still
//! positional here; the column count check happens in `reconcile`.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, info};

use schools_core::schema::{DZI, SCHOOL, SCORE};
use schools_core::value::text_row;
use schools_core::{ColumnType, SchoolsError, SchoolsResult, TableSchema, Value};
use schools_sparql::Row;

/// Signature shared by all transformers.
pub type Transform = fn(Vec<Row>) -> SchoolsResult<Vec<Vec<Value>>>;

/// Keep only the first row of every id.
///
/// Only rows with exactly `width` cells are considered; others are
/// discarded. Ids keep the order in which they were first seen, whether
/// duplicated or not; single rows are not grouped ahead of duplicated ones.
/// Each duplicated id is logged once with the kept row, and each dropped row
/// at debug level.
pub fn drop_duplicates(table: &str, rows: Vec<Row>, width: usize) -> Vec<Row> {
    let mut groups: Vec<Vec<Row>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows.into_iter().filter(|r| r.len() == width) {
        match index.get(&row[0]) {
            Some(&i) => groups[i].push(row),
            None => {
                index.insert(row[0].clone(), groups.len());
                groups.push(vec![row]);
            }
        }
    }

    groups
        .into_iter()
        .filter_map(|group| {
            let mut group = group.into_iter();
            let kept = group.next()?;
            let duplicates: Vec<Row> = group.collect();

            if !duplicates.is_empty() {
                info!(table, id = %kept[0], kept = ?kept, "Row with duplicates");
                for dup in &duplicates {
                    debug!(table, id = %dup[0], dropped = ?dup, "Dropped duplicate");
                }
            }
            Some(kept)
        })
        .collect()
}

/// Cities need no reshaping.
pub fn identity(rows: Vec<Row>) -> SchoolsResult<Vec<Vec<Value>>> {
    Ok(rows.into_iter().map(text_row).collect())
}

/// Schools linked to more than one place keep their first place.
pub fn schools(rows: Vec<Row>) -> SchoolsResult<Vec<Vec<Value>>> {
    let rows = drop_duplicates(SCHOOL.name, rows, SCHOOL.column_count());
    Ok(rows.into_iter().map(text_row).collect())
}

/// Parse the date column of exam session rows.
///
/// Rows with an unexpected length pass through untouched and are dropped by
/// reconciliation.
pub fn exam_sessions(rows: Vec<Row>) -> SchoolsResult<Vec<Vec<Value>>> {
    rows.into_iter()
        .map(|row| {
            if row.len() != DZI.column_count() {
                return Ok(text_row(row));
            }

            let date = parse_date(&DZI, &row, 1)?;
            let mut values = text_row(row);
            values[1] = Value::Date(date);
            Ok(values)
        })
        .collect()
}

/// De-duplicate scores by id and convert the numeric columns.
///
/// Any cell that cannot be converted fails the whole batch.
pub fn scores(rows: Vec<Row>) -> SchoolsResult<Vec<Vec<Value>>> {
    let rows = drop_duplicates(SCORE.name, rows, SCORE.column_count());

    rows.into_iter()
        .map(|row| {
            let converted = (0..row.len())
                .map(|i| coerce_cell(&SCORE, &row, i))
                .collect::<SchoolsResult<Vec<_>>>()?;
            Ok(converted)
        })
        .collect()
}

fn parse_date(schema: &TableSchema, row: &Row, i: usize) -> SchoolsResult<NaiveDate> {
    NaiveDate::parse_from_str(row[i].trim(), "%Y-%m-%d").map_err(|e| {
        SchoolsError::coercion(schema.name, &row[0], schema.columns[i].name, &row[i], e)
    })
}

/// Convert cell `i` of `row` for score storage.
///
/// `quantity_people` is read as a real number: the graph publishes it as a
/// decimal, and SQLite stores whole reals in the integer column as integers.
fn coerce_cell(schema: &TableSchema, row: &Row, i: usize) -> SchoolsResult<Value> {
    let column = &schema.columns[i];
    let cell = row[i].trim();

    if cell.is_empty() && column.nullable {
        return Ok(Value::Null);
    }

    let err = |reason: String| {
        SchoolsError::coercion(schema.name, &row[0], column.name, &row[i], reason)
    };

    match (column.ty, column.name) {
        (ColumnType::Integer, "quantity_people") | (ColumnType::Real, _) => cell
            .parse::<f64>()
            .map(Value::Real)
            .map_err(|e| err(e.to_string())),
        (ColumnType::Integer, _) => cell
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| err(e.to_string())),
        (ColumnType::Date, _) => parse_date(schema, row, i).map(Value::Date),
        (ColumnType::Text, _) => Ok(Value::Text(row[i].clone())),
    }
}
