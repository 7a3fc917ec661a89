//! Partitioning of incoming rows into insert and update sets.

use std::collections::HashSet;

use schools_core::{Record, TableSchema, Value};
use tracing::{debug, info};

/// Rows of one table split by whether their id is already stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    pub to_insert: Vec<Record>,
    pub to_update: Vec<Record>,
    /// Rows whose length did not match the table.
    pub dropped: usize,
}

/// Split `rows` against `existing_ids`.
///
/// A row whose length differs from the table's column count is dropped.
/// Every other row is an update when its id (first column) is already
/// stored and an insert otherwise. Input order is kept within each set.
pub fn reconcile(
    schema: &TableSchema,
    rows: Vec<Vec<Value>>,
    existing_ids: &HashSet<String>,
) -> Reconciliation {
    let mut result = Reconciliation::default();

    for row in rows {
        match Record::bind(schema, row) {
            Some(record) if existing_ids.contains(record.id()) => result.to_update.push(record),
            Some(record) => result.to_insert.push(record),
            None => result.dropped += 1,
        }
    }

    if result.dropped > 0 {
        debug!(
            table = schema.name,
            dropped = result.dropped,
            "Dropped rows with wrong column count"
        );
    }
    info!(table = schema.name, count = result.to_insert.len(), "Rows to insert");
    info!(table = schema.name, count = result.to_update.len(), "Rows to update");

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use schools_core::schema::{CITY, SCHOOL};
    use schools_core::value::text_row;

    fn rows(data: &[&[&str]]) -> Vec<Vec<Value>> {
        data.iter()
            .map(|r| text_row(r.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_partition() {
        let existing: HashSet<String> = ["city:2".to_string()].into_iter().collect();
        let result = reconcile(
            &CITY,
            rows(&[&["city:1", "Sofia"], &["city:2", "Plovdiv"], &["city:3", "Varna"]]),
            &existing,
        );

        assert_eq!(ids(&result.to_insert), vec!["city:1", "city:3"]);
        assert_eq!(ids(&result.to_update), vec!["city:2"]);
        assert_eq!(result.dropped, 0);
    }

    #[test]
    fn test_wrong_length_dropped() {
        let existing: HashSet<String> = ["city:1".to_string()].into_iter().collect();
        let result = reconcile(
            &CITY,
            rows(&[&["city:1"], &["city:1", "Sofia", "extra"], &[], &["city:9", "Burgas"]]),
            &existing,
        );

        assert_eq!(ids(&result.to_insert), vec!["city:9"]);
        assert!(result.to_update.is_empty());
        assert_eq!(result.dropped, 3);
    }

    #[test]
    fn test_every_row_lands_in_exactly_one_bucket() {
        let existing: HashSet<String> = ["school:1".to_string(), "school:3".to_string()]
            .into_iter()
            .collect();
        let input = rows(&[
            &["school:1", "A", "city:1"],
            &["school:2", "B", "city:1"],
            &["school:3", "C"],
            &["school:3", "C", "city:2"],
            &["school:4", "D", "city:2", "x"],
        ]);
        let total = input.len();

        let result = reconcile(&SCHOOL, input, &existing);

        assert_eq!(result.to_insert.len() + result.to_update.len() + result.dropped, total);
        assert_eq!(ids(&result.to_update), vec!["school:1", "school:3"]);
        assert_eq!(ids(&result.to_insert), vec!["school:2"]);
    }

    #[test]
    fn test_idempotent() {
        let existing: HashSet<String> = ["city:1".to_string()].into_iter().collect();
        let input = rows(&[&["city:1", "Sofia"], &["city:2", "Plovdiv"], &["bad"]]);

        let first = reconcile(&CITY, input.clone(), &existing);
        let second = reconcile(&CITY, input, &existing);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let result = reconcile(&CITY, Vec::new(), &HashSet::new());
        assert_eq!(result, Reconciliation::default());
    }
}
