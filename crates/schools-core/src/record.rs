//! Rows bound to a table schema.

use std::collections::BTreeMap;

use crate::schema::TableSchema;
use crate::value::Value;

/// A row mapped from column name to typed value.
///
/// Built only through [`Record::bind`], so every record holds exactly the
/// columns of its table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: String,
    values: BTreeMap<&'static str, Value>,
}

impl Record {
    /// Bind a positional row to a schema.
    ///
    /// Returns `None` when the row does not have exactly one cell per column.
    pub fn bind(schema: &TableSchema, row: Vec<Value>) -> Option<Self> {
        if row.len() != schema.column_count() {
            return None;
        }

        let id = row[0].to_string();
        let values = schema.column_names().zip(row).collect();

        Some(Self { id, values })
    }

    /// The primary key.
    pub fn id(&self) -> &str {
        &self.id
    }

    #[cfg(test)]
    fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Values in the column order of `schema`.
    pub fn ordered<'a>(
        &'a self,
        schema: &'a TableSchema,
    ) -> impl Iterator<Item = (&'static str, &'a Value)> + 'a {
        schema
            .column_names()
            .filter_map(move |name| self.values.get(name).map(|v| (name, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CITY, SCHOOL};
    use crate::value::text_row;

    fn row(cells: &[&str]) -> Vec<Value> {
        text_row(cells.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_bind_maps_names() {
        let record =
            Record::bind(&SCHOOL, row(&["school:1", "СУ Вазов", "city:1"])).unwrap();
        assert_eq!(record.id(), "school:1");
        assert_eq!(record.get("name"), Some(&Value::from("СУ Вазов")));
        assert_eq!(record.get("city_id"), Some(&Value::from("city:1")));
        assert_eq!(record.get("label"), None);
    }

    #[test]
    fn test_bind_rejects_wrong_length() {
        assert!(Record::bind(&CITY, row(&["city:1"])).is_none());
        assert!(Record::bind(&CITY, row(&["city:1", "София", "extra"])).is_none());
        assert!(Record::bind(&CITY, Vec::new()).is_none());
    }

    #[test]
    fn test_ordered_follows_schema() {
        let record = Record::bind(&SCHOOL, row(&["school:1", "Name", "city:1"])).unwrap();
        let names: Vec<_> = record.ordered(&SCHOOL).map(|(n, _)| n).collect();
        assert_eq!(names, vec!["id", "name", "city_id"]);
    }
}
