//! Relational table schemas.
//!
//! Every table is keyed by its first column, a string id derived from a
//! graph URI. Column order matches the order of the variables selected by
//! the corresponding SPARQL query.

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Date,
    Real,
    Integer,
}

/// A declared table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
}

impl Column {
    const fn required(name: &'static str, ty: ColumnType) -> Self {
        Self { name, ty, nullable: false }
    }

    const fn optional(name: &'static str, ty: ColumnType) -> Self {
        Self { name, ty, nullable: true }
    }
}

/// A table with its ordered columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    /// Name of the primary key column (always the first column).
    pub fn primary_key(&self) -> &'static str {
        self.columns[0].name
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// Columns other than the primary key.
    pub fn value_columns(&self) -> &'static [Column] {
        &self.columns[1..]
    }
}

pub const CITY: TableSchema = TableSchema {
    name: "city",
    columns: &[
        Column::required("id", ColumnType::Text),
        Column::required("label", ColumnType::Text),
    ],
};

pub const SCHOOL: TableSchema = TableSchema {
    name: "school",
    columns: &[
        Column::required("id", ColumnType::Text),
        Column::required("name", ColumnType::Text),
        Column::required("city_id", ColumnType::Text),
    ],
};

pub const DZI: TableSchema = TableSchema {
    name: "dzi",
    columns: &[
        Column::required("id", ColumnType::Text),
        Column::required("date", ColumnType::Date),
        Column::required("name", ColumnType::Text),
        Column::optional("comment", ColumnType::Text),
    ],
};

pub const SCORE: TableSchema = TableSchema {
    name: "score",
    columns: &[
        Column::required("id", ColumnType::Text),
        Column::required("dzi_id", ColumnType::Text),
        Column::required("school_id", ColumnType::Text),
        Column::required("subject_id", ColumnType::Text),
        Column::optional("score", ColumnType::Real),
        Column::optional("grade", ColumnType::Real),
        Column::optional("grade_level", ColumnType::Integer),
        Column::optional("quantity_people", ColumnType::Integer),
    ],
};

/// All tables in parent-first order.
pub const ALL_TABLES: [TableSchema; 4] = [CITY, SCHOOL, DZI, SCORE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_keys() {
        for table in ALL_TABLES {
            assert_eq!(table.primary_key(), "id");
        }
    }

    #[test]
    fn test_column_counts() {
        assert_eq!(CITY.column_count(), 2);
        assert_eq!(SCHOOL.column_count(), 3);
        assert_eq!(DZI.column_count(), 4);
        assert_eq!(SCORE.column_count(), 8);
    }

    #[test]
    fn test_value_columns() {
        let names: Vec<_> = SCHOOL.value_columns().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["name", "city_id"]);
        assert!(DZI.columns[3].nullable);
        assert!(!DZI.columns[1].nullable);
    }
}
