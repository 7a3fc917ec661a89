//! Typed cell values.

use std::fmt;

use chrono::NaiveDate;

/// A single typed cell of an imported row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Date(NaiveDate),
    Real(f64),
    Integer(i64),
    Null,
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Real(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Null => Ok(()),
        }
    }
}

/// Wrap a raw query row as text cells.
pub fn text_row(row: Vec<String>) -> Vec<Value> {
    row.into_iter().map(Value::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let date = NaiveDate::from_ymd_opt(2021, 5, 20).unwrap();
        assert_eq!(Value::Date(date).to_string(), "2021-05-20");
        assert_eq!(Value::Real(78.5).to_string(), "78.5");
        assert_eq!(Value::Integer(12).to_string(), "12");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from("city:1").to_string(), "city:1");
    }

    #[test]
    fn test_text_row() {
        let row = text_row(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(row, vec![Value::from("a"), Value::from("b")]);
    }
}
