//! Imported entity kinds.

use std::fmt;
use std::str::FromStr;

use crate::schema::{self, TableSchema};

/// An entity type imported from the knowledge graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    City,
    School,
    /// Exam session.
    Dzi,
    Score,
}

impl EntityKind {
    /// Import order: parents before the tables that reference them.
    pub const ORDER: [EntityKind; 4] = [Self::City, Self::School, Self::Dzi, Self::Score];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::School => "school",
            Self::Dzi => "dzi",
            Self::Score => "score",
        }
    }

    pub fn schema(&self) -> &'static TableSchema {
        match self {
            Self::City => &schema::CITY,
            Self::School => &schema::SCHOOL,
            Self::Dzi => &schema::DZI,
            Self::Score => &schema::SCORE,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "city" | "cities" => Ok(Self::City),
            "school" | "schools" => Ok(Self::School),
            "dzi" | "exam" | "exam_session" => Ok(Self::Dzi),
            "score" | "scores" => Ok(Self::Score),
            other => Err(format!(
                "unknown entity '{}' (expected city, school, dzi or score)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("city".parse::<EntityKind>(), Ok(EntityKind::City));
        assert_eq!("Schools".parse::<EntityKind>(), Ok(EntityKind::School));
        assert_eq!("exam".parse::<EntityKind>(), Ok(EntityKind::Dzi));
        assert!("region".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_order_matches_schemas() {
        let names: Vec<_> = EntityKind::ORDER.iter().map(|e| e.schema().name).collect();
        assert_eq!(names, vec!["city", "school", "dzi", "score"]);
    }
}
