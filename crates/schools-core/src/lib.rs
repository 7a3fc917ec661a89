//! Schools Core Library
//!
//! Typed values, table schemas, records and configuration shared by the
//! importer crates.

pub mod config;
pub mod entity;
pub mod error;
pub mod record;
pub mod schema;
pub mod value;

pub use config::{Config, DatabaseConfig, SparqlConfig};
pub use entity::EntityKind;
pub use error::{SchoolsError, SchoolsResult};
pub use record::Record;
pub use schema::{Column, ColumnType, TableSchema};
pub use value::Value;
