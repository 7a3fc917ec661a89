//! # Schools Sync
//!
//! Imports cities, schools, DZI exam sessions and scores from the schools
//! knowledge graph into SQLite.
//!
//! Each entity goes through the same steps: fetch rows, transform them,
//! reconcile against the ids already stored, then insert and update inside
//! one transaction.

pub mod queries;
pub mod reconcile;
pub mod sync;
pub mod transform;

pub use reconcile::{reconcile, Reconciliation};
pub use sync::{
    import_entity, run_full_import, EntityImport, EntityReport, ImportOptions, ImportReport,
};
