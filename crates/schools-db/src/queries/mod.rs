//! Database query implementations.

pub mod records;
pub mod tables;
