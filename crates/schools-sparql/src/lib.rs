//! # Schools SPARQL
//!
//! Read-only access to the schools knowledge graph: sends SELECT queries to
//! a SPARQL endpoint and decodes the CSV results into rows of strings with
//! resource URIs shortened to `type:id` tokens.

pub mod client;
pub mod uri;

use async_trait::async_trait;

pub use client::{SparqlClient, SparqlError, SparqlResult};
pub use uri::shorten_uri;

/// A raw result row, one cell per selected variable.
pub type Row = Vec<String>;

/// Anything that can answer a SPARQL SELECT query with rows.
#[async_trait]
pub trait QuerySource: Send + Sync {
    async fn query(&self, sparql: &str) -> SparqlResult<Vec<Row>>;
}

#[async_trait]
impl QuerySource for SparqlClient {
    async fn query(&self, sparql: &str) -> SparqlResult<Vec<Row>> {
        SparqlClient::query(self, sparql).await
    }
}
