//! Importer configuration.
//!
//! Resolved from built-in defaults, an optional TOML file and `SCHOOLS_*`
//! environment variables, in increasing order of precedence. Command-line
//! flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{SchoolsError, SchoolsResult};

/// Default SPARQL endpoint of the schools knowledge graph.
pub const DEFAULT_ENDPOINT: &str = "https://schools.ontotext.com/data/repositories/schools";

/// Prefix shared by every resource URI in the knowledge graph.
pub const DEFAULT_URI_PREFIX: &str = "https://schools.ontotext.com/data/resource/";

/// Default SQLite database location.
pub const DEFAULT_DATABASE: &str = "data/data.sqlite";

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "schools.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub sparql: SparqlConfig,
    pub database: DatabaseConfig,
}

/// Configuration of the SPARQL query client.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SparqlConfig {
    pub endpoint: String,
    pub uri_prefix: String,
    pub timeout_secs: u64,
}

impl Default for SparqlConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            uri_prefix: DEFAULT_URI_PREFIX.to_string(),
            timeout_secs: 120,
        }
    }
}

/// Location of the relational store.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `schools.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> SchoolsResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> SchoolsResult<Self> {
        debug!(path = %path.display(), "Reading config file");
        let text = std::fs::read_to_string(path).map_err(|e| {
            SchoolsError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> SchoolsResult<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config)
    }

    /// Override fields from `SCHOOLS_ENDPOINT`, `SCHOOLS_URI_PREFIX` and
    /// `SCHOOLS_DATABASE` as returned by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("SCHOOLS_ENDPOINT") {
            self.sparql.endpoint = endpoint;
        }
        if let Some(prefix) = lookup("SCHOOLS_URI_PREFIX") {
            self.sparql.uri_prefix = prefix;
        }
        if let Some(path) = lookup("SCHOOLS_DATABASE") {
            self.database.path = PathBuf::from(path);
        }
    }
}
