//! SQLite connection handle.
//!
//! The importer is sequential, so a single connection behind a mutex is
//! enough. Callers borrow it through closures.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use thiserror::Error;
use tracing::{debug, info};

/// Database error types.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Failed to create database directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database connection lock poisoned")]
    Lock,
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Shared handle to the importer database.
#[derive(Clone)]
pub struct DbPool {
    conn: Arc<Mutex<Connection>>,
}

impl DbPool {
    /// Open the database file, creating parent directories as needed.
    pub fn open(path: &Path) -> DbResult<Self> {
        info!(path = %path.display(), "Opening SQLite database");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Self::from_connection(Connection::open(path)?)
    }

    /// Create an in-memory database for testing.
    pub fn in_memory() -> DbResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> DbResult<Self> {
        // School and score rows reference their parents; let SQLite enforce it.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        debug!("Foreign key enforcement enabled");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> DbResult<T>
    where
        F: FnOnce(&Connection) -> DbResult<T>,
    {
        let conn = self.conn.lock().map_err(|_| DbError::Lock)?;
        f(&conn)
    }

    /// Execute a closure with mutable access to the connection.
    pub fn with_conn_mut<F, T>(&self, f: F) -> DbResult<T>
    where
        F: FnOnce(&mut Connection) -> DbResult<T>,
    {
        let mut conn = self.conn.lock().map_err(|_| DbError::Lock)?;
        f(&mut conn)
    }
}
