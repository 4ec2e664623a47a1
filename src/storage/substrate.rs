//! Key-value substrate backed by SQLite.
//!
//! The store above assumes only four primitives: get, set, delete and
//! list-keys over string keys and JSON string values, each independently
//! durable. No batch or transactional primitive is assumed.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The substrate rejected a read or write
    #[error("storage failure: {0}")]
    StorageFailure(String),

    /// A stored record could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persistent string-key to JSON-value mapping.
pub trait Substrate {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// All currently stored keys, in unspecified order.
    fn list_keys(&self) -> Result<Vec<String>, StorageError>;
}

/// SQLite-backed substrate: a single `records` table mapping keys to values.
pub struct SqliteSubstrate {
    conn: Connection,
}

impl SqliteSubstrate {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::StorageFailure(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| StorageError::StorageFailure(e.to_string()))?;

        let substrate = Self { conn };
        substrate.initialize()?;

        Ok(substrate)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::StorageFailure(e.to_string()))?;

        let substrate = Self { conn };
        substrate.initialize()?;

        Ok(substrate)
    }

    fn initialize(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS records (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(|e| StorageError::StorageFailure(e.to_string()))?;

        tracing::debug!("record table ready");
        Ok(())
    }
}

impl Substrate for SqliteSubstrate {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.conn
            .query_row(
                "SELECT value FROM records WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StorageError::StorageFailure(e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO records (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(|e| StorageError::StorageFailure(e.to_string()))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM records WHERE key = ?1", params![key])
            .map_err(|e| StorageError::StorageFailure(e.to_string()))?;
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM records")
            .map_err(|e| StorageError::StorageFailure(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StorageError::StorageFailure(e.to_string()))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row.map_err(|e| StorageError::StorageFailure(e.to_string()))?);
        }
        Ok(keys)
    }
}
