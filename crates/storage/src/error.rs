//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Could not acquire a pooled connection.
    #[error("connection pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQL execution failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}
