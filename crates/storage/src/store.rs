use std::path::Path;

use line_bridge_core::HistoryEntry;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

use crate::StorageError;
use crate::migrations;

/// Type alias for pooled connection
type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Message log over a pooled `SQLite` connection.
#[derive(Clone)]
pub struct Storage {
    pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

impl Storage {
    /// Opens (or creates) the database at `db_path` and brings the schema up
    /// to date. Safe to call repeatedly against the same file.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or a migration fails.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::new(manager)?;
        let storage = Self { pool };

        let conn = get_conn(&storage.pool)?;
        migrations::run_migrations(&conn).map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        Ok(storage)
    }

    /// Appends one message under `user_id`, returning the new row id.
    ///
    /// # Errors
    /// Returns an error only if the underlying store is unavailable.
    pub fn append(&self, user_id: &str, message: &str) -> Result<i64, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO history (user_id, message) VALUES (?1, ?2)",
            params![user_id, message],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Every record for `user_id` in insertion order. Unbounded result size
    /// is an accepted risk at this scale.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn history(&self, user_id: &str) -> Result<Vec<HistoryEntry>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare("SELECT id, user_id, message FROM history WHERE user_id = ?1 ORDER BY id")?;
        let entries = stmt
            .query_map(params![user_id], |row| {
                Ok(HistoryEntry {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    message: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Deletes all records for `user_id`, returning the number removed.
    /// Zero matches is success, not an error.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub fn delete_history(&self, user_id: &str) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        let deleted = conn.execute("DELETE FROM history WHERE user_id = ?1", params![user_id])?;
        Ok(deleted)
    }
}
