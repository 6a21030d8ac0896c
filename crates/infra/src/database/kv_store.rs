//! SQLite-backed implementation of the key-value persistence port.

use std::sync::Arc;

use async_trait::async_trait;
use cobrix_core::KeyValueStore;
use cobrix_domain::{CobrixError, Result};
use rusqlite::{params, OptionalExtension};

use super::manager::{map_sql_error, DbManager};

/// Key-value store persisted in the `kv_entries` table.
///
/// All database work runs on the blocking thread pool; connections come
/// from the shared [`DbManager`] pool.
pub struct SqliteKeyValueStore {
    db: Arc<DbManager>,
}

impl SqliteKeyValueStore {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    async fn run_blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&rusqlite::Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let conn = db.get_connection()?;
            op(&conn).map_err(map_sql_error)
        })
        .await
        .map_err(|err| CobrixError::Internal(format!("blocking task failed: {err}")))?
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_owned();
        self.run_blocking(move |conn| {
            conn.query_row("SELECT value FROM kv_entries WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let key = key.to_owned();
        let value = value.to_owned();
        self.run_blocking(move |conn| {
            conn.execute(
                "INSERT INTO kv_entries (key, value, updated_at)
                 VALUES (?1, ?2, CAST(strftime('%s','now') AS INTEGER))
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value],
            )
            .map(|_| ())
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_owned();
        self.run_blocking(move |conn| {
            conn.execute("DELETE FROM kv_entries WHERE key = ?1", params![key]).map(|_| ())
        })
        .await
    }

    async fn clear_prefix(&self, prefix: &str) -> Result<()> {
        // Range delete on the ordered primary key, no LIKE escaping needed.
        let lower = prefix.to_owned();
        let upper = format!("{prefix}\u{10FFFF}");
        self.run_blocking(move |conn| {
            conn.execute(
                "DELETE FROM kv_entries WHERE key >= ?1 AND key < ?2",
                params![lower, upper],
            )
            .map(|_| ())
        })
        .await
    }
}
