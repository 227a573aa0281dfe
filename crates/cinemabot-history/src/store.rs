use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use tracing::{debug, instrument};

use crate::error::{HistoryError, Result};
use crate::types::{SearchRecord, StatEntry};

/// Rows shown by `/history`.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
/// Rows shown by `/stats`.
pub const DEFAULT_STATS_LIMIT: usize = 5;

/// Per-user search log and query-frequency counters.
///
/// Wraps a single SQLite connection in a `Mutex`. The bot is one process
/// with short statements, so a pool would buy nothing.
pub struct HistoryStore {
    db: Mutex<Connection>,
}

impl HistoryStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::new(conn)
    }

    /// Wrap an already-open connection, creating the tables if absent.
    pub fn new(conn: Connection) -> Result<Self> {
        crate::db::init_db(&conn)?;
        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// Re-run the idempotent schema setup.
    pub fn ensure_schema(&self) -> Result<()> {
        let db = self.lock()?;
        crate::db::init_db(&db)?;
        Ok(())
    }

    /// Log one query and bump its counter. Returns the user's lifetime
    /// number of logged searches.
    ///
    /// Insert, upsert and count share one transaction so `stats` never
    /// drifts from `searches`.
    #[instrument(skip(self))]
    pub fn record_search(&self, user_id: i64, query: &str) -> Result<u64> {
        let mut db = self.lock()?;
        let tx = db.transaction()?;
        tx.execute(
            "INSERT INTO searches (user_id, query) VALUES (?1, ?2)",
            rusqlite::params![user_id, query],
        )?;
        tx.execute(
            "INSERT INTO stats (user_id, query, count)
             VALUES (?1, ?2, 1)
             ON CONFLICT(user_id, query) DO UPDATE SET count = count + 1",
            rusqlite::params![user_id, query],
        )?;
        let total: i64 = tx.query_row(
            "SELECT COUNT(*) FROM searches WHERE user_id = ?1",
            rusqlite::params![user_id],
            |row| row.get(0),
        )?;
        tx.commit()?;
        debug!(total, "search recorded");
        Ok(total as u64)
    }

    /// Most recent searches first.
    #[instrument(skip(self))]
    pub fn recent_searches(&self, user_id: i64, limit: usize) -> Result<Vec<SearchRecord>> {
        let db = self.lock()?;
        let mut stmt = db.prepare(
            "SELECT id, user_id, query, ts
             FROM searches
             WHERE user_id = ?1
             ORDER BY ts DESC, id DESC
             LIMIT ?2",
        )?;
        let rows = stmt.query_map(rusqlite::params![user_id, limit as i64], |row| {
            Ok(SearchRecord {
                id: row.get(0)?,
                user_id: row.get(1)?,
                query: row.get(2)?,
                ts: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Most frequent queries first; equal counts keep first-seen order.
    #[instrument(skip(self))]
    pub fn top_stats(&self, user_id: i64, limit: usize) -> Result<Vec<StatEntry>> {
        let db = self.lock()?;
        let mut stmt = db.prepare(
            "SELECT user_id, query, count
             FROM stats
             WHERE user_id = ?1
             ORDER BY count DESC, rowid ASC
             LIMIT ?2",
        )?;
        let rows = stmt.query_map(rusqlite::params![user_id, limit as i64], |row| {
            Ok(StatEntry {
                user_id: row.get(0)?,
                query: row.get(1)?,
                count: row.get::<_, i64>(2)? as u32,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Delete every search and counter row of one user.
    #[instrument(skip(self))]
    pub fn clear(&self, user_id: i64) -> Result<()> {
        let mut db = self.lock()?;
        let tx = db.transaction()?;
        let searches = tx.execute(
            "DELETE FROM searches WHERE user_id = ?1",
            rusqlite::params![user_id],
        )?;
        let stats = tx.execute(
            "DELETE FROM stats WHERE user_id = ?1",
            rusqlite::params![user_id],
        )?;
        tx.commit()?;
        debug!(searches, stats, "history cleared");
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.db.lock().map_err(|_| HistoryError::LockPoisoned)
    }
}
