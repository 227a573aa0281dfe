use rusqlite::{Connection, Result};

/// Initialise the search log tables. Safe to call on every startup (idempotent).
pub fn init_db(conn: &Connection) -> Result<()> {
    create_searches_table(conn)?;
    create_stats_table(conn)?;
    Ok(())
}

/// Append-only log: one row per successful film query.
fn create_searches_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS searches (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id  INTEGER NOT NULL,
            query    TEXT NOT NULL,
            ts       TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
        CREATE INDEX IF NOT EXISTS idx_searches_user
            ON searches(user_id, ts DESC);",
    )
}

/// Running counter per (user, query text). Kept in step with `searches`.
fn create_stats_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS stats (
            user_id  INTEGER NOT NULL,
            query    TEXT NOT NULL,
            count    INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY(user_id, query)
        );",
    )
}
