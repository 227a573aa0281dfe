use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One logged occurrence of a user's query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: i64,
    pub user_id: i64,
    pub query: String,
    /// UTC, second resolution (SQLite `CURRENT_TIMESTAMP`).
    pub ts: NaiveDateTime,
}

/// How many times a user issued one exact query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub user_id: i64,
    pub query: String,
    pub count: u32,
}
