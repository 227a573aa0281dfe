pub mod db;
pub mod error;
pub mod store;
pub mod types;

pub use error::HistoryError;
pub use store::{HistoryStore, DEFAULT_HISTORY_LIMIT, DEFAULT_STATS_LIMIT};
pub use types::{SearchRecord, StatEntry};
