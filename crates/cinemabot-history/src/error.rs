use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("history store lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, HistoryError>;
