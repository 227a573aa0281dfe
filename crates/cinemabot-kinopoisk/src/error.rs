use thiserror::Error;

/// Why a film lookup produced no summary.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The provider answered but the film list was empty.
    #[error("no films matched the query")]
    NotFound,

    /// The search endpoint returned a non-success status.
    #[error("film service unavailable (HTTP {status})")]
    Unavailable { status: u16 },

    /// The request never got a response (connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The search body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}
