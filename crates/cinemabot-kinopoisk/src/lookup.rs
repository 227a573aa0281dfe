use async_trait::async_trait;

use crate::error::LookupError;
use crate::summary::FilmSummary;

/// Anything that can turn a free-text query into a film summary.
///
/// The conversation layer only sees this trait, so tests can swap the HTTP
/// client for a canned implementation.
#[async_trait]
pub trait FilmLookup: Send + Sync {
    async fn search_film(&self, query: &str) -> Result<FilmSummary, LookupError>;
}
