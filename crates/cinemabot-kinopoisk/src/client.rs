use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use cinemabot_core::config::KinopoiskConfig;

use crate::error::LookupError;
use crate::lookup::FilmLookup;
use crate::summary::FilmSummary;
use crate::types::{FilmDetail, SearchResponse};

const SEARCH_PATH: &str = "/api/v2.1/films/search-by-keyword";
const DETAIL_PATH: &str = "/api/v2.1/films";
const API_KEY_HEADER: &str = "X-API-KEY";

/// HTTP client for kinopoiskapiunofficial.tech.
///
/// Holds a clone of the process-wide `reqwest::Client`, so every lookup
/// reuses the same connection pool.
pub struct KinopoiskClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl KinopoiskClient {
    pub fn new(client: reqwest::Client, config: &KinopoiskConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Keyword search, first page only.
    async fn search(&self, query: &str) -> Result<SearchResponse, LookupError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        debug!(query, "searching Kinopoisk");

        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .query(&[("keyword", query), ("page", "1")])
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            warn!(status, query, "Kinopoisk search failed");
            return Err(LookupError::Unavailable { status });
        }

        resp.json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }

    /// Detail record for one film. Any failure yields an empty record: the
    /// search hit alone is enough to answer.
    async fn detail(&self, film_id: i64) -> FilmDetail {
        let url = format!("{}{}/{}", self.base_url, DETAIL_PATH, film_id);

        let resp = match self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(film_id, error = %e, "Kinopoisk detail request failed");
                return FilmDetail::default();
            }
        };

        if !resp.status().is_success() {
            warn!(film_id, status = resp.status().as_u16(), "Kinopoisk detail returned error status");
            return FilmDetail::default();
        }

        match resp.json().await {
            Ok(detail) => detail,
            Err(e) => {
                warn!(film_id, error = %e, "Kinopoisk detail body could not be decoded");
                FilmDetail::default()
            }
        }
    }
}

#[async_trait]
impl FilmLookup for KinopoiskClient {
    async fn search_film(&self, query: &str) -> Result<FilmSummary, LookupError> {
        let films = self.search(query).await?.into_films();
        // The API ranks by relevance; only the top hit is shown.
        let Some(film) = films.into_iter().next() else {
            debug!(query, "no films found");
            return Err(LookupError::NotFound);
        };

        let detail = self.detail(film.film_id).await;
        Ok(FilmSummary::resolve(&film, &detail))
    }
}
