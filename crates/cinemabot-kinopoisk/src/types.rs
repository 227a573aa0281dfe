//! Wire types for the two Kinopoisk endpoints we call.
//!
//! Only the fields the bot displays are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;

/// A JSON scalar that the API sends as either a string or a number,
/// depending on the endpoint (`"2010"` in search results, `2010` in details).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// Display form, or `None` when the value counts as missing
    /// (empty or blank text, numeric zero).
    pub fn present(&self) -> Option<String> {
        match self {
            Scalar::Number(n) if n.as_f64() == Some(0.0) => None,
            Scalar::Number(n) => Some(n.to_string()),
            Scalar::Text(s) if s.trim().is_empty() => None,
            Scalar::Text(s) => Some(s.clone()),
        }
    }
}

/// `GET /api/v2.1/films/search-by-keyword`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub films: Option<Vec<FilmSearchItem>>,
}

impl SearchResponse {
    /// Films in the provider's relevance order; absent or `null` means none.
    pub fn into_films(self) -> Vec<FilmSearchItem> {
        self.films.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmSearchItem {
    pub film_id: i64,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub poster_url_preview: Option<String>,
    #[serde(default)]
    pub year: Option<Scalar>,
    #[serde(default)]
    pub rating: Option<Scalar>,
    #[serde(default)]
    pub film_length: Option<Scalar>,
    #[serde(default)]
    pub countries: Option<Vec<Country>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub country: Option<String>,
}

/// `GET /api/v2.1/films/{id}` - the secondary source for rating, year and length.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDetail {
    #[serde(default)]
    pub rating_kinopoisk: Option<Scalar>,
    #[serde(default)]
    pub year: Option<Scalar>,
    #[serde(default)]
    pub film_length: Option<Scalar>,
}
