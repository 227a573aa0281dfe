//! Fallback resolution: one search hit + its detail record → [`FilmSummary`].

use serde::Serialize;

use cinemabot_core::truncate::{truncate_chars, truncate_with_ellipsis};

use crate::types::{FilmDetail, FilmSearchItem, Scalar};

/// Shown for any field neither payload provides.
pub const PLACEHOLDER: &str = "—";
/// Description placeholder is a plain hyphen.
pub const DESCRIPTION_PLACEHOLDER: &str = "-";
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_COUNTRIES_CHARS: usize = 100;

/// Display-ready film data. Every text field is already resolved and cut to size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmSummary {
    pub film_id: i64,
    pub title: String,
    pub year: String,
    pub rating: String,
    pub description: String,
    pub duration: String,
    pub countries: String,
    pub poster_url: Option<String>,
}

impl FilmSummary {
    /// Merge a search hit with its detail record.
    ///
    /// | field       | first choice          | then                 |
    /// |-------------|-----------------------|----------------------|
    /// | title       | `nameRu`              | `nameEn`             |
    /// | rating      | detail `ratingKinopoisk` | search `rating`   |
    /// | year        | search `year`         | detail `year`        |
    /// | description | `description`         | `shortDescription`   |
    /// | duration    | search `filmLength`   | detail `filmLength`  |
    /// | countries   | joined country names  |                      |
    pub fn resolve(film: &FilmSearchItem, detail: &FilmDetail) -> Self {
        let title = first_present([text(&film.name_ru), text(&film.name_en)]);
        let rating = first_present([scalar(&detail.rating_kinopoisk), scalar(&film.rating)]);
        let year = first_present([scalar(&film.year), scalar(&detail.year)]);
        let duration = first_present([scalar(&film.film_length), scalar(&detail.film_length)]);
        let description = first_present([text(&film.description), text(&film.short_description)])
            .map(|d| truncate_with_ellipsis(&d, MAX_DESCRIPTION_CHARS, MAX_DESCRIPTION_CHARS))
            .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string());

        let joined = film
            .countries
            .iter()
            .flatten()
            .filter_map(|c| c.country.as_deref())
            .filter(|c| !c.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        let countries = if joined.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            truncate_chars(&joined, MAX_COUNTRIES_CHARS)
        };

        Self {
            film_id: film.film_id,
            title: title.unwrap_or_else(placeholder),
            year: year.unwrap_or_else(placeholder),
            rating: rating.unwrap_or_else(placeholder),
            description,
            duration: duration.unwrap_or_else(placeholder),
            countries,
            poster_url: text(&film.poster_url_preview),
        }
    }
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn scalar(value: &Option<Scalar>) -> Option<String> {
    value.as_ref().and_then(Scalar::present)
}

fn first_present<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates.into_iter().flatten().next()
}
