//! Film lookup against kinopoiskapiunofficial.tech.
//!
//! One keyword search, then one detail fetch for the top hit; the two
//! payloads are merged into a display-ready [`FilmSummary`].

pub mod client;
pub mod error;
pub mod lookup;
pub mod summary;
pub mod types;

pub use client::KinopoiskClient;
pub use error::LookupError;
pub use lookup::FilmLookup;
pub use summary::FilmSummary;
