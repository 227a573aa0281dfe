//! Context interface the conversation layer runs against.
//!
//! Implemented by `AppState` in the `cinemabot` binary; tests provide their
//! own. Nothing here is global: the dispatcher hands an `Arc` of it to every
//! handler invocation.

use cinemabot_history::HistoryStore;
use cinemabot_kinopoisk::FilmLookup;

pub trait BotContext: Send + Sync {
    fn films(&self) -> &dyn FilmLookup;
    fn history(&self) -> &HistoryStore;

    /// Base URL for the "watch" link, e.g. `https://www.ggpoisk.ru`.
    fn viewing_site(&self) -> &str;
}
