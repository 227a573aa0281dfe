use cinemabot_core::config::CinemabotConfig;
use cinemabot_history::HistoryStore;
use cinemabot_kinopoisk::{FilmLookup, KinopoiskClient};
use cinemabot_telegram::BotContext;

/// Process-wide state handed to every Telegram handler.
///
/// Built once at startup; owns the single HTTP client (inside the Kinopoisk
/// client) and the history store. Dropping it releases both.
pub struct AppState {
    pub config: CinemabotConfig,
    pub films: KinopoiskClient,
    pub history: HistoryStore,
}

impl AppState {
    pub fn new(config: CinemabotConfig, http: reqwest::Client, history: HistoryStore) -> Self {
        let films = KinopoiskClient::new(http, &config.kinopoisk);
        Self {
            config,
            films,
            history,
        }
    }
}

impl BotContext for AppState {
    fn films(&self) -> &dyn FilmLookup {
        &self.films
    }

    fn history(&self) -> &HistoryStore {
        &self.history
    }

    fn viewing_site(&self) -> &str {
        &self.config.kinopoisk.viewing_site
    }
}
