use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_PATH: &str = "cinemabot.toml";
pub const DEFAULT_DB_PATH: &str = "cinema_bot.db";
pub const DEFAULT_KINOPOISK_BASE_URL: &str = "https://kinopoiskapiunofficial.tech";
pub const DEFAULT_VIEWING_SITE: &str = "https://www.ggpoisk.ru";

/// Top-level config (cinemabot.toml + CINEMABOT_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CinemabotConfig {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub kinopoisk: KinopoiskConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token issued by @BotFather. Required.
    #[serde(default)]
    pub bot_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinopoiskConfig {
    /// Key for kinopoiskapiunofficial.tech, sent as `X-API-KEY`. Required.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Site the caption links to: `{viewing_site}/film/{id}/`.
    #[serde(default = "default_viewing_site")]
    pub viewing_site: String,
}

impl Default for KinopoiskConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            viewing_site: default_viewing_site(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_KINOPOISK_BASE_URL.to_string()
}
fn default_viewing_site() -> String {
    DEFAULT_VIEWING_SITE.to_string()
}
fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

impl CinemabotConfig {
    /// Load config from a TOML file with env var overrides.
    ///
    /// Later sources win:
    ///   1. Explicit path argument, else `./cinemabot.toml` (missing file is fine)
    ///   2. `CINEMABOT_*` vars, `__` between nesting levels
    ///      (e.g. `CINEMABOT_KINOPOISK__API_KEY`)
    ///   3. Plain `BOT_TOKEN` / `KINOPOISK_API_KEY`
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
        if std::path::Path::new(path).exists() {
            debug!(path, "loading config file");
        } else {
            debug!(path, "config file not found, using defaults and env");
        }

        let config: CinemabotConfig = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("CINEMABOT_").split("__"))
            .merge(Env::raw().only(&["BOT_TOKEN"]).map(|_| "telegram.bot_token".into()))
            .merge(Env::raw().only(&["KINOPOISK_API_KEY"]).map(|_| "kinopoisk.api_key".into()))
            .extract()
            .map_err(|e| crate::error::CinemaError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Both credentials are mandatory; the bot must not start without them.
    pub fn validate(&self) -> crate::error::Result<()> {
        let mut missing = Vec::new();
        if self.telegram.bot_token.trim().is_empty() {
            missing.push("telegram.bot_token (BOT_TOKEN)");
        }
        if self.kinopoisk.api_key.trim().is_empty() {
            missing.push("kinopoisk.api_key (KINOPOISK_API_KEY)");
        }
        if missing.is_empty() {
            debug!(
                base_url = %self.kinopoisk.base_url,
                database = %self.database.path,
                "config validated"
            );
            Ok(())
        } else {
            warn!(?missing, "required credentials are not set");
            Err(crate::error::CinemaError::Config(format!(
                "missing required setting(s): {}",
                missing.join(", ")
            )))
        }
    }
}
