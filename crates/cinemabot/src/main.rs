use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use cinemabot_core::CinemaError;

mod app;
mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real env vars win over it
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cinemabot=info,cinemabot_telegram=info,cinemabot_kinopoisk=info,cinemabot_history=info"
                    .into()
            }),
        )
        .init();

    let cli = cli::Cli::parse();

    // config: --config > CINEMABOT_CONFIG > ./cinemabot.toml, then env overrides
    let mut config = cinemabot_core::CinemabotConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.database {
        config.database.path = path;
    }
    // no credentials, no bot
    if let Err(e) = config.validate() {
        error!(code = e.code(), "{e}");
        return Err(e.into());
    }

    let db_path = config.database.path.clone();
    if let Err(e) = ensure_parent_dir(&db_path) {
        error!(code = e.code(), path = %db_path, "{e}");
        return Err(e.into());
    }
    info!(path = %db_path, "opening SQLite database");
    let history = cinemabot_history::HistoryStore::open(&db_path)?;
    info!("search history schema ready");

    // one HTTP client for every Kinopoisk call during the process lifetime
    let http = reqwest::Client::builder()
        .user_agent(concat!("cinemabot/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let telegram = config.telegram.clone();
    let state = Arc::new(app::AppState::new(config, http, history));

    let adapter = cinemabot_telegram::TelegramAdapter::new(&telegram, Arc::clone(&state));
    info!("CinemaBot started");
    adapter.run().await;

    // dispatcher has exited: release the HTTP client and the database
    drop(state);
    info!("CinemaBot stopped");
    Ok(())
}

/// Create the directory holding the database file, if it has one.
fn ensure_parent_dir(path: &str) -> Result<(), CinemaError> {
    match std::path::Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(std::fs::create_dir_all(parent)?),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_database_dir() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("data/nested/cinema_bot.db");
        ensure_parent_dir(db.to_str().unwrap()).unwrap();
        assert!(dir.path().join("data/nested").is_dir());
        assert!(ensure_parent_dir("cinema_bot.db").is_ok());
    }

    #[test]
    fn blocked_database_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, b"").unwrap();
        let db = file.join("cinema_bot.db");

        let err = ensure_parent_dir(db.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CinemaError::Io(_)), "{err:?}");
        assert_eq!(err.code(), "IO_ERROR");
    }
}
