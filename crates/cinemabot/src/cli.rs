use clap::Parser;

/// Telegram bot that looks films up on Kinopoisk.
#[derive(Debug, Parser)]
#[command(name = "cinemabot", version, about)]
pub struct Cli {
    /// TOML config file (default: ./cinemabot.toml if present)
    #[arg(long, env = "CINEMABOT_CONFIG")]
    pub config: Option<String>,

    /// SQLite file for search history (overrides database.path)
    #[arg(long)]
    pub database: Option<String>,
}
