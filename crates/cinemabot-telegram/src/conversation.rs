//! Transport-free command handling: a [`Command`] in, replies out.
//!
//! The teloxide handler only parses the message and ships the replies, so
//! every user-visible behavior lives here and runs in tests without Telegram.

use tracing::{debug, info, warn};

use cinemabot_history::{DEFAULT_HISTORY_LIMIT, DEFAULT_STATS_LIMIT};

use crate::command::Command;
use crate::context::BotContext;
use crate::error::TelegramError;
use crate::reply::{self, Reply};

/// Run one command for `user_id` and return the messages to send, in order.
///
/// Storage failures on the read commands propagate; a failed write after a
/// successful lookup is logged and the film card is still returned.
pub async fn respond<C: BotContext + ?Sized>(
    ctx: &C,
    user_id: i64,
    command: Command,
) -> Result<Vec<Reply>, TelegramError> {
    debug!(user_id, ?command, "dispatching command");

    match command {
        Command::Help => Ok(vec![Reply::text(reply::HELP_TEXT)]),

        Command::History => {
            let records = ctx.history().recent_searches(user_id, DEFAULT_HISTORY_LIMIT)?;
            Ok(vec![Reply::Text(reply::render_history(&records))])
        }

        Command::Stats => {
            let entries = ctx.history().top_stats(user_id, DEFAULT_STATS_LIMIT)?;
            Ok(vec![Reply::Text(reply::render_stats(&entries))])
        }

        Command::Clear => {
            ctx.history().clear(user_id)?;
            info!(user_id, "history cleared");
            Ok(vec![Reply::text(reply::CLEARED)])
        }

        Command::Search(query) => Ok(search(ctx, user_id, &query).await),
    }
}

async fn search<C: BotContext + ?Sized>(ctx: &C, user_id: i64, query: &str) -> Vec<Reply> {
    let film = match ctx.films().search_film(query).await {
        Ok(film) => film,
        Err(e) if e.is_not_found() => {
            debug!(user_id, query, "nothing found");
            return vec![Reply::text(reply::NOTHING_FOUND)];
        }
        Err(e) => {
            warn!(user_id, query, error = %e, "film lookup failed");
            return vec![Reply::text(reply::SERVICE_UNAVAILABLE)];
        }
    };

    let total = match ctx.history().record_search(user_id, query) {
        Ok(total) => Some(total),
        Err(e) => {
            warn!(user_id, query, error = %e, "failed to record search");
            None
        }
    };

    let mut replies = vec![reply::film_reply(&film, ctx.viewing_site())];
    if total == Some(reply::ACHIEVEMENT_THRESHOLD) {
        info!(user_id, "achievement unlocked");
        replies.push(Reply::text(reply::ACHIEVEMENT));
    }
    replies
}
