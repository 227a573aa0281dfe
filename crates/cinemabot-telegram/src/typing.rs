//! "typing…" status shown while a film lookup is in flight.
//!
//! A Kinopoisk search is two HTTP round trips; the chat action is renewed on a
//! fixed interval so it does not lapse before the card arrives.

use std::time::Duration;

use teloxide::prelude::*;
use teloxide::types::ChatAction;
use tokio::task::JoinHandle;
use tracing::debug;

/// Chat actions lapse after about five seconds.
const RENEW_EVERY: Duration = Duration::from_secs(4);

/// Keeps the chat in the typing state until dropped.
pub struct TypingIndicator {
    task: JoinHandle<()>,
}

impl TypingIndicator {
    pub fn start(bot: Bot, chat_id: ChatId) -> Self {
        let task = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(RENEW_EVERY);
            loop {
                ticks.tick().await;
                if let Err(e) = bot.send_chat_action(chat_id, ChatAction::Typing).await {
                    debug!(error = %e, "typing action not delivered");
                }
            }
        });
        Self { task }
    }
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        self.task.abort();
    }
}
