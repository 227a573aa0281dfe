//! Telegram channel adapter.
//!
//! Wraps a teloxide `Bot` + `Dispatcher` and drives the long-polling event loop
//! until Ctrl-C.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::info;

use cinemabot_core::config::TelegramConfig;

use crate::context::BotContext;
use crate::handler::handle_message;

/// Telegram channel adapter.
///
/// Long polling, so no public URL is required.
pub struct TelegramAdapter<C: BotContext + 'static> {
    ctx: Arc<C>,
    config: TelegramConfig,
}

impl<C: BotContext + 'static> TelegramAdapter<C> {
    pub fn new(config: &TelegramConfig, ctx: Arc<C>) -> Self {
        Self {
            ctx,
            config: config.clone(),
        }
    }

    /// Connect to Telegram and drive the long-polling loop.
    ///
    /// Returns once the dispatcher has shut down (Ctrl-C).
    pub async fn run(self) {
        let bot = Bot::new(&self.config.bot_token);

        info!("Telegram: starting long-polling dispatcher");

        let handler = Update::filter_message().endpoint(handle_message::<C>);

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![self.ctx])
            .default_handler(|_upd| async {})
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Telegram: dispatcher stopped");
    }
}
