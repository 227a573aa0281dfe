//! Telegram message handler registered in the teloxide Dispatcher.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::warn;

use crate::command::Command;
use crate::context::BotContext;
use crate::conversation;
use crate::send;
use crate::typing::TypingIndicator;

/// Main message handler registered in the teloxide Dispatcher.
///
/// Runs for every incoming `Message`:
/// 1. Bot-message filter
/// 2. Text extraction (media without text is ignored)
/// 3. Command routing
/// 4. Typing indicator while a film search runs
/// 5. Replies sent in order
pub async fn handle_message<C: BotContext + 'static>(
    bot: Bot,
    msg: Message,
    ctx: Arc<C>,
) -> ResponseResult<()> {
    // 1. Ignore messages from other bots and anonymous senders.
    let Some(from) = msg.from.as_ref() else {
        return Ok(());
    };
    if from.is_bot {
        return Ok(());
    }
    let user_id = from.id.0 as i64;

    // 2. Text only.
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // 3. Route.
    let Some(command) = Command::parse(text) else {
        return Ok(());
    };

    // 4. Typing indicator for the slow path.
    let typing = command
        .is_search()
        .then(|| TypingIndicator::start(bot.clone(), msg.chat.id));

    let result = conversation::respond(ctx.as_ref(), user_id, command).await;
    drop(typing);

    // 5. Ship replies.
    match result {
        Ok(replies) => {
            for reply in &replies {
                send::send_reply(&bot, msg.chat.id, reply).await;
            }
        }
        Err(e) => {
            warn!(user_id, error = %e, "Telegram: command failed");
        }
    }

    Ok(())
}
