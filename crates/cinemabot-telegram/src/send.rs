//! Message sending helpers for the Telegram adapter.
//!
//! Everything goes out as HTML. If Telegram rejects the markup, the same
//! content is re-sent as plain text; a poster keeps its image.

use teloxide::prelude::*;
use teloxide::types::{InputFile, LinkPreviewOptions, ParseMode};
use tracing::warn;

use crate::reply::{strip_html, Reply};

fn no_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Send one reply to `chat_id`. Failures are logged, never returned: a lost
/// reply must not abort the remaining ones.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) {
    match reply {
        Reply::Text(html) => send_html(bot, chat_id, html).await,
        Reply::Photo { url, caption } => send_photo(bot, chat_id, url, caption).await,
    }
}

/// HTML text with link previews off; plain-text fallback.
pub async fn send_html(bot: &Bot, chat_id: ChatId, html: &str) {
    let sent = bot
        .send_message(chat_id, html)
        .parse_mode(ParseMode::Html)
        .link_preview_options(no_link_preview())
        .await;

    if let Err(e) = sent {
        warn!(error = %e, "Telegram: HTML message rejected, falling back to plain text");
        if let Err(e) = bot
            .send_message(chat_id, strip_html(html))
            .link_preview_options(no_link_preview())
            .await
        {
            warn!(error = %e, "Telegram: failed to send plain-text fallback");
        }
    }
}

/// Poster by URL with an HTML caption. A rejected caption is retried as plain
/// text on the same photo; a bad URL or a failed upload falls back to a text
/// message carrying the caption.
async fn send_photo(bot: &Bot, chat_id: ChatId, url: &str, caption: &str) {
    let parsed = match reqwest::Url::parse(url) {
        Ok(u) => u,
        Err(e) => {
            warn!(url, error = %e, "Telegram: invalid poster URL, sending text only");
            send_html(bot, chat_id, caption).await;
            return;
        }
    };

    let sent = bot
        .send_photo(chat_id, InputFile::url(parsed.clone()))
        .caption(caption)
        .parse_mode(ParseMode::Html)
        .await;

    let Err(e) = sent else {
        return;
    };
    warn!(url, error = %e, "Telegram: HTML photo caption rejected, retrying as plain text");

    let plain = bot
        .send_photo(chat_id, InputFile::url(parsed))
        .caption(strip_html(caption))
        .await;

    if let Err(e) = plain {
        warn!(url, error = %e, "Telegram: send_photo failed, sending text only");
        send_html(bot, chat_id, caption).await;
    }
}
