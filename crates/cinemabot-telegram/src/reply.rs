//! Reply rendering. Everything here is HTML for `ParseMode::Html`; any text
//! that came from a user or the provider goes through `html::escape`.

use teloxide::utils::html::escape;

use cinemabot_core::truncate::{truncate_with_ellipsis, ELLIPSIS};
use cinemabot_history::{SearchRecord, StatEntry};
use cinemabot_kinopoisk::FilmSummary;

/// Telegram rejects photo captions longer than this.
pub const MAX_CAPTION_CHARS: usize = 1024;

/// Lifetime search count that unlocks the achievement.
pub const ACHIEVEMENT_THRESHOLD: u64 = 5;

pub const HELP_TEXT: &str = "<b>🎬 Welcome to CinemaBot!</b>\n\n\
    🔎 Just send me a film title and I will find it for you.\n\n\
    <b>Other commands:</b>\n\
    <b>/help</b> — show this help\n\
    <b>/history</b> — your last 10 searches\n\
    <b>/stats</b> — your most frequent searches\n\
    <b>/clear</b> — wipe your search history\n\n\
    Enjoy the show! 🍿";
pub const NO_HISTORY: &str = "You have no search history yet.";
pub const NO_STATS: &str = "No search statistics for you yet.";
pub const CLEARED: &str = "History and statistics cleared.";
pub const SERVICE_UNAVAILABLE: &str =
    "The Kinopoisk service is unavailable, please try again later.";
pub const NOTHING_FOUND: &str = "Sorry, nothing was found for your query.";
pub const ACHIEVEMENT: &str = "Achievement unlocked: 🎖 Cinephile";

/// One outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// HTML text message.
    Text(String),
    /// Photo by URL with an HTML caption.
    Photo { url: String, caption: String },
}

impl Reply {
    pub fn text(s: impl Into<String>) -> Self {
        Reply::Text(s.into())
    }

    /// The HTML body: the text itself or the photo caption.
    pub fn body(&self) -> &str {
        match self {
            Reply::Text(text) => text,
            Reply::Photo { caption, .. } => caption,
        }
    }
}

/// `<ts> — <i>query</i>` lines, newest first.
pub fn render_history(records: &[SearchRecord]) -> String {
    if records.is_empty() {
        return NO_HISTORY.to_string();
    }
    let lines: Vec<String> = records
        .iter()
        .map(|r| {
            format!(
                "{} — <i>{}</i>",
                r.ts.format("%Y-%m-%d %H:%M:%S"),
                escape(&r.query)
            )
        })
        .collect();
    format!("<b>Your recent searches:</b>\n{}", lines.join("\n"))
}

/// `<i>query</i>: N times` lines, most frequent first.
pub fn render_stats(entries: &[StatEntry]) -> String {
    if entries.is_empty() {
        return NO_STATS.to_string();
    }
    let lines: Vec<String> = entries
        .iter()
        .map(|e| format!("<i>{}</i>: {} times", escape(&e.query), e.count))
        .collect();
    format!("<b>Your top 5 searches:</b>\n{}", lines.join("\n"))
}

/// `{site}/film/{id}/`
pub fn viewing_url(site: &str, film_id: i64) -> String {
    format!("{}/film/{}/", site.trim_end_matches('/'), film_id)
}

/// A card field that may be cut to make the caption fit.
struct Shrinkable<'a> {
    text: &'a str,
    keep: usize,
}

impl<'a> Shrinkable<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            keep: text.chars().count(),
        }
    }

    /// Escaped for HTML after the cut, so entities stay whole.
    fn html(&self) -> String {
        escape(&truncate_with_ellipsis(self.text, self.keep, self.keep))
    }

    /// Drop `over` more characters (plus room for the marker). `false` once
    /// nothing is left to drop.
    fn shrink(&mut self, over: usize) -> bool {
        if self.keep == 0 {
            return false;
        }
        self.keep = self.keep.saturating_sub(over + ELLIPSIS.len());
        true
    }
}

/// Film card caption, at most [`MAX_CAPTION_CHARS`] characters.
///
/// Overflow is taken from the description, then the title, then the
/// countries, on the raw text before escaping; markup is never cut.
pub fn render_caption(film: &FilmSummary, viewing_site: &str) -> String {
    let url = viewing_url(viewing_site, film.film_id);
    let mut description = Shrinkable::new(&film.description);
    let mut title = Shrinkable::new(&film.title);
    let mut countries = Shrinkable::new(&film.countries);

    loop {
        let caption = format!(
            "<b>🎬 Title:</b> {title} ({year}, {countries})\n\
             <b>⭐ Rating:</b> {rating}\n\
             <b>Duration:</b> {duration}\n\n\
             <b>Description:</b>\n{description}\n\n\
             <a href=\"{url}\">Watch on ggpoisk</a>",
            title = title.html(),
            year = escape(&film.year),
            countries = countries.html(),
            rating = escape(&film.rating),
            duration = escape(&film.duration),
            description = description.html(),
        );
        let over = caption.chars().count().saturating_sub(MAX_CAPTION_CHARS);
        if over == 0 || !(description.shrink(over) || title.shrink(over) || countries.shrink(over))
        {
            return caption;
        }
    }
}

/// Photo card when the provider had a poster, plain text otherwise.
pub fn film_reply(film: &FilmSummary, viewing_site: &str) -> Reply {
    let caption = render_caption(film, viewing_site);
    match &film.poster_url {
        Some(url) => Reply::Photo {
            url: url.clone(),
            caption,
        },
        None => Reply::Text(caption),
    }
}

/// Drop tags and decode the entities `escape` produces. Used when Telegram
/// refuses our HTML and the message is re-sent as plain text.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
