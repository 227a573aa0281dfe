//! Character-safe truncation helpers.
//!
//! Telegram and the Kinopoisk payloads are full of Cyrillic text, so every
//! limit here counts Unicode scalar values, never bytes.

/// Marker appended to text that was cut short.
pub const ELLIPSIS: &str = "...";

/// Keep at most `max_chars` characters of `text`.
///
/// Returns the input unchanged when it already fits.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_owned(),
        None => text.to_owned(),
    }
}

/// Keep the first `keep` characters and append [`ELLIPSIS`] when `text` is
/// longer than `limit` characters.
///
/// `keep == limit` grows the result past the limit by the marker (used for
/// descriptions); `keep == limit - ELLIPSIS.len()` keeps the result within the
/// limit (used for captions).
pub fn truncate_with_ellipsis(text: &str, limit: usize, keep: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }
    let mut out = truncate_chars(text, keep);
    out.push_str(ELLIPSIS);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
