//! Inbound text → command routing.

/// What an inbound text message asks the bot to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start` or `/help`
    Help,
    /// `/history` — last 10 queries
    History,
    /// `/stats` — top 5 queries
    Stats,
    /// `/clear` — wipe history and stats
    Clear,
    /// Anything else: a film title to look up (trimmed).
    Search(String),
}

impl Command {
    /// Route a message.
    ///
    /// The first whitespace-delimited token is matched case-sensitively;
    /// a `/cmd@botname` suffix is ignored, as are any arguments after it.
    /// Unknown slash words are searched like any other text.
    ///
    /// Returns `None` for blank input.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let first = trimmed.split_whitespace().next().unwrap_or_default();
        let name = first.split('@').next().unwrap_or_default();

        let command = match name {
            "/start" | "/help" => Command::Help,
            "/history" => Command::History,
            "/stats" => Command::Stats,
            "/clear" => Command::Clear,
            _ => Command::Search(trimmed.to_string()),
        };
        Some(command)
    }

    pub fn is_search(&self) -> bool {
        matches!(self, Command::Search(_))
    }
}
