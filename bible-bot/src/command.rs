//! Slash-command parsing.

/// Commands the bot answers. Anything else gets no reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    DailyVerse,
    Books,
    /// `/read` with its trimmed argument, if any.
    Read(Option<String>),
    Stop,
}

impl Command {
    /// Parses `/name[@bot] [args]`. Returns `None` for plain text, unknown commands, and commands
    /// addressed to a different bot. `bot_username` is compared case-insensitively; when it is not
    /// known yet, any `@target` is accepted.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let text = text.trim_start();
        let rest = text.strip_prefix('/')?;
        let (head, args) = match rest.find(char::is_whitespace) {
            Some(idx) => (&rest[..idx], rest[idx..].trim()),
            None => (rest, ""),
        };
        let (name, target) = match head.split_once('@') {
            Some((name, target)) => (name, Some(target)),
            None => (head, None),
        };
        if let (Some(target), Some(me)) = (target, bot_username) {
            if !target.eq_ignore_ascii_case(me.trim_start_matches('@')) {
                return None;
            }
        }

        let command = match name.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "dailyverse" => Command::DailyVerse,
            "books" => Command::Books,
            "read" => Command::Read((!args.is_empty()).then(|| args.to_string())),
            "stop" => Command::Stop,
            _ => return None,
        };
        Some(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::DailyVerse => "dailyverse",
            Command::Books => "books",
            Command::Read(_) => "read",
            Command::Stop => "stop",
        }
    }
}
