//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error (bot transport, handler, config, IO).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    /// The recipient can no longer be reached (bot blocked, kicked, user deactivated, chat gone).
    /// Callers delivering scheduled content treat this as a permanent unsubscribe signal.
    #[error("Recipient unreachable: {0}")]
    RecipientUnreachable(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl BotError {
    /// True when the error means the recipient revoked access for good.
    pub fn is_recipient_unreachable(&self) -> bool {
        matches!(self, BotError::RecipientUnreachable(_))
    }
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("State error: {0}")]
    State(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_unreachable_classification() {
        assert!(BotError::RecipientUnreachable("blocked".into()).is_recipient_unreachable());
        assert!(!BotError::Bot("timeout".into()).is_recipient_unreachable());
        assert!(!BotError::from(HandlerError::State("lock".into())).is_recipient_unreachable());
    }

    #[test]
    fn test_handler_error_display() {
        let err: BotError = HandlerError::State("bot username unavailable".into()).into();
        assert_eq!(err.to_string(), "Handler error: State error: bot username unavailable");
    }
}
