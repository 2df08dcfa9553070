//! Bot abstraction for sending and editing messages.
//!
//! [`Bot`] is transport-agnostic; bot-telegram implements it via teloxide.

use crate::error::{BotError, Result};
use crate::types::{ButtonGrid, Chat};
use async_trait::async_trait;

/// Abstraction for sending and editing messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message with a button grid attached.
    async fn send_menu(&self, chat: &Chat, text: &str, buttons: &ButtonGrid) -> Result<()>;
    /// Replaces text and buttons of an already-sent message. `message_id` is transport-specific (e.g. Telegram numeric string).
    async fn edit_menu(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        buttons: &ButtonGrid,
    ) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edit implementations.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
