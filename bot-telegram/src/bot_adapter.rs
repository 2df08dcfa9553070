//! Wraps teloxide::Bot and implements [`bot_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use bot_core::{parse_message_id, Bot as CoreBot, BotError, ButtonGrid, Chat, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId},
    ApiError, RequestError,
};
use tracing::{debug, error};

/// Thin wrapper around teloxide::Bot that implements bot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Builds a teloxide Bot; when `api_url` is set, requests go to that Bot API server instead of the default.
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> anyhow::Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str).map_err(|e| {
                error!(error = %e, url = %url_str, "Invalid Telegram API URL");
                anyhow::anyhow!("Invalid Telegram API URL {}: {}", url_str, e)
            })?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Maps a [`ButtonGrid`] to Telegram's inline keyboard (one callback button per core button).
pub fn to_inline_keyboard(buttons: &ButtonGrid) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(buttons.rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.token.clone()))
            .collect::<Vec<_>>()
    }))
}

/// Classifies a teloxide error: permanent recipient loss becomes [`BotError::RecipientUnreachable`],
/// everything else [`BotError::Bot`].
pub fn classify_request_error(e: RequestError) -> BotError {
    match &e {
        RequestError::Api(
            ApiError::BotBlocked
            | ApiError::BotKicked
            | ApiError::BotKickedFromSupergroup
            | ApiError::BotKickedFromChannel
            | ApiError::CantInitiateConversation
            | ApiError::UserDeactivated
            | ApiError::ChatNotFound,
        ) => BotError::RecipientUnreachable(e.to_string()),
        _ => BotError::Bot(e.to_string()),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(classify_request_error)?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, buttons: &ButtonGrid) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(to_inline_keyboard(buttons))
            .await
            .map_err(classify_request_error)?;
        Ok(())
    }

    async fn edit_menu(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        buttons: &ButtonGrid,
    ) -> Result<()> {
        let id = parse_message_id(message_id)?;
        let result = self
            .bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text.to_string())
            .reply_markup(to_inline_keyboard(buttons))
            .await;
        match result {
            Ok(_) => Ok(()),
            // Re-selecting the menu already on screen.
            Err(RequestError::Api(ApiError::MessageNotModified)) => {
                debug!(chat_id = chat.id, message_id = %message_id, "Menu unchanged, edit skipped");
                Ok(())
            }
            Err(e) => Err(classify_request_error(e)),
        }
    }
}
