//! Logs each message and button click; never claims anything.

use async_trait::async_trait;
use bot_core::{Callback, CallbackAnswer, Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }

    #[instrument(skip(self, callback))]
    async fn handle_callback(&self, callback: &Callback) -> Result<Option<CallbackAnswer>> {
        info!(
            user_id = callback.user.id,
            chat_id = callback.chat.id,
            token = %callback.data.as_deref().unwrap_or(""),
            "Received button click"
        );
        Ok(None)
    }
}
