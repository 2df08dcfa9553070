//! # Handler chain
//!
//! Runs a sequence of handlers for each inbound event. For text messages: every `before` in order
//! (any `false` stops the chain), then `handle` until the first Stop or Reply, then every `after`
//! in reverse order. For button callbacks: `handle_callback` in order until a handler claims it.

use bot_core::{Callback, CallbackAnswer, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered list of handlers shared by the message and callback paths.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Reply ends the handle phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs before, handle and after phases for one message. Returns the first Stop or Reply, or Continue.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            if !handler.before(message).await? {
                info!(
                    user_id = message.user.id,
                    handler = %handler_name,
                    "step: handler before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        "step: handler chain stopped by handler"
                    );
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue => continue,
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &final_response).await?;
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }

    /// Offers a button callback to each handler in order; the first `Some` answer wins.
    /// Returns `None` when no handler claimed it.
    #[instrument(skip(self, callback))]
    pub async fn handle_callback(&self, callback: &Callback) -> Result<Option<CallbackAnswer>> {
        info!(
            user_id = callback.user.id,
            chat_id = callback.chat.id,
            data = ?callback.data,
            "step: callback chain started"
        );

        for handler in &self.handlers {
            if let Some(answer) = handler.handle_callback(callback).await? {
                debug!(
                    handler = %std::any::type_name_of_val(handler.as_ref()),
                    answer = ?answer,
                    "Callback claimed"
                );
                return Ok(Some(answer));
            }
        }

        debug!(chat_id = callback.chat.id, "Callback not claimed by any handler");
        Ok(None)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
