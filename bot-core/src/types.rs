//! Core types: user, chat, message, button callback, keyboard, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Placeholder for updates without a sender (e.g. channel posts).
    pub fn unknown() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    /// Chat known only by id (e.g. a subscriber stored as a bare chat id).
    pub fn from_id(id: i64) -> Self {
        Self {
            id,
            chat_type: "unknown".to_string(),
        }
    }
}

/// A single inbound text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A button click: the opaque token carried by the button plus where the click came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Callback {
    pub user: User,
    pub chat: Chat,
    /// Id of the message carrying the keyboard; `None` when the transport no longer exposes it (too old).
    pub message_id: Option<String>,
    /// Callback token; `None` for buttons without data.
    pub data: Option<String>,
}

/// Acknowledgement shown to the user for a button click (toast or alert).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackAnswer {
    pub text: Option<String>,
    pub show_alert: bool,
}

impl CallbackAnswer {
    /// Acknowledge silently.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Short toast notification.
    pub fn toast(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            show_alert: false,
        }
    }

    /// Modal alert the user must dismiss.
    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            show_alert: true,
        }
    }
}

/// One labelled button carrying a callback token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub token: String,
}

impl Button {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Rows of buttons attached to a message (transport maps it to its own keyboard type).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonGrid {
    pub rows: Vec<Vec<Button>>,
}

impl ButtonGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row; empty rows are dropped so callers can push conditionally built rows.
    pub fn push_row(&mut self, row: Vec<Button>) {
        if !row.is_empty() {
            self.rows.push(row);
        }
    }

    /// Iterates all buttons row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Finds the first button with the given label.
    pub fn find(&self, label: &str) -> Option<&Button> {
        self.buttons().find(|b| b.label == label)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Stop the chain and attach the reply text that was sent.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Converts a transport-specific button click to core [`Callback`].
pub trait ToCoreCallback: Send + Sync {
    fn to_core(&self) -> Callback;
}

/// Single handler concept: optional before / handle / after for messages, plus button callbacks.
/// Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
    /// Processes a button click. `Some(answer)` claims the callback; `None` passes it to the next handler.
    async fn handle_callback(
        &self,
        _callback: &Callback,
    ) -> crate::error::Result<Option<CallbackAnswer>> {
        Ok(None)
    }
}
