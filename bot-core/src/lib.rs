//! # bot-core
//!
//! Core types and traits for the chat bot: [`Bot`], [`Handler`], message, callback and keyboard types,
//! and tracing initialization. Transport-agnostic; used by bot-telegram, handler-chain and bible-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Button, ButtonGrid, Callback, CallbackAnswer, Chat, Handler, HandlerResponse, Message,
    ToCoreCallback, ToCoreMessage, ToCoreUser, User,
};
