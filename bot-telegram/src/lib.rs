//! # bot-telegram
//!
//! Telegram transport layer: adapters, [`bot_core::Bot`] implementation with inline keyboards,
//! teloxide client construction, and the dispatcher runner. Handles only Telegram connectivity and
//! handler-chain execution; no Bible or navigation logic.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, classify_request_error, to_inline_keyboard, TelegramBotAdapter};
pub use runner::run_dispatcher;
