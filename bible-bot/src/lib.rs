//! # Bible bot application
//!
//! Telegram front-end over a Bible corpus: random daily verses, button navigation through books,
//! chapters and verses, and `/read Book C:V` lookups. Wires bible-corpus, handler-chain and
//! bot-telegram; loads config from env and runs the dispatcher plus the daily broadcast.

pub mod broadcast;
pub mod cli;
pub mod command;
pub mod components;
pub mod config;
pub mod format;
pub mod handlers;
pub mod messages;
pub mod navigation;
pub mod runner;
pub mod subscribers;

pub use broadcast::{BroadcastReport, DailyBroadcaster, MAX_CONCURRENT_SENDS};
pub use cli::{load_config, Cli, Commands};
pub use command::Command;
pub use components::{build_bot_components, build_handler_chain, load_corpus, BotComponents};
pub use config::{BaseConfig, BibleConfig, BotConfig, DailySchedule};
pub use handlers::{CommandHandler, LoggingHandler, NavigationHandler};
pub use navigation::{decode, encode, Menu, MenuLayout, MenuRenderer, NavAction, Position};
pub use runner::{run_bot, BibleBot};
pub use subscribers::SubscriberSet;
