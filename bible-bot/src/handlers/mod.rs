//! Handler implementations: request logging, slash commands, button navigation.

mod command_handler;
mod logging;
mod navigation_handler;

pub use command_handler::CommandHandler;
pub use logging::LoggingHandler;
pub use navigation_handler::NavigationHandler;
