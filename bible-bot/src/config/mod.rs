//! Bot configuration: BaseConfig (Telegram + log) + BibleConfig (corpus, menus, daily broadcast).

mod base;
mod bible;
mod bot_config;
mod schedule;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bible::{data_path_from_env, BibleConfig, DEFAULT_DATA_PATH, MAX_PAGE_SIZE};
pub use bot_config::BotConfig;
pub use schedule::{DailySchedule, ScheduleParseError};
