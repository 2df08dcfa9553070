//! Application config: corpus location, menu layout, random sampling and the daily broadcast.

use anyhow::{Context, Result};
use bible_corpus::SamplingMode;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::DailySchedule;
use crate::navigation::MenuLayout;

pub const DEFAULT_DATA_PATH: &str = "data/bible.json";
pub const DEFAULT_DAILY_VERSE_TIME: &str = "0 8 * * *";
/// Upper bound for any menu page size; keeps keyboards well inside Telegram's button limit.
pub const MAX_PAGE_SIZE: usize = 48;

#[derive(Debug, Clone)]
pub struct BibleConfig {
    /// BIBLE_DATA_PATH
    pub data_path: PathBuf,
    /// DAILY_VERSE_ENABLED
    pub daily_verse_enabled: bool,
    /// DAILY_VERSE_TIME (UTC)
    pub daily_verse_time: DailySchedule,
    /// VERSE_SAMPLING
    pub sampling: SamplingMode,
    /// BOOKS_PER_PAGE, CHAPTERS_PER_PAGE, VERSES_PER_PAGE
    pub layout: MenuLayout,
}

impl Default for BibleConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            daily_verse_enabled: true,
            daily_verse_time: DailySchedule::new(8, 0),
            sampling: SamplingMode::default(),
            layout: MenuLayout::default(),
        }
    }
}

impl BibleConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = MenuLayout::default();
        let layout = MenuLayout {
            books_per_page: env_or("BOOKS_PER_PAGE", defaults.books_per_page)?,
            chapters_per_page: env_or("CHAPTERS_PER_PAGE", defaults.chapters_per_page)?,
            verses_per_page: env_or("VERSES_PER_PAGE", defaults.verses_per_page)?,
            ..defaults
        };

        Ok(Self {
            data_path: data_path_from_env(),
            daily_verse_enabled: env_or("DAILY_VERSE_ENABLED", true)?,
            daily_verse_time: env_or(
                "DAILY_VERSE_TIME",
                DEFAULT_DAILY_VERSE_TIME.parse::<DailySchedule>()?,
            )?,
            sampling: env_or("VERSE_SAMPLING", SamplingMode::default())?,
            layout,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("BOOKS_PER_PAGE", self.layout.books_per_page),
            ("CHAPTERS_PER_PAGE", self.layout.chapters_per_page),
            ("VERSES_PER_PAGE", self.layout.verses_per_page),
        ];
        for (key, size) in sizes {
            if size == 0 || size > MAX_PAGE_SIZE {
                anyhow::bail!("{} must be between 1 and {}, got {}", key, MAX_PAGE_SIZE, size);
            }
        }
        Ok(())
    }
}

/// BIBLE_DATA_PATH, or the default location.
pub fn data_path_from_env() -> PathBuf {
    env::var("BIBLE_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| anyhow::anyhow!("{}", e))
            .with_context(|| format!("invalid {}={:?}", key, raw)),
        _ => Ok(default),
    }
}
