//! Config tests.

use crate::config::{BotConfig, DailySchedule};
use bible_corpus::SamplingMode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "BIBLE_DATA_PATH",
    "DAILY_VERSE_TIME",
    "DAILY_VERSE_ENABLED",
    "VERSE_SAMPLING",
    "BOOKS_PER_PAGE",
    "CHAPTERS_PER_PAGE",
    "VERSES_PER_PAGE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), "logs/bible-bot.log");
    let bible = config.bible();
    assert_eq!(bible.data_path, PathBuf::from("data/bible.json"));
    assert!(bible.daily_verse_enabled);
    assert_eq!(bible.daily_verse_time, DailySchedule::new(8, 0));
    assert_eq!(bible.sampling, SamplingMode::PerLevel);
    assert_eq!(bible.layout.books_per_page, 6);
    assert_eq!(bible.layout.chapters_per_page, 12);
    assert_eq!(bible.layout.verses_per_page, 12);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("LOG_FILE", "/tmp/bible.log");
    env::set_var("BIBLE_DATA_PATH", "/srv/kjv.json");
    env::set_var("DAILY_VERSE_TIME", "06:45");
    env::set_var("DAILY_VERSE_ENABLED", "false");
    env::set_var("VERSE_SAMPLING", "flat");
    env::set_var("BOOKS_PER_PAGE", "8");
    env::set_var("VERSES_PER_PAGE", "20");
    env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");

    let config = BotConfig::load(None).unwrap();
    clear_env();

    assert_eq!(config.bot_token(), "custom_token");
    assert_eq!(config.log_file(), "/tmp/bible.log");
    assert_eq!(config.telegram_api_url(), Some("http://127.0.0.1:8081"));
    let bible = config.bible();
    assert_eq!(bible.data_path, PathBuf::from("/srv/kjv.json"));
    assert!(!bible.daily_verse_enabled);
    assert_eq!(bible.daily_verse_time, DailySchedule::new(6, 45));
    assert_eq!(bible.sampling, SamplingMode::Flat);
    assert_eq!(bible.layout.books_per_page, 8);
    assert_eq!(bible.layout.chapters_per_page, 12);
    assert_eq!(bible.layout.verses_per_page, 20);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_token_argument_overrides_env() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");
    let config = BotConfig::load(Some("cli_token".to_string())).unwrap();
    clear_env();
    assert_eq!(config.bot_token(), "cli_token");
}

#[test]
#[serial]
fn test_missing_token_is_an_error() {
    clear_env();
    assert!(BotConfig::load(None).is_err());
}

#[test]
#[serial]
fn test_placeholder_or_blank_token_fails_validation() {
    clear_env();
    for token in ["YOUR_BOT_TOKEN_HERE", "   "] {
        let config = BotConfig::load(Some(token.to_string())).unwrap();
        assert!(config.validate().is_err(), "{token:?} accepted");
    }
}

#[test]
#[serial]
fn test_invalid_api_url_fails_validation() {
    clear_env();
    env::set_var("TELEGRAM_API_URL", "not a url");
    let config = BotConfig::load(Some("t".to_string())).unwrap();
    clear_env();
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_malformed_values_are_load_errors() {
    let cases = [
        ("DAILY_VERSE_TIME", "every day"),
        ("VERSE_SAMPLING", "weighted"),
        ("BOOKS_PER_PAGE", "six"),
        ("DAILY_VERSE_ENABLED", "maybe"),
    ];
    for (key, value) in cases {
        clear_env();
        env::set_var(key, value);
        let result = BotConfig::load(Some("t".to_string()));
        clear_env();
        assert!(result.is_err(), "{key}={value} accepted");
    }
}

#[test]
#[serial]
fn test_page_size_bounds() {
    for (value, ok) in [("0", false), ("1", true), ("48", true), ("49", false)] {
        clear_env();
        env::set_var("CHAPTERS_PER_PAGE", value);
        let config = BotConfig::load(Some("t".to_string())).unwrap();
        clear_env();
        assert_eq!(config.validate().is_ok(), ok, "CHAPTERS_PER_PAGE={value}");
    }
}
