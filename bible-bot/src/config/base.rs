//! Base config: Telegram Bot connection and logging. Loaded from env.

use anyhow::{Context, Result};
use std::env;

const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .context("BOT_TOKEN not set (set it in the environment or pass --token)")?,
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/bible-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Validate config (token present, telegram_api_url a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        let token = self.bot_token.trim();
        if token.is_empty() || token == TOKEN_PLACEHOLDER {
            anyhow::bail!("BOT_TOKEN is empty or still the placeholder; set a real bot token");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
