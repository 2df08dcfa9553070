//! In-memory [`Bot`] for integration tests: records every outbound call and can fail chosen chats.

#![allow(dead_code)]

use async_trait::async_trait;
use bot_core::{Bot, BotError, ButtonGrid, Callback, Chat, Message, Result, User};
use chrono::Utc;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, Once};
use tracing_subscriber::EnvFilter;

use bible_bot::{BibleBot, BibleConfig};
use bible_corpus::Corpus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Text {
        chat_id: i64,
        text: String,
    },
    Menu {
        chat_id: i64,
        text: String,
        buttons: ButtonGrid,
    },
    Edit {
        chat_id: i64,
        message_id: String,
        text: String,
        buttons: ButtonGrid,
    },
}

impl Outgoing {
    pub fn text(&self) -> &str {
        match self {
            Outgoing::Text { text, .. } | Outgoing::Menu { text, .. } | Outgoing::Edit { text, .. } => {
                text
            }
        }
    }

    pub fn buttons(&self) -> Option<&ButtonGrid> {
        match self {
            Outgoing::Text { .. } => None,
            Outgoing::Menu { buttons, .. } | Outgoing::Edit { buttons, .. } => Some(buttons),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// Bot blocked / chat gone.
    Unreachable,
    /// Anything else (network, rate limit).
    Transient,
}

#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<Outgoing>>,
    failures: Mutex<HashMap<i64, Failure>>,
    fail_edits: Mutex<bool>,
}

impl RecordingBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_chat(&self, chat_id: i64, failure: Failure) {
        self.failures.lock().unwrap().insert(chat_id, failure);
    }

    pub fn fail_edits(&self) {
        *self.fail_edits.lock().unwrap() = true;
    }

    pub fn sent(&self) -> Vec<Outgoing> {
        self.sent.lock().unwrap().clone()
    }

    pub fn take(&self) -> Vec<Outgoing> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }

    pub fn last(&self) -> Option<Outgoing> {
        self.sent.lock().unwrap().last().cloned()
    }

    fn check(&self, chat: &Chat) -> Result<()> {
        match self.failures.lock().unwrap().get(&chat.id) {
            Some(Failure::Unreachable) => Err(BotError::RecipientUnreachable(format!(
                "bot was blocked by chat {}",
                chat.id
            ))),
            Some(Failure::Transient) => Err(BotError::Bot("network timeout".to_string())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.check(chat)?;
        self.sent.lock().unwrap().push(Outgoing::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, buttons: &ButtonGrid) -> Result<()> {
        self.check(chat)?;
        self.sent.lock().unwrap().push(Outgoing::Menu {
            chat_id: chat.id,
            text: text.to_string(),
            buttons: buttons.clone(),
        });
        Ok(())
    }

    async fn edit_menu(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        buttons: &ButtonGrid,
    ) -> Result<()> {
        self.check(chat)?;
        if *self.fail_edits.lock().unwrap() {
            return Err(BotError::Bot("message can't be edited".to_string()));
        }
        self.sent.lock().unwrap().push(Outgoing::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
            buttons: buttons.clone(),
        });
        Ok(())
    }
}

pub const CHAT_ID: i64 = 4242;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/bible.json")
}

pub fn fixture_corpus() -> Arc<Corpus> {
    Arc::new(Corpus::load(&fixture_path()).expect("fixture corpus loads"))
}

static TRACING_INIT: Once = Once::new();

/// Test logging; `RUST_LOG` controls the level (default `warn`).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

/// BibleBot over the fixture corpus with default layout, plus the recorder behind it.
pub fn test_bot() -> (BibleBot, Arc<RecordingBot>) {
    init_tracing();
    let recorder = RecordingBot::new();
    let bot = BibleBot::new(&BibleConfig::default(), fixture_corpus(), recorder.clone());
    (bot, recorder)
}

fn user() -> User {
    User {
        id: 7,
        username: Some("reader".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

fn chat() -> Chat {
    Chat {
        id: CHAT_ID,
        chat_type: "private".to_string(),
    }
}

pub fn text_message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: user(),
        chat: chat(),
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

pub fn click(token: &str) -> Callback {
    Callback {
        user: user(),
        chat: chat(),
        message_id: Some("99".to_string()),
        data: Some(token.to_string()),
    }
}
