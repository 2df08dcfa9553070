//! Slash commands: /start, /help, /dailyverse, /books, /read, /stop.

use std::sync::Arc;

use async_trait::async_trait;
use bible_corpus::{resolve, Corpus, SamplingMode};
use bot_core::{Bot, Chat, Handler, HandlerError, HandlerResponse, Message, Result};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::command::Command;
use crate::format::{format_daily_verse, format_verse};
use crate::messages;
use crate::navigation::{MenuRenderer, Position};
use crate::subscribers::SubscriberSet;

pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    renderer: Arc<MenuRenderer>,
    subscribers: Arc<SubscriberSet>,
    bot_username: Arc<RwLock<Option<String>>>,
    sampling: SamplingMode,
}

impl CommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        renderer: Arc<MenuRenderer>,
        subscribers: Arc<SubscriberSet>,
        bot_username: Arc<RwLock<Option<String>>>,
        sampling: SamplingMode,
    ) -> Self {
        Self {
            bot,
            renderer,
            subscribers,
            bot_username,
            sampling,
        }
    }

    fn corpus(&self) -> &Corpus {
        self.renderer.corpus()
    }

    fn random_daily_text(&self, welcome: bool) -> String {
        let mut rng = rand::thread_rng();
        let verse = self.corpus().random_verse(self.sampling, &mut rng);
        if welcome {
            messages::welcome_message(&verse)
        } else {
            format_daily_verse(&verse)
        }
    }

    async fn send_books_menu(&self, chat: &Chat, text: Option<&str>) -> Result<String> {
        let menu = self
            .renderer
            .render(&Position::root())
            .map_err(|e| HandlerError::State(e.to_string()))?;
        let text = text.map(str::to_string).unwrap_or(menu.text);
        self.bot.send_menu(chat, &text, &menu.buttons).await?;
        Ok(text)
    }

    async fn execute(&self, command: &Command, chat: &Chat) -> Result<String> {
        let reply = match command {
            Command::Start => {
                self.subscribers.subscribe(chat.id).await;
                self.random_daily_text(true)
            }
            Command::Help => messages::help_message(),
            Command::DailyVerse => {
                let newly_subscribed = self.subscribers.subscribe(chat.id).await;
                messages::daily_verse_reply(&self.random_daily_text(false), newly_subscribed)
            }
            Command::Stop => {
                if self.subscribers.unsubscribe(chat.id).await {
                    messages::UNSUBSCRIBED.to_string()
                } else {
                    messages::NOT_SUBSCRIBED.to_string()
                }
            }
            Command::Books => return self.send_books_menu(chat, None).await,
            Command::Read(None) => {
                return self
                    .send_books_menu(chat, Some(messages::READ_PROMPT))
                    .await
            }
            Command::Read(Some(reference)) => match resolve(self.corpus(), reference) {
                Ok(verse) => format_verse(&verse),
                Err(e) => {
                    info!(chat_id = chat.id, reference = %reference, error = %e, "Reference lookup failed");
                    messages::resolve_error_message(&e)
                }
            },
        };
        self.bot.send_message(chat, &reply).await?;
        Ok(reply)
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let command = {
            let username = self.bot_username.read().await;
            Command::parse(&message.content, username.as_deref())
        };
        let Some(command) = command else {
            return Ok(HandlerResponse::Continue);
        };

        info!(
            chat_id = message.chat.id,
            user_id = message.user.id,
            command = command.name(),
            "step: handling command"
        );
        let reply = self.execute(&command, &message.chat).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
