//! Button clicks: menu navigation (edited in place), single verse and whole-chapter reads.

use std::sync::Arc;

use async_trait::async_trait;
use bible_corpus::{BookId, VerseRef};
use bot_core::{Bot, Callback, CallbackAnswer, Chat, Handler, Result};
use tracing::{debug, info, instrument, warn};

use crate::format::{format_verse, split_chapter, MESSAGE_LIMIT};
use crate::messages;
use crate::navigation::{decode, MenuRenderer, NavAction, Position};

pub struct NavigationHandler {
    bot: Arc<dyn Bot>,
    renderer: Arc<MenuRenderer>,
}

impl NavigationHandler {
    pub fn new(bot: Arc<dyn Bot>, renderer: Arc<MenuRenderer>) -> Self {
        Self { bot, renderer }
    }

    async fn show_menu(&self, callback: &Callback, position: &Position) -> Result<CallbackAnswer> {
        let menu = match self.renderer.render(position) {
            Ok(menu) => menu,
            Err(e) => {
                info!(chat_id = callback.chat.id, error = %e, "Stale menu position");
                return Ok(CallbackAnswer::alert(messages::STALE_ACTION));
            }
        };

        match callback.message_id.as_deref() {
            Some(message_id) => {
                debug!(chat_id = callback.chat.id, message_id = %message_id, "step: editing menu");
                if let Err(e) = self
                    .bot
                    .edit_menu(&callback.chat, message_id, &menu.text, &menu.buttons)
                    .await
                {
                    warn!(error = %e, chat_id = callback.chat.id, "Menu edit failed, sending a new menu");
                    self.bot
                        .send_menu(&callback.chat, &menu.text, &menu.buttons)
                        .await?;
                }
            }
            None => {
                self.bot
                    .send_menu(&callback.chat, &menu.text, &menu.buttons)
                    .await?
            }
        }
        Ok(CallbackAnswer::empty())
    }

    async fn show_verse(
        &self,
        chat: &Chat,
        book: BookId,
        chapter: u32,
        verse: u32,
    ) -> Result<CallbackAnswer> {
        let corpus = self.renderer.corpus();
        let found = corpus.book_by_id(book).and_then(|b| {
            let c = b.chapter(chapter)?;
            let v = c.verse(verse)?;
            Some(VerseRef {
                book: b,
                chapter: c,
                verse: v,
            })
        });
        let Some(verse_ref) = found else {
            return Ok(CallbackAnswer::alert(messages::STALE_ACTION));
        };

        self.bot.send_message(chat, &format_verse(&verse_ref)).await?;
        Ok(CallbackAnswer::toast(messages::VERSE_LOADED))
    }

    async fn read_all(&self, chat: &Chat, book: BookId, chapter: u32) -> Result<CallbackAnswer> {
        let corpus = self.renderer.corpus();
        let Some((b, c)) = corpus
            .book_by_id(book)
            .and_then(|b| b.chapter(chapter).map(|c| (b, c)))
        else {
            return Ok(CallbackAnswer::alert(messages::STALE_ACTION));
        };

        let chunks = split_chapter(b, c, MESSAGE_LIMIT);
        info!(
            chat_id = chat.id,
            book = %b.name(),
            chapter = chapter,
            chunks = chunks.len(),
            "step: sending chapter"
        );
        for chunk in &chunks {
            self.bot.send_message(chat, chunk).await?;
        }
        Ok(CallbackAnswer::toast(messages::CHAPTER_LOADED))
    }
}

#[async_trait]
impl Handler for NavigationHandler {
    #[instrument(skip(self, callback))]
    async fn handle_callback(&self, callback: &Callback) -> Result<Option<CallbackAnswer>> {
        let token = callback.data.as_deref().unwrap_or_default();
        let action = match decode(token) {
            Ok(action) => action,
            Err(e) => {
                info!(chat_id = callback.chat.id, error = %e, "Rejected button token");
                return Ok(Some(CallbackAnswer::alert(messages::STALE_ACTION)));
            }
        };

        let answer = match action {
            NavAction::Menu(position) => self.show_menu(callback, &position).await?,
            NavAction::ShowVerse {
                book,
                chapter,
                verse,
            } => self.show_verse(&callback.chat, book, chapter, verse).await?,
            NavAction::ReadAll { book, chapter } => {
                self.read_all(&callback.chat, book, chapter).await?
            }
        };
        Ok(Some(answer))
    }
}
