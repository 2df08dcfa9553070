//! User-facing texts: welcome, help, command confirmations and reference-error replies.

use bible_corpus::{format_number_ranges, ResolveError, VerseRef};

use crate::format::format_verse;

pub const READ_PROMPT: &str = "📖 Choose a book to start reading:";
pub const STALE_ACTION: &str = "⚠️ This action is no longer valid. Use /books to start again.";
pub const VERSE_LOADED: &str = "✅ Verse loaded!";
pub const CHAPTER_LOADED: &str = "✅ Chapter loaded!";
pub const UNSUBSCRIBED: &str =
    "🔕 You will no longer receive the daily verse. Send /dailyverse to subscribe again.";
pub const NOT_SUBSCRIBED: &str =
    "You are not subscribed to the daily verse. Send /dailyverse to subscribe.";

const COMMAND_LIST: &str = "\
/dailyverse - Get a random daily verse
/books - Browse books of the Bible
/read - Start reading the Bible (or /read John 3:16)
/stop - Stop receiving the daily verse
/help - Show this help message";

pub fn welcome_message(verse: &VerseRef<'_>) -> String {
    format!(
        "🙏 Welcome to the Bible Bot! 🙏\n\nHere's your daily verse:\n\n{}\n\n📚 Available Commands:\n{}",
        format_verse(verse),
        COMMAND_LIST
    )
}

pub fn help_message() -> String {
    format!(
        "📖 Bible Bot Help\n\nAvailable Commands:\n/start - Welcome message with daily verse\n{}\n\n\
How to use:\n\
1. Use /books to see all Bible books\n\
2. Click on a book to see its chapters\n\
3. Select a chapter to see verses\n\
4. Click on a verse to read it, or read all verses at once\n\
5. Or look a verse up directly: /read John 3:16\n\n\
May God bless you! 🙏",
        COMMAND_LIST
    )
}

/// Reply for `/dailyverse`: the verse in daily format, plus a note when the chat just subscribed.
pub fn daily_verse_reply(daily: &str, newly_subscribed: bool) -> String {
    if newly_subscribed {
        format!("{daily}\n\n🔔 You'll receive a verse like this every day. Send /stop to unsubscribe.")
    } else {
        daily.to_string()
    }
}

/// Explains a failed `/read <reference>` lookup.
pub fn resolve_error_message(err: &ResolveError) -> String {
    match err {
        ResolveError::MalformedSyntax { input } => format!(
            "❌ I couldn't read \"{input}\" as a reference.\n\nUse the form Book Chapter:Verse, for example /read John 3:16"
        ),
        ResolveError::BookNotFound { name } => format!(
            "❌ Book \"{name}\" not found.\n\nUse /books to see all available books."
        ),
        ResolveError::ChapterNotFound {
            book,
            chapter,
            available,
        } => format!(
            "❌ {book} has no chapter {chapter}.\n\nAvailable chapters: {}",
            format_number_ranges(available)
        ),
        ResolveError::VerseNotFound {
            book,
            chapter,
            verse,
            available,
        } => format!(
            "❌ {book} {chapter} has no verse {verse}.\n\nAvailable verses: {}",
            format_number_ranges(available)
        ),
    }
}
