//! CLI parser, config loading and the offline corpus commands.

use anyhow::Result;
use bible_corpus::{resolve, Corpus, SamplingMode};
use clap::{Parser, Subcommand};
use rand::Rng;
use std::path::PathBuf;

use crate::config::{data_path_from_env, BotConfig};
use crate::format::format_verse;
use crate::messages::resolve_error_message;

#[derive(Parser, Debug)]
#[command(name = "bible-bot")]
#[command(about = "Telegram Bible bot: run the bot, or look verses up offline", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print one verse, e.g. `bible-bot read John 3:16`.
    Read {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
        /// Corpus file (default: BIBLE_DATA_PATH or data/bible.json).
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Print random verses.
    Random {
        #[arg(short, long, default_value = "1")]
        count: usize,
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// `per-level` or `flat`.
        #[arg(short, long, default_value = "per-level")]
        sampling: SamplingMode,
    },
    /// List the books with their chapter counts.
    Books {
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// `--data`, else BIBLE_DATA_PATH, else the default path.
pub fn corpus_path(data: Option<PathBuf>) -> PathBuf {
    data.unwrap_or_else(data_path_from_env)
}

/// The verse text for a reference, or the same explanation the bot would reply with.
pub fn read_reference(corpus: &Corpus, reference: &str) -> std::result::Result<String, String> {
    resolve(corpus, reference)
        .map(|verse| format_verse(&verse))
        .map_err(|e| resolve_error_message(&e))
}

pub fn random_verses<R: Rng + ?Sized>(
    corpus: &Corpus,
    sampling: SamplingMode,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    (0..count)
        .map(|_| format_verse(&corpus.random_verse(sampling, &mut *rng)))
        .collect()
}

/// One line per book: `<id>. <name> (<n> chapters)`.
pub fn book_list(corpus: &Corpus) -> String {
    corpus
        .all_books()
        .iter()
        .map(|book| {
            format!(
                "{}. {} ({} chapters)",
                book.id(),
                book.name(),
                book.chapter_count()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
