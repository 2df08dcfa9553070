//! Component factory: loads the corpus and builds BotComponents and the handler chain. Isolates
//! assembly logic from the runner.

use anyhow::{Context, Result};
use bible_corpus::{Corpus, SamplingMode};
use bot_core::Bot;
use handler_chain::HandlerChain;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::broadcast::DailyBroadcaster;
use crate::config::BibleConfig;
use crate::handlers::{CommandHandler, LoggingHandler, NavigationHandler};
use crate::navigation::MenuRenderer;
use crate::subscribers::SubscriberSet;

/// Shared services used by the handlers and the daily broadcaster.
#[derive(Clone)]
pub struct BotComponents {
    pub corpus: Arc<Corpus>,
    pub renderer: Arc<MenuRenderer>,
    pub subscribers: Arc<SubscriberSet>,
    pub bot: Arc<dyn Bot>,
    /// Filled by the dispatcher from getMe; used to ignore commands addressed to other bots.
    pub bot_username: Arc<RwLock<Option<String>>>,
    pub sampling: SamplingMode,
}

/// Loads and validates the corpus. Any failure here must stop startup.
#[instrument]
pub fn load_corpus(path: &Path) -> Result<Arc<Corpus>> {
    let corpus = Corpus::load(path)
        .with_context(|| format!("failed to load Bible corpus from {}", path.display()))?;
    Ok(Arc::new(corpus))
}

/// Builds BotComponents around an already loaded corpus and an outbound [`Bot`].
pub fn build_bot_components(
    config: &BibleConfig,
    corpus: Arc<Corpus>,
    bot: Arc<dyn Bot>,
) -> BotComponents {
    let renderer = Arc::new(MenuRenderer::new(corpus.clone(), config.layout));
    BotComponents {
        corpus,
        renderer,
        subscribers: Arc::new(SubscriberSet::new()),
        bot,
        bot_username: Arc::new(RwLock::new(None)),
        sampling: config.sampling,
    }
}

/// Chain order: logging, commands, navigation.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            components.bot.clone(),
            components.renderer.clone(),
            components.subscribers.clone(),
            components.bot_username.clone(),
            components.sampling,
        )))
        .add_handler(Arc::new(NavigationHandler::new(
            components.bot.clone(),
            components.renderer.clone(),
        )))
}

pub fn build_broadcaster(components: &BotComponents) -> DailyBroadcaster {
    DailyBroadcaster::new(
        components.bot.clone(),
        components.corpus.clone(),
        components.subscribers.clone(),
        components.sampling,
    )
}
