use anyhow::Result;
use bible_corpus::Corpus;
use bot_core::{init_tracing, Bot, Callback, CallbackAnswer, HandlerResponse, Message};
use bot_telegram::{build_teloxide_bot, run_dispatcher, TelegramBotAdapter};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::broadcast::DailyBroadcaster;
use super::components::{
    build_bot_components, build_broadcaster, build_handler_chain, load_corpus, BotComponents,
};
use super::config::{BibleConfig, BotConfig};

/// BibleBot: components and handler chain, independent of the transport.
pub struct BibleBot {
    pub components: BotComponents,
    pub handler_chain: HandlerChain,
}

impl BibleBot {
    pub fn new(config: &BibleConfig, corpus: Arc<Corpus>, bot: Arc<dyn Bot>) -> Self {
        let components = build_bot_components(config, corpus, bot);
        let handler_chain = build_handler_chain(&components);
        Self {
            components,
            handler_chain,
        }
    }

    /// Drive handler chain with a core Message (used by integration tests).
    pub async fn handle_core_message(&self, message: &Message) -> HandlerResponse {
        match self.handler_chain.handle(message).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Handler chain failed");
                HandlerResponse::Stop
            }
        }
    }

    /// Drive handler chain with a core Callback; returns what the user would see as the answer.
    pub async fn handle_callback(&self, callback: &Callback) -> Option<CallbackAnswer> {
        match self.handler_chain.handle_callback(callback).await {
            Ok(answer) => answer,
            Err(e) => {
                error!(error = %e, chat_id = callback.chat.id, "Callback handling failed");
                None
            }
        }
    }

    pub fn broadcaster(&self) -> DailyBroadcaster {
        build_broadcaster(&self.components)
    }
}

/// Main entry: validate config, init logging, load corpus (fatal on failure), start the daily
/// broadcast task, then run the dispatcher until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        data_path = %config.bible().data_path.display(),
        daily_verse_enabled = config.bible().daily_verse_enabled,
        daily_verse_time = %config.bible().daily_verse_time,
        "Initializing bot"
    );

    let corpus = load_corpus(&config.bible().data_path)?;
    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url())?;
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let app = BibleBot::new(config.bible(), corpus, adapter);

    if config.bible().daily_verse_enabled {
        let broadcaster = app.broadcaster();
        let schedule = config.bible().daily_verse_time;
        tokio::spawn(async move { broadcaster.run(schedule).await });
        info!(schedule = %schedule, "Daily verse broadcast enabled");
    }

    info!("Bot started successfully");
    run_dispatcher(
        teloxide_bot,
        app.handler_chain.clone(),
        app.components.bot_username.clone(),
    )
    .await?;
    info!("Bot stopped");
    Ok(())
}
