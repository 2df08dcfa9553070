//! Dispatcher runner: converts teloxide messages and callback queries to core types and passes them to the
//! [`HandlerChain`]. Calls get_me first to populate `bot_username`.

use anyhow::Result;
use bot_core::{CallbackAnswer, ToCoreCallback, ToCoreMessage};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{error, info, instrument};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

type BotUsername = Arc<tokio::sync::RwLock<Option<String>>>;

/// Starts long polling with the given teloxide Bot and HandlerChain.
///
/// Each update is handled in its own task. Callback queries are always answered (with the handler's
/// [`CallbackAnswer`], or silently when no handler claimed them) so the client stops its spinner.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: BotUsername,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => error!(error = %e, "get_me failed; command @targets will not be checked"),
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    if msg.text().is_none() {
        return Ok(());
    }
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_content = %core_msg.content,
        "Received message"
    );

    tokio::spawn(async move {
        if let Err(e) = chain.handle(&core_msg).await {
            error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
        }
    });

    Ok(())
}

async fn on_callback_query(bot: Bot, q: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    let callback = TelegramCallbackWrapper(&q).to_core();
    info!(
        user_id = callback.user.id,
        chat_id = callback.chat.id,
        data = ?callback.data,
        "Received callback query"
    );

    tokio::spawn(async move {
        let answer = match chain.handle_callback(&callback).await {
            Ok(answer) => answer.unwrap_or_else(CallbackAnswer::empty),
            Err(e) => {
                error!(error = %e, user_id = callback.user.id, "Callback handling failed");
                CallbackAnswer::empty()
            }
        };

        let mut request = bot.answer_callback_query(q.id.clone());
        if let Some(text) = answer.text {
            request = request.text(text);
        }
        if answer.show_alert {
            request = request.show_alert(true);
        }
        if let Err(e) = request.await {
            error!(error = %e, user_id = callback.user.id, "answer_callback_query failed");
        }
    });

    Ok(())
}
