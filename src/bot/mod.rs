//! Telegram-facing layer.
//!
//! Wires the router and the phone pipeline into the bot SDK's long-polling
//! dispatcher. Everything Telegram-specific stays here; the pipeline itself
//! never sees the SDK.

pub mod handlers;
pub mod replies;
pub mod router;
pub mod transport;

pub use router::Command;
pub use transport::{ChatTransport, TelegramTransport};

use crate::config::Config;
use crate::services::PhoneService;
use anyhow::Result;
use handlers::message_handler;
use std::sync::Arc;
use teloxide::{
    dispatching::{Dispatcher, UpdateFilterExt},
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::*,
};
use tracing::{debug, info};

/// Run the bot until SIGINT or SIGTERM.
///
/// Builds the long-polling dispatcher with the phone service and the chat
/// transport as injected dependencies. The ctrl-c handler covers SIGINT; a
/// separate watcher trips the dispatcher's shutdown token on SIGTERM.
pub async fn run_bot(config: &Config, service: Arc<PhoneService>) -> Result<()> {
    let bot = Bot::new(config.telegram_token.clone());
    let transport: Arc<dyn ChatTransport> = Arc::new(TelegramTransport::new(bot.clone()));

    let handler = dptree::entry().branch(Update::filter_message().endpoint(message_handler));

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![service, transport])
        .default_handler(|upd| async move {
            debug!("unhandled update: {:?}", upd);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "error in message handler",
        ))
        .enable_ctrlc_handler()
        .build();

    #[cfg(unix)]
    {
        let token = dispatcher.shutdown_token();
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
                return;
            };
            sigterm.recv().await;
            info!("SIGTERM received, shutting down");
            if let Ok(shutdown) = token.shutdown() {
                shutdown.await;
            }
        });
    }

    info!("bot started, polling for updates");
    dispatcher.dispatch().await;
    info!("dispatcher stopped");

    Ok(())
}
