//! Dispatcher endpoints.

use super::router::{analyze, Command};
use super::{replies, ChatTransport};
use crate::error::TransportResult;
use crate::services::PhoneService;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, warn};

/// Message endpoint for the dispatcher.
///
/// Delivery failures are logged here rather than propagated; a transport
/// error must never take the polling loop down.
pub async fn message_handler(
    msg: Message,
    service: Arc<PhoneService>,
    transport: Arc<dyn ChatTransport>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if let Err(err) = handle_text(transport.as_ref(), &service, msg.chat.id.0, text).await {
        error!("failed to deliver reply to chat {}: {}", msg.chat.id.0, err);
    }

    Ok(())
}

/// Route one inbound text and send at most one reply.
pub async fn handle_text(
    transport: &dyn ChatTransport,
    service: &PhoneService,
    chat_id: i64,
    text: &str,
) -> TransportResult<()> {
    match Command::parse(text) {
        Command::Start => transport.send_text(chat_id, replies::WELCOME).await,
        Command::Help => transport.send_text(chat_id, replies::HELP).await,
        Command::Formats => transport.send_text(chat_id, replies::FORMATS).await,
        Command::Phone(None) => transport.send_text(chat_id, replies::PHONE_USAGE).await,
        Command::Phone(Some(candidate)) | Command::Candidate(candidate) => {
            if let Err(err) = transport.send_typing(chat_id).await {
                warn!("typing indicator failed for chat {}: {}", chat_id, err);
            }

            let reply = analyze(service, candidate);
            transport.send_text(chat_id, &reply).await
        }
        Command::Ignored => Ok(()),
    }
}
