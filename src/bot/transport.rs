//! Chat transport seam.

use crate::error::{TransportError, TransportResult};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatAction, ChatId},
};

/// Capability interface over the bot SDK's outbound side.
///
/// Handlers talk to the chat through this trait so router behavior can be
/// tested against a recording implementation.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a plain-text reply to a chat.
    async fn send_text(&self, chat_id: i64, text: &str) -> TransportResult<()>;

    /// Show a "typing" indicator in a chat.
    async fn send_typing(&self, chat_id: i64) -> TransportResult<()>;
}

/// Telegram-backed transport.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send_text(&self, chat_id: i64, text: &str) -> TransportResult<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map(|_| ())
            .map_err(|err| TransportError::Send(err.to_string()))
    }

    async fn send_typing(&self, chat_id: i64) -> TransportResult<()> {
        self.bot
            .send_chat_action(ChatId(chat_id), ChatAction::Typing)
            .await
            .map(|_| ())
            .map_err(|err| TransportError::Send(err.to_string()))
    }
}
