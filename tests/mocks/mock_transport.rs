use async_trait::async_trait;
use phone_detector_bot::bot::ChatTransport;
use phone_detector_bot::error::{TransportError, TransportResult};
use std::sync::Mutex;

/// One outbound action observed by the mock transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentEvent {
    Text { chat_id: i64, text: String },
    Typing { chat_id: i64 },
}

/// Recording chat transport for testing.
///
/// Captures every outbound action and can be told to fail sends, so router
/// behavior can be verified without a live chat.
#[allow(dead_code)]
pub struct MockTransport {
    events: Mutex<Vec<SentEvent>>,
    fail_sends: bool,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_sends: false,
        }
    }

    /// A transport whose `send_text` always fails.
    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_sends: true,
        }
    }

    /// All observed events, in order.
    pub fn events(&self) -> Vec<SentEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Only the text replies, in order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SentEvent::Text { text, .. } => Some(text),
                SentEvent::Typing { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send_text(&self, chat_id: i64, text: &str) -> TransportResult<()> {
        if self.fail_sends {
            return Err(TransportError::Send("mock send failure".to_string()));
        }
        self.events.lock().unwrap().push(SentEvent::Text {
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_typing(&self, chat_id: i64) -> TransportResult<()> {
        self.events
            .lock()
            .unwrap()
            .push(SentEvent::Typing { chat_id });
        Ok(())
    }
}
