//! Inbound message routing.
//!
//! Recognizes the fixed command set and treats everything else as a
//! phone-number candidate. The analysis path is a pure function from text to
//! reply so it can be exercised without a live chat.

use super::replies;
use crate::services::PhoneService;
use tracing::error;

/// A routed inbound message.
///
/// Matching follows the fixed priority order: `/start`, `/help`, `/formats`,
/// `/phone`, then candidate text. Slash-prefixed messages that match no known
/// command are ignored, yielding no reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Start,
    Help,
    Formats,
    /// `/phone` with its trimmed argument, if any.
    Phone(Option<&'a str>),
    /// Plain text treated as a phone-number candidate.
    Candidate(&'a str),
    /// Unrecognized slash command.
    Ignored,
}

impl<'a> Command<'a> {
    /// Route a raw message text.
    pub fn parse(text: &'a str) -> Self {
        let trimmed = text.trim();

        if trimmed.starts_with("/start") {
            Self::Start
        } else if trimmed.starts_with("/help") {
            Self::Help
        } else if trimmed.starts_with("/formats") {
            Self::Formats
        } else if let Some(rest) = trimmed.strip_prefix("/phone") {
            let arg = rest.trim();
            Self::Phone(if arg.is_empty() { None } else { Some(arg) })
        } else if trimmed.starts_with('/') {
            Self::Ignored
        } else {
            Self::Candidate(trimmed)
        }
    }
}

/// Produce the reply text for a phone-number candidate.
///
/// The validator gates a short-circuit rejection; classifier errors are caught
/// here and converted into the fixed apology, so no raw error ever reaches the
/// chat.
pub fn analyze(service: &PhoneService, candidate: &str) -> String {
    if !service.is_valid(candidate) {
        return replies::INVALID_NUMBER.to_string();
    }

    match service.describe(candidate) {
        Ok(record) => replies::analysis(&record),
        Err(err) => {
            error!("analysis failed for inbound candidate: {}", err);
            replies::PROCESSING_FAILURE.to_string()
        }
    }
}
