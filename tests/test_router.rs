//! Router behavior tests with mock collaborators.
//!
//! Verify the dispatch table, the fixed reply templates, the error backstop,
//! and the one-reply-per-message property without a live chat or the real
//! phone library.

mod mocks;

use mocks::{MockPhoneGrammar, MockTransport, SentEvent};
use phone_detector_bot::bot::handlers::handle_text;
use phone_detector_bot::bot::replies;
use phone_detector_bot::services::{GuessConfig, PhoneService};
use std::sync::Arc;

const CHAT: i64 = 42;

fn empty_service() -> PhoneService {
    PhoneService::new(Arc::new(MockPhoneGrammar::new()), GuessConfig::default())
}

fn service_with(grammar: MockPhoneGrammar) -> PhoneService {
    PhoneService::new(Arc::new(grammar), GuessConfig::default())
}

#[tokio::test]
async fn test_start_replies_with_welcome() {
    let transport = MockTransport::new();
    let service = empty_service();

    handle_text(&transport, &service, CHAT, "/start").await.unwrap();

    assert_eq!(transport.sent_texts(), vec![replies::WELCOME.to_string()]);
}

#[tokio::test]
async fn test_help_and_formats_reply_with_templates() {
    let transport = MockTransport::new();
    let service = empty_service();

    handle_text(&transport, &service, CHAT, "/help").await.unwrap();
    handle_text(&transport, &service, CHAT, "/formats").await.unwrap();

    assert_eq!(
        transport.sent_texts(),
        vec![replies::HELP.to_string(), replies::FORMATS.to_string()]
    );
}

#[tokio::test]
async fn test_phone_without_argument_gets_usage_hint() {
    let transport = MockTransport::new();
    let service = empty_service();

    handle_text(&transport, &service, CHAT, "/phone").await.unwrap();

    assert_eq!(transport.sent_texts(), vec![replies::PHONE_USAGE.to_string()]);
    // The pipeline is not invoked, so no typing indicator either.
    assert_eq!(transport.events().len(), 1);
}

#[tokio::test]
async fn test_candidate_path_sends_typing_then_one_reply() {
    let transport = MockTransport::new();
    let grammar = MockPhoneGrammar::new()
        .with_valid("+12345678900")
        .with_parse(
            "2345678900",
            Some("US"),
            MockPhoneGrammar::candidate("US", 1),
        );
    let service = service_with(grammar);

    handle_text(&transport, &service, CHAT, "(234) 567-8900").await.unwrap();

    let events = transport.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], SentEvent::Typing { chat_id: CHAT });
    match &events[1] {
        SentEvent::Text { chat_id, text } => {
            assert_eq!(*chat_id, CHAT);
            assert!(text.starts_with("Phone Number Analysis:"));
            assert!(text.contains("Country: United States"));
        }
        other => panic!("expected a text reply, got {:?}", other),
    }
}

#[tokio::test]
async fn test_phone_with_argument_runs_the_pipeline() {
    let transport = MockTransport::new();
    let grammar = MockPhoneGrammar::new()
        .with_valid("+12345678900")
        .with_parse(
            "+12345678900",
            None,
            MockPhoneGrammar::candidate("US", 1),
        );
    let service = service_with(grammar);

    handle_text(&transport, &service, CHAT, "/phone +1 234 567 8900")
        .await
        .unwrap();

    let texts = transport.sent_texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("Phone Number Analysis:"));
}

#[tokio::test]
async fn test_invalid_candidate_gets_rejection_template() {
    let transport = MockTransport::new();
    let service = empty_service();

    handle_text(&transport, &service, CHAT, "gibberish").await.unwrap();

    assert_eq!(transport.sent_texts(), vec![replies::INVALID_NUMBER.to_string()]);
}

#[tokio::test]
async fn test_classifier_error_becomes_apology() {
    // The validator accepts the candidate but the classifier fails: the
    // router must convert the error into the fixed apology, never leak it.
    let transport = MockTransport::new();
    let grammar = MockPhoneGrammar::new().with_valid("+19999999999");
    let service = service_with(grammar);

    handle_text(&transport, &service, CHAT, "+1 999 999 9999").await.unwrap();

    assert_eq!(
        transport.sent_texts(),
        vec![replies::PROCESSING_FAILURE.to_string()]
    );
}

#[tokio::test]
async fn test_unknown_slash_command_is_ignored() {
    let transport = MockTransport::new();
    let service = empty_service();

    handle_text(&transport, &service, CHAT, "/settings").await.unwrap();

    assert!(transport.events().is_empty());
}

#[tokio::test]
async fn test_every_accepted_input_yields_exactly_one_reply() {
    let inputs = ["/start", "/help", "/formats", "/phone", "gibberish"];
    let transport = MockTransport::new();
    let service = empty_service();

    for input in inputs {
        handle_text(&transport, &service, CHAT, input).await.unwrap();
    }

    assert_eq!(transport.sent_texts().len(), inputs.len());
}

#[tokio::test]
async fn test_send_failure_is_reported_to_the_caller() {
    let transport = MockTransport::failing();
    let service = empty_service();

    let result = handle_text(&transport, &service, CHAT, "/start").await;

    assert!(result.is_err());
}
