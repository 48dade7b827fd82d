use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::state::contact::{ContactField, ContactFormState, FAILURE_MESSAGE, SubmitBlocked, SubmitStatus};

/// Relay double that records every message and replays one scripted answer.
struct MockRelay {
    answer: Result<RelayReceipt, SubmissionError>,
    sent: RefCell<Vec<ContactMessage>>,
}

impl MockRelay {
    fn answering(status: u16, text: &str) -> Self {
        Self { answer: Ok(RelayReceipt { status, text: text.to_owned() }), sent: RefCell::new(Vec::new()) }
    }

    fn failing(err: SubmissionError) -> Self {
        Self { answer: Err(err), sent: RefCell::new(Vec::new()) }
    }

    fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl ContactRelay for MockRelay {
    async fn send(&self, message: &ContactMessage) -> Result<RelayReceipt, SubmissionError> {
        self.sent.borrow_mut().push(message.clone());
        self.answer.clone()
    }
}

fn ada() -> ContactFormState {
    let mut state = ContactFormState::default();
    state.edit(ContactField::Name, "Ada");
    state.edit(ContactField::Email, "ada@example.com");
    state.edit(ContactField::Message, "Hello");
    state
}

/// Drive one submit through the relay the way the contact component does.
fn submit(state: &mut ContactFormState, relay: &MockRelay) -> Result<(), SubmitBlocked> {
    let snapshot = state.begin_submit()?;
    let outcome = block_on(dispatch(relay, &snapshot));
    state.settle(outcome);
    Ok(())
}

// =============================================================
// Success marker detection
// =============================================================

#[test]
fn only_exact_marker_with_2xx_is_success() {
    assert!(is_success(&RelayReceipt { status: 200, text: "OK".to_owned() }));
    assert!(!is_success(&RelayReceipt { status: 200, text: "ok".to_owned() }));
    assert!(!is_success(&RelayReceipt { status: 200, text: "OK\n".to_owned() }));
    assert!(!is_success(&RelayReceipt { status: 200, text: String::new() }));
    assert!(!is_success(&RelayReceipt { status: 502, text: "OK".to_owned() }));
}

#[test]
fn dispatch_maps_unexpected_body_to_rejected() {
    let relay = MockRelay::answering(200, "{\"queued\":true}");
    let result = block_on(dispatch(&relay, &ContactMessage::default()));
    assert_eq!(
        result,
        Err(SubmissionError::Rejected { status: 200, body: "{\"queued\":true}".to_owned() })
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_http_relay_is_unavailable() {
    let result = block_on(HttpRelay.send(&ContactMessage::default()));
    assert_eq!(result, Err(SubmissionError::Unavailable));
}

// =============================================================
// End-to-end form scenarios
// =============================================================

#[test]
fn ada_success_resets_fields() {
    let relay = MockRelay::answering(200, SUCCESS_MARKER);
    let mut state = ada();

    submit(&mut state, &relay).unwrap();

    assert_eq!(state.status, SubmitStatus::Succeeded);
    assert_eq!(state.message, ContactMessage::default());
    assert_eq!(state.error_banner(), None);
    assert_eq!(
        relay.sent.borrow()[0],
        ContactMessage {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "Hello".to_owned(),
        }
    );
}

#[test]
fn ada_transport_error_keeps_fields() {
    let relay = MockRelay::failing(SubmissionError::Transport("connection reset".to_owned()));
    let mut state = ada();

    submit(&mut state, &relay).unwrap();

    assert_eq!(state.status, SubmitStatus::Failed(FAILURE_MESSAGE.to_owned()));
    assert_eq!(state.message, ada().message);
    assert_eq!(state.error_banner(), Some(FAILURE_MESSAGE));
    assert_eq!(state.success_banner(), None);
}

#[test]
fn non_marker_response_fails_the_form() {
    let relay = MockRelay::answering(200, "Accepted");
    let mut state = ada();

    submit(&mut state, &relay).unwrap();

    assert!(matches!(state.status, SubmitStatus::Failed(_)));
    assert_eq!(state.message.name, "Ada");
}

#[test]
fn empty_email_never_reaches_relay() {
    let relay = MockRelay::answering(200, SUCCESS_MARKER);
    let mut state = ada();
    state.edit(ContactField::Email, "");

    assert_eq!(
        submit(&mut state, &relay),
        Err(SubmitBlocked::MissingField(ContactField::Email))
    );
    assert_eq!(relay.calls(), 0);
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn second_submit_while_pending_sends_once() {
    let relay = MockRelay::answering(200, SUCCESS_MARKER);
    let mut state = ada();

    let snapshot = state.begin_submit().unwrap();
    assert_eq!(state.begin_submit(), Err(SubmitBlocked::InFlight));

    let outcome = block_on(dispatch(&relay, &snapshot));
    state.settle(outcome);

    assert_eq!(relay.calls(), 1);
    assert_eq!(state.status, SubmitStatus::Succeeded);
}

#[test]
fn payload_is_last_value_at_submit_time() {
    let relay = MockRelay::answering(200, SUCCESS_MARKER);
    let mut state = ContactFormState::default();
    for partial in ["G", "Gr", "Gra", "Grace"] {
        state.edit(ContactField::Name, partial);
    }
    state.edit(ContactField::Email, "old@example.com");
    state.edit(ContactField::Email, "grace@example.com");
    state.edit(ContactField::Message, "Hi");

    submit(&mut state, &relay).unwrap();

    let sent = relay.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Grace");
    assert_eq!(sent[0].email, "grace@example.com");
    assert_eq!(sent[0].message, "Hi");
}

#[test]
fn retry_after_failure_sends_same_fields() {
    let failing = MockRelay::failing(SubmissionError::Transport("offline".to_owned()));
    let working = MockRelay::answering(200, SUCCESS_MARKER);
    let mut state = ada();

    submit(&mut state, &failing).unwrap();
    submit(&mut state, &working).unwrap();

    assert_eq!(working.sent.borrow()[0].name, "Ada");
    assert_eq!(state.status, SubmitStatus::Succeeded);
}
