use super::*;
use crate::error::FALLBACK_MESSAGE;
use crate::net::types::Envelope;

fn envelope(status: u16, message: &str) -> Envelope<serde_json::Value> {
    Envelope { status, message: message.to_owned(), data: None }
}

#[test]
fn load_outcome_maps_unauthorized_and_other_errors() {
    assert_eq!(LoadOutcome::from_error(&ApiError::Unauthorized), LoadOutcome::Unauthorized);
    assert_eq!(
        LoadOutcome::from_error(&ApiError::Network("down".to_owned())),
        LoadOutcome::Failed(FALLBACK_MESSAGE.to_owned())
    );
}

#[test]
fn mutation_done_prefers_server_message() {
    let outcome = MutationOutcome::from_result(Ok(envelope(201, "client.created")), "Saved.");
    assert_eq!(outcome, MutationOutcome::Done { message: "client.created".to_owned() });
    assert_eq!(outcome.notice(), Some((ToastKind::Success, "client.created".to_owned())));
}

#[test]
fn mutation_done_uses_fallback_for_blank_message() {
    let outcome = MutationOutcome::from_result(Ok(envelope(200, "")), "Saved.");
    assert_eq!(outcome, MutationOutcome::Done { message: "Saved.".to_owned() });
}

#[test]
fn mutation_non_success_envelope_is_failure() {
    let outcome = MutationOutcome::from_result(Ok(envelope(409, "email.taken")), "Saved.");
    assert_eq!(outcome, MutationOutcome::Failed("email.taken".to_owned()));
    assert!(!outcome.is_done());
}

#[test]
fn mutation_errors_map_to_failed_or_unauthorized() {
    let unauthorized = MutationOutcome::from_result::<serde_json::Value>(Err(ApiError::Unauthorized), "Saved.");
    assert_eq!(unauthorized, MutationOutcome::Unauthorized);
    assert_eq!(unauthorized.notice(), None);

    let failed = MutationOutcome::from_result::<serde_json::Value>(Err(ApiError::Network("x".to_owned())), "Saved.");
    assert_eq!(failed.notice(), Some((ToastKind::Error, FALLBACK_MESSAGE.to_owned())));
}

#[test]
fn invalid_has_no_toast() {
    assert_eq!(MutationOutcome::Invalid("Name is required.".to_owned()).notice(), None);
}
