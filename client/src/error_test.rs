use super::*;

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: "otp.invalid".to_owned() };
    assert_eq!(err.user_message(), "otp.invalid");
}

#[test]
fn user_message_falls_back_for_blank_or_transport_errors() {
    let blank = ApiError::Status { status: 500, message: "  ".to_owned() };
    assert_eq!(blank.user_message(), FALLBACK_MESSAGE);
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(), FALLBACK_MESSAGE);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(), FALLBACK_MESSAGE);
}

#[test]
fn only_unauthorized_reports_unauthorized() {
    assert!(ApiError::Unauthorized.is_unauthorized());
    assert!(!ApiError::Status { status: 403, message: String::new() }.is_unauthorized());
}
