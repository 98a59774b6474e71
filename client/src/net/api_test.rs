use super::*;
use crate::net::types::{ClientPage, Project};

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(VERIFY_OTP_PATH, "/users/verify-otp");
    assert_eq!(client_endpoint("c-1"), "/clients/c-1");
    assert_eq!(project_endpoint("p-9"), "/projects/p-9");
    assert_eq!(milestone_update_endpoint("m-2"), "/additional/milestone/update/m-2");
    assert_eq!(milestone_delete_endpoint("m-2"), "/additional/milestone/delete/m-2");
    assert_eq!(finance_endpoint("f-3"), "/finance/f-3");
}

#[test]
fn client_list_params_carry_category_and_paging() {
    let query = ClientQuery { category: "corporate".to_owned(), page: 2, limit: 10 };
    assert_eq!(
        client_list_params(&query),
        vec![("type", "corporate".to_owned()), ("page", "2".to_owned()), ("limit", "10".to_owned())]
    );
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

// =============================================================
// classify_response
// =============================================================

#[test]
fn classify_401_is_unauthorized() {
    let result = classify_response::<ClientPage>(401, r#"{"message":"jwt expired"}"#);
    assert_eq!(result, Err(ApiError::Unauthorized));
}

#[test]
fn classify_envelope_401_is_unauthorized_even_on_http_200() {
    let result = classify_response::<ClientPage>(200, r#"{"status":401,"message":"auth.required"}"#);
    assert_eq!(result, Err(ApiError::Unauthorized));
}

#[test]
fn classify_error_status_keeps_server_message() {
    let result = classify_response::<serde_json::Value>(400, r#"{"status":400,"message":"otp.invalid"}"#);
    assert_eq!(
        result,
        Err(ApiError::Status { status: 400, message: "otp.invalid".to_owned() })
    );
}

#[test]
fn classify_error_status_with_non_json_body_has_empty_message() {
    let result = classify_response::<serde_json::Value>(502, "<html>Bad gateway</html>");
    assert_eq!(result, Err(ApiError::Status { status: 502, message: String::new() }));
}

#[test]
fn classify_fills_missing_status_from_http() {
    let env = classify_response::<Project>(200, r#"{"data":{"id":"p-1","name":"Bridge"}}"#).expect("ok");
    assert_eq!(env.status, 200);
    assert_eq!(env.data.map(|p| p.name), Some("Bridge".to_owned()));
}

#[test]
fn classify_keeps_envelope_status_when_present() {
    let env = classify_response::<serde_json::Value>(200, r#"{"status":404,"message":"otp.notFound"}"#).expect("ok");
    assert_eq!(env.status, 404);
    assert!(!env.is_status(200));
}

#[test]
fn classify_empty_success_body_is_dataless_envelope() {
    let env = classify_response::<serde_json::Value>(204, "").expect("ok");
    assert_eq!(env.status, 204);
    assert!(env.data.is_none());
}

#[test]
fn classify_undecodable_success_body_is_decode_error() {
    let result = classify_response::<Project>(200, "not json");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

// =============================================================
// HttpApi outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpApi::new(crate::config::ClientConfig::default(), Some("t".to_owned()));
    let result = futures::executor::block_on(api.fetch_project("p-1"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn for_session_carries_token_and_anonymous_does_not() {
    let session = SessionState { token: Some("t".to_owned()), ..SessionState::default() };
    let config = crate::config::ClientConfig::from_build_env();
    assert_eq!(HttpApi::for_session(&session), HttpApi::new(config.clone(), Some("t".to_owned())));
    assert_eq!(HttpApi::anonymous(), HttpApi::new(config, None));
}
