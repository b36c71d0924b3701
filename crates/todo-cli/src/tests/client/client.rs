use crate::Client;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:8000", Some("abc123"));
    assert_eq!(client.token, Some("abc123".to_string()));
}

#[test]
fn test_blank_token_dropped() {
    let client = Client::new("http://localhost:8000", Some("   "));
    assert!(client.token.is_none());
}

#[test]
fn test_with_timeout_builds_client() {
    let client = Client::with_timeout("http://localhost:8000/", None, Some(Duration::from_secs(5)));
    assert!(client.is_ok());
    assert_eq!(client.unwrap().base_url, "http://localhost:8000");
}

// =========================================================================
// Error body parsing
// =========================================================================

#[test]
fn given_string_detail_when_error_message_then_returns_detail() {
    let message = Client::error_message(r#"{"detail": "Incorrect email or password"}"#);

    assert_that!(message.as_deref(), some(eq("Incorrect email or password")));
}

#[test]
fn given_validation_detail_list_when_error_message_then_joins_msgs() {
    let body = r#"{"detail": [
        {"loc": ["body", "email"], "msg": "value is not a valid email address"},
        {"loc": ["body", "password"], "msg": "field required"}
    ]}"#;

    let message = Client::error_message(body);

    assert_that!(
        message.as_deref(),
        some(eq("value is not a valid email address; field required"))
    );
}

#[test]
fn given_error_envelope_when_error_message_then_returns_message() {
    let message =
        Client::error_message(r#"{"error": {"code": "NOT_FOUND", "message": "Task not found"}}"#);

    assert_that!(message.as_deref(), some(eq("Task not found")));
}

#[test]
fn given_blank_detail_when_error_message_then_none() {
    assert_that!(Client::error_message(r#"{"detail": "  "}"#), none());
}

#[test]
fn given_non_json_body_when_error_message_then_none() {
    assert_that!(Client::error_message("<html>Bad Gateway</html>"), none());
}
