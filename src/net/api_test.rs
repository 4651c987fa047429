use super::*;

#[test]
fn login_payload_sends_email_and_password_only() {
    assert_eq!(
        login_payload("a@b.com", "secret"),
        serde_json::json!({ "email": "a@b.com", "password": "secret" })
    );
}

#[test]
fn register_payload_includes_name() {
    assert_eq!(
        register_payload("Alice", "a@b.com", "secret"),
        serde_json::json!({ "name": "Alice", "email": "a@b.com", "password": "secret" })
    );
}

#[test]
fn rejection_message_prefers_the_service_message() {
    let body = ErrorBody {
        message: Some("Invalid credentials".to_owned()),
    };
    assert_eq!(rejection_message(Some(body)), "Invalid credentials");
}

#[test]
fn rejection_message_falls_back_when_the_body_has_no_message() {
    let body = ErrorBody { message: None };
    assert_eq!(rejection_message(Some(body)), GENERIC_FAILURE);
}

#[test]
fn rejection_message_falls_back_without_a_body() {
    assert_eq!(rejection_message(None), GENERIC_FAILURE);
}
