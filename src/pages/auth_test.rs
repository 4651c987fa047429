use super::*;
use crate::net::types::Identity;

fn identity() -> Identity {
    Identity {
        name: "Alice".to_owned(),
        access_token: "tok-1".to_owned(),
    }
}

#[test]
fn does_not_enter_dashboard_while_restoring() {
    let state = SessionState::default();
    assert!(!should_enter_dashboard(&state));
}

#[test]
fn does_not_enter_dashboard_when_signed_out() {
    let mut state = SessionState::default();
    state.finish_restore(None);
    assert!(!should_enter_dashboard(&state));
}

#[test]
fn enters_dashboard_for_a_restored_identity() {
    let mut state = SessionState::default();
    state.finish_restore(Some(identity()));
    assert!(should_enter_dashboard(&state));
}

#[test]
fn login_requires_email_and_password() {
    assert_eq!(
        missing_fields_message(AuthMode::Login, "", "  ", "secret"),
        Some("Enter your email and password.")
    );
    assert_eq!(
        missing_fields_message(AuthMode::Login, "", "a@b.com", ""),
        Some("Enter your email and password.")
    );
}

#[test]
fn login_ignores_the_name_field() {
    assert_eq!(
        missing_fields_message(AuthMode::Login, "", "a@b.com", "secret"),
        None
    );
}

#[test]
fn register_also_requires_a_name() {
    assert_eq!(
        missing_fields_message(AuthMode::Register, "   ", "a@b.com", "secret"),
        Some("Enter your name, email and password.")
    );
    assert_eq!(
        missing_fields_message(AuthMode::Register, "Alice", "a@b.com", "secret"),
        None
    );
}
