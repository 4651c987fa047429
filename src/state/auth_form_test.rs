use super::*;

fn filled(mode: AuthMode) -> AuthFormState {
    let mut form = AuthFormState::new(mode);
    form.name = "Alice".to_owned();
    form.email = "a@b.com".to_owned();
    form.password = "secret".to_owned();
    form
}

#[test]
fn initial_mode_honors_signup_intent() {
    assert_eq!(initial_mode(Some("signup")), AuthMode::Register);
}

#[test]
fn initial_mode_defaults_to_login() {
    assert_eq!(initial_mode(None), AuthMode::Login);
    assert_eq!(initial_mode(Some("login")), AuthMode::Login);
    assert_eq!(initial_mode(Some("")), AuthMode::Login);
}

#[test]
fn toggle_flips_mode_and_clears_fields_and_error() {
    let mut form = filled(AuthMode::Login);
    form.fail("Invalid credentials");

    assert!(form.toggle_mode());
    assert_eq!(form.mode, AuthMode::Register);
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert_eq!(form.error(), None);
    assert_eq!(form.notice, None);
}

#[test]
fn toggle_is_rejected_while_submitting() {
    let mut form = filled(AuthMode::Login);
    assert!(form.begin_submit());

    assert!(!form.toggle_mode());
    assert_eq!(form.mode, AuthMode::Login);
    assert_eq!(form.email, "a@b.com");
    assert!(form.is_submitting());
}

#[test]
fn begin_submit_clears_a_previous_failure() {
    let mut form = filled(AuthMode::Login);
    form.fail("Invalid credentials");

    assert!(form.begin_submit());
    assert!(form.is_submitting());
    assert_eq!(form.error(), None);
}

#[test]
fn second_submit_while_outstanding_is_rejected() {
    let mut form = filled(AuthMode::Login);
    assert!(form.begin_submit());
    assert!(!form.begin_submit());
    assert!(form.is_submitting());
}

#[test]
fn failure_preserves_entered_fields() {
    let mut form = filled(AuthMode::Login);
    form.begin_submit();
    form.fail("Invalid credentials");

    assert_eq!(form.error(), Some("Invalid credentials"));
    assert!(!form.is_submitting());
    assert_eq!(form.email, "a@b.com");
    assert_eq!(form.password, "secret");
}

#[test]
fn register_success_returns_to_login_with_notice() {
    let mut form = filled(AuthMode::Register);
    form.begin_submit();
    form.register_succeeded();

    assert_eq!(form.mode, AuthMode::Login);
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert_eq!(form.error(), None);
    assert_eq!(form.notice.as_deref(), Some(REGISTERED_NOTICE));
}

#[test]
fn notice_is_cleared_by_the_next_submission() {
    let mut form = AuthFormState::new(AuthMode::Register);
    form.register_succeeded();
    assert!(form.notice.is_some());

    form.begin_submit();
    assert_eq!(form.notice, None);
}
