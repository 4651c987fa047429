use super::*;
use crate::net::types::Identity;

fn restored(identity: Option<Identity>) -> SessionState {
    let mut state = SessionState::default();
    state.finish_restore(identity);
    state
}

fn identity() -> Identity {
    Identity {
        name: "Alice".to_owned(),
        access_token: "tok-1".to_owned(),
    }
}

#[test]
fn holds_while_restoring() {
    let state = SessionState::default();
    assert_eq!(decide(&state), GateDecision::Loading);
}

#[test]
fn redirects_when_restored_without_identity() {
    let state = restored(None);
    assert_eq!(decide(&state), GateDecision::RedirectToAuth);
}

#[test]
fn renders_protected_for_a_restored_identity() {
    let state = restored(Some(identity()));
    assert_eq!(decide(&state), GateDecision::Protected);
}

#[test]
fn renders_protected_after_a_fresh_login() {
    let mut state = SessionState::default();
    state.login(identity());
    assert_eq!(decide(&state), GateDecision::Protected);
}

#[test]
fn redirects_after_logout() {
    let mut state = SessionState::default();
    state.login(identity());
    state.logout();
    assert_eq!(decide(&state), GateDecision::RedirectToAuth);
}
