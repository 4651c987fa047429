use super::*;

fn identity(name: &str) -> Identity {
    Identity {
        name: name.to_owned(),
        access_token: "tok-1".to_owned(),
    }
}

#[test]
fn starts_restoring_with_no_identity() {
    let state = SessionState::default();
    assert!(state.is_restoring());
    assert_eq!(state.identity(), None);
}

#[test]
fn login_sets_identity_and_ends_restore() {
    let mut state = SessionState::default();
    state.login(identity("Alice"));
    assert!(!state.is_restoring());
    assert_eq!(state.identity(), Some(&identity("Alice")));
}

#[test]
fn repeated_reads_after_login_yield_the_same_identity() {
    let mut state = SessionState::default();
    state.login(identity("Alice"));
    assert_eq!(state.identity(), Some(&identity("Alice")));
    assert_eq!(state.identity(), Some(&identity("Alice")));
}

#[test]
fn login_then_logout_leaves_no_identity() {
    let mut state = SessionState::default();
    state.login(identity("Alice"));
    state.logout();
    assert_eq!(state.identity(), None);
}

#[test]
fn logout_without_a_session_is_a_no_op() {
    let mut state = SessionState::default();
    state.logout();
    state.logout();
    assert_eq!(state.identity(), None);
    assert!(!state.is_restoring());
}

#[test]
fn finish_restore_installs_the_saved_identity() {
    let mut state = SessionState::default();
    state.finish_restore(Some(identity("Alice")));
    assert!(!state.is_restoring());
    assert_eq!(state.identity(), Some(&identity("Alice")));
}

#[test]
fn finish_restore_with_nothing_saved_resolves_signed_out() {
    let mut state = SessionState::default();
    state.finish_restore(None);
    assert!(!state.is_restoring());
    assert_eq!(state.identity(), None);
}

#[test]
fn finish_restore_is_one_shot() {
    let mut state = SessionState::default();
    state.finish_restore(None);
    state.finish_restore(Some(identity("Mallory")));
    assert_eq!(state.identity(), None);
}

#[test]
fn login_wins_over_a_late_restore_result() {
    let mut state = SessionState::default();
    state.login(identity("Alice"));
    state.finish_restore(None);
    assert_eq!(state.identity(), Some(&identity("Alice")));
}

#[test]
fn logout_discards_a_pending_restore_result() {
    let mut state = SessionState::default();
    state.logout();
    state.finish_restore(Some(identity("Alice")));
    assert_eq!(state.identity(), None);
}
