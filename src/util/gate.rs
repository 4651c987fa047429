//! Access decision for views gated behind authentication.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical gating behavior. The decision is
//! a pure function of session state; the router layer performs any
//! navigation effect, which keeps the decision testable without a live
//! router.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::session::SessionState;

/// What a protected route should do for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Persisted-session recovery is still pending: render a neutral
    /// placeholder and make no navigation decision yet.
    Loading,
    /// Nobody is signed in: send the visitor to the auth view.
    RedirectToAuth,
    /// Authenticated: render the protected subtree.
    Protected,
}

/// Decide whether a protected view may render.
///
/// The restoring window maps to [`GateDecision::Loading`] so a reload with a
/// valid persisted session never flashes a redirect.
pub fn decide(state: &SessionState) -> GateDecision {
    if state.is_restoring() {
        GateDecision::Loading
    } else if state.identity().is_none() {
        GateDecision::RedirectToAuth
    } else {
        GateDecision::Protected
    }
}
