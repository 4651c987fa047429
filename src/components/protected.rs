//! Route wrapper applying the authentication gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps gating behavior identical for every protected route: the decision
//! comes from `util::gate`, and only the navigation effect happens here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::gate::{GateDecision, decide};

/// Wrap a protected subtree.
///
/// Renders a neutral placeholder while the persisted session is being
/// recovered, redirects to `/auth` once the state is known and nobody is
/// signed in, and otherwise renders the children. The original destination
/// is not preserved across the redirect.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.read(decide) == GateDecision::RedirectToAuth {
            navigate("/auth", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || session.read(decide) == GateDecision::Protected
            fallback=move || {
                view! {
                    <div class="gate-screen">
                        <p>
                            {move || match session.read(decide) {
                                GateDecision::RedirectToAuth => "Redirecting to sign in...",
                                _ => "Loading...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
