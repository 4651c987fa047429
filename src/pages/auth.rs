//! Combined sign-in / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the auth form state machine, talks to the identity service, and
//! hands a successful sign-in to the session store. An already-authenticated
//! visitor is sent straight to the dashboard instead of seeing the form.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth_form::{AuthFormState, AuthMode, initial_mode};
use crate::state::session::{SessionState, SessionStore};

/// True once the session is known and authenticated: the auth page should
/// hand over to the dashboard instead of rendering the form.
fn should_enter_dashboard(state: &SessionState) -> bool {
    !state.is_restoring() && state.identity().is_some()
}

/// Message for locally rejected submissions, before any request is made.
fn missing_fields_message(
    mode: AuthMode,
    name: &str,
    email: &str,
    password: &str,
) -> Option<&'static str> {
    let name_missing = mode == AuthMode::Register && name.trim().is_empty();
    if name_missing || email.trim().is_empty() || password.trim().is_empty() {
        return Some(match mode {
            AuthMode::Login => "Enter your email and password.",
            AuthMode::Register => "Enter your name, email and password.",
        });
    }
    None
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let query = use_query_map();
    let form = RwSignal::new(AuthFormState::new(initial_mode(
        query.with_untracked(|q| q.get("mode")).as_deref(),
    )));
    let navigate = use_navigate();

    // Already signed in, or a sign-in completed elsewhere in the session:
    // leave for the dashboard instead of showing the form.
    Effect::new(move || {
        if session.read(should_enter_dashboard) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    // Liveness flag for in-flight submissions. A response that arrives after
    // the page is torn down must be discarded, not applied.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(AuthFormState::is_submitting) {
            return;
        }
        let (mode, name, email, password) = form.with_untracked(|f| {
            (
                f.mode,
                f.name.clone(),
                f.email.clone(),
                f.password.clone(),
            )
        });
        if let Some(message) = missing_fields_message(mode, &name, &email, &password) {
            form.update(|f| f.fail(message));
            return;
        }
        form.update(|f| {
            f.begin_submit();
        });

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = match mode {
                    AuthMode::Login => crate::net::api::login(&email, &password).await.map(Some),
                    AuthMode::Register => crate::net::api::register(&name, &email, &password)
                        .await
                        .map(|()| None),
                };
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match outcome {
                    // Navigation follows from the session effect above.
                    Ok(Some(identity)) => session.login(identity),
                    Ok(None) => form.update(AuthFormState::register_succeeded),
                    Err(message) => form.update(|f| f.fail(message)),
                }
            });
        }
    };

    let on_toggle = move |_| {
        form.update(|f| {
            f.toggle_mode();
        });
    };

    let is_register = move || form.with(|f| f.mode == AuthMode::Register);
    let busy = move || form.with(AuthFormState::is_submitting);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"PlantCare AI"</h1>
                <h2 class="auth-card__heading">
                    {move || if is_register() { "Create Account" } else { "Welcome Back" }}
                </h2>
                <p class="auth-card__subtitle">
                    {move || {
                        if is_register() {
                            "Join us to start detecting plant diseases."
                        } else {
                            "Please enter your details to sign in."
                        }
                    }}
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=is_register>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || {
                            if busy() {
                                "Please wait..."
                            } else if is_register() {
                                "Sign Up"
                            } else {
                                "Login"
                            }
                        }}
                    </button>
                </form>
                <Show when=move || form.with(|f| f.error().is_some())>
                    <p class="auth-message auth-message--error">
                        {move || form.with(|f| f.error().unwrap_or_default().to_owned())}
                    </p>
                </Show>
                <Show when=move || form.with(|f| f.notice.is_some())>
                    <p class="auth-message">
                        {move || form.with(|f| f.notice.clone().unwrap_or_default())}
                    </p>
                </Show>
                <div class="auth-card__switch">
                    <span>
                        {move || {
                            if is_register() {
                                "Already have an account?"
                            } else {
                                "Don't have an account?"
                            }
                        }}
                    </span>
                    <button class="auth-card__switch-button" on:click=on_toggle disabled=busy>
                        {move || if is_register() { "Login" } else { "Sign Up" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
