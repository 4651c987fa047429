//! Top navigation bar for the public landing page.
//!
//! Session-aware: signed-out visitors get Login and Sign Up links (Sign Up
//! carries the sign-up intent for the auth page), signed-in users get their
//! display name and a sign-out button.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let display_name = move || {
        session
            .identity()
            .map(|identity| identity.name)
            .unwrap_or_default()
    };
    let on_logout = move |_| session.logout();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "PlantCare AI"
            </a>
            <span class="navbar__spacer"></span>
            <Show
                when=move || session.identity().is_some()
                fallback=|| {
                    view! {
                        <a class="navbar__link" href="/auth">
                            "Login"
                        </a>
                        <a class="navbar__link navbar__link--primary" href="/auth?mode=signup">
                            "Sign Up"
                        </a>
                    }
                }
            >
                <span class="navbar__user">{display_name}</span>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
