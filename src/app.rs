//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::pages::{auth::AuthPage, dashboard::DashboardPage, home::HomePage};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store context, kicks off the one-shot recovery of a
/// persisted session, and sets up client-side routing. The dashboard route is
/// wrapped in [`Protected`] so it never renders without an identity.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    provide_context(session);

    // Effects only run in the browser, so the restoring window stays open
    // until localStorage has actually been checked.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/plantcare.css"/>
        <Title text="PlantCare AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <Protected>
                                <DashboardPage/>
                            </Protected>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
