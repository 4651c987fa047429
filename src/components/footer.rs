//! Site footer for the public landing page.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__brand">"PlantCare AI"</span>
            <span class="footer__spacer"></span>
            <a class="footer__link" href="#features">
                "Solutions"
            </a>
            <a class="footer__link" href="/">
                "Company"
            </a>
            <span class="footer__copyright">"© 2026 PlantCare AI"</span>
        </footer>
    }
}
