//! Landing hero section.

use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <p class="hero__kicker">"Plant Disease Detection AI"</p>
            <h1 class="hero__title">"Detect Plant Diseases Before They Spread"</h1>
            <p class="hero__subtitle">
                "Upload a photo of a leaf and get an instant diagnosis with treatment recommendations."
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary" href="/auth?mode=signup">
                    "Get Started"
                </a>
                <a class="btn" href="#features">
                    "Learn More"
                </a>
            </div>
        </section>
    }
}
