//! Feature grid for the landing page.

use leptos::prelude::*;

struct Feature {
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Disease Detection",
        blurb: "Identify common crop diseases from a single leaf photo.",
    },
    Feature {
        title: "Results & Accuracy",
        blurb: "Clear confidence scores alongside every diagnosis.",
    },
    Feature {
        title: "Medicine Recommendations",
        blurb: "Treatment suggestions matched to the detected disease.",
    },
    Feature {
        title: "Weather Alerts",
        blurb: "Early warnings when conditions favor an outbreak.",
    },
];

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features" id="features">
            <h2 class="features__heading">"Smarter Farming"</h2>
            <div class="features__grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__blurb">{feature.blurb}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
