//! Stats band for the landing page.

use leptos::prelude::*;

struct Stat {
    value: &'static str,
    label: &'static str,
    detail: &'static str,
}

const STATS: [Stat; 4] = [
    Stat {
        value: "50+",
        label: "Diseases Detected",
        detail: "Comprehensive database coverage",
    },
    Stat {
        value: "10k+",
        label: "Global Farmers",
        detail: "Community-driven insights",
    },
    Stat {
        value: "25+",
        label: "Countries Reached",
        detail: "Distributed across 4 continents",
    },
    Stat {
        value: "30%",
        label: "Yield Increase",
        detail: "Average farm productivity boost",
    },
];

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="stats">
            <h2 class="stats__heading">"Ready to transform your farm with AI precision?"</h2>
            <div class="stats__grid">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <span class="stat__value">{stat.value}</span>
                                <span class="stat__label">{stat.label}</span>
                                <span class="stat__detail">{stat.detail}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
