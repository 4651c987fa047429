//! Dashboard page shown to authenticated users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the gated landing route. Gating itself lives in
//! `components::protected`; this page renders product chrome around the
//! session identity and owns the sign-out action.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// A headline statistic on the overview grid.
struct StatCard {
    label: &'static str,
    value: &'static str,
}

/// A row in the recent-detections table.
struct Detection {
    plant: &'static str,
    disease: &'static str,
    date: &'static str,
    status: &'static str,
    severity: &'static str,
}

fn overview_stats() -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Scans",
            value: "128",
        },
        StatCard {
            label: "Healthy Plants",
            value: "84",
        },
        StatCard {
            label: "Diseases Found",
            value: "44",
        },
        StatCard {
            label: "Growth Rate",
            value: "+12%",
        },
    ]
}

fn recent_detections() -> Vec<Detection> {
    vec![
        Detection {
            plant: "Tomato",
            disease: "Early Blight",
            date: "2 hours ago",
            status: "Infected",
            severity: "Medium",
        },
        Detection {
            plant: "Potato",
            disease: "Late Blight",
            date: "5 hours ago",
            status: "Healthy",
            severity: "Low",
        },
        Detection {
            plant: "Pepper",
            disease: "Bacterial Spot",
            date: "Yesterday",
            status: "Infected",
            severity: "High",
        },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let display_name = move || {
        session
            .identity()
            .map(|identity| identity.name)
            .unwrap_or_default()
    };

    // Hard redirect: a router navigation here would race the gate's own
    // redirect effect once the session empties.
    let on_logout = move |_| {
        session.logout();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__brand">"PlantCare AI"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <span class="toolbar__title">"Overview"</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{display_name}</span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <div class="dashboard-page__stats">
                {overview_stats()
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="stat-card">
                                <h3 class="stat-card__value">{stat.value}</h3>
                                <p class="stat-card__label">{stat.label}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <section class="dashboard-page__panel">
                <h2>"Recent Detections"</h2>
                <table class="detections-table">
                    <thead>
                        <tr>
                            <th>"Plant"</th>
                            <th>"Disease"</th>
                            <th>"When"</th>
                            <th>"Status"</th>
                            <th>"Severity"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {recent_detections()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.plant}</td>
                                        <td>{row.disease}</td>
                                        <td>{row.date}</td>
                                        <td>{row.status}</td>
                                        <td>{row.severity}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
