//! Public landing page.

use leptos::prelude::*;

use crate::components::features::FeaturesSection;
use crate::components::footer::Footer;
use crate::components::hero::HeroSection;
use crate::components::navbar::Navbar;
use crate::components::stats::StatsSection;

/// Marketing landing route: navbar, hero, feature grid, stats band, footer.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Navbar/>
            <main>
                <HeroSection/>
                <FeaturesSection/>
                <StatsSection/>
            </main>
            <Footer/>
        </div>
    }
}
