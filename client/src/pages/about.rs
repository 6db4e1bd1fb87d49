//! About page: company intro, core values, and numbers.

use leptos::prelude::*;

use crate::components::feature_grid::FeatureGrid;
use crate::components::hero::Hero;
use crate::components::page_shell::PageShell;
use crate::components::section_header::SectionHeader;
use crate::components::stat_cards::StatCards;
use crate::content::{about, shapes};
use crate::util::site_route::SiteRoute;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageShell>
            <Hero
                title=about::TITLE
                highlight=about::HIGHLIGHT
                body=about::INTRO
                shapes=&shapes::ABOUT
                badge="About Our Company"
            >
                <a href=SiteRoute::Home.path() class="btn btn--secondary">
                    "← Back to Home"
                </a>
            </Hero>

            <section class="section">
                <SectionHeader
                    title="Our Core Values"
                    subtitle="The principles that guide every project we deliver."
                />
                <FeatureGrid features=&about::VALUES/>
            </section>

            <section class="section section--accent">
                <SectionHeader title="Our Impact in Numbers"/>
                <StatCards stats=&about::STATS/>
            </section>
        </PageShell>
    }
}
