//! Home page: hero, product teaser, and call to action.

use leptos::prelude::*;

use crate::components::feature_grid::FeatureGrid;
use crate::components::hero::Hero;
use crate::components::page_shell::PageShell;
use crate::components::section_header::SectionHeader;
use crate::content::{company, shapes};
use crate::util::site_route::SiteRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell>
            <Hero
                title=company::HERO_TITLE
                highlight=company::HERO_HIGHLIGHT
                body=company::HERO_BODY
                shapes=&shapes::HOME
            >
                <a href=SiteRoute::About.path() class="btn btn--primary btn--large">
                    "Learn More"
                </a>
            </Hero>

            <section class="section section--surface">
                <SectionHeader title="Products"/>
                <FeatureGrid features=&company::HOME_PRODUCTS/>
            </section>

            <section class="section section--cta">
                <h2 class="cta__title">{company::CTA_TITLE}</h2>
                <p class="cta__body">{company::CTA_BODY}</p>
                <a href=SiteRoute::Contact.path() class="btn btn--inverse btn--large">
                    "Send a Message"
                </a>
            </section>
        </PageShell>
    }
}
