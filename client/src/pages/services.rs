//! Services page: service catalog and delivery process.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::page_shell::PageShell;
use crate::components::section_header::SectionHeader;
use crate::content::{services, shapes};
use crate::util::color::tint;
use crate::util::site_route::SiteRoute;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <PageShell>
            <Hero
                title=services::TITLE
                highlight=services::HIGHLIGHT
                body=services::INTRO
                shapes=&shapes::SERVICES
                badge="Our Services"
            >
                <a href=SiteRoute::Home.path() class="btn btn--secondary">
                    "← Back to Home"
                </a>
            </Hero>

            <section class="section">
                <SectionHeader title="What We Offer"/>
                <div class="card-grid">
                    {services::SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <article class="card card--service" style=format!("border-top-color: {};", service.color)>
                                    <h3 class="card__title" style=format!("color: {};", service.color)>
                                        {service.title}
                                    </h3>
                                    <p class="card__body">{service.description}</p>
                                    <ul class="card__features">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li style=format!("background: {};", tint(service.color, 0.08))>
                                                        {*feature}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--accent">
                <SectionHeader title="Our Process"/>
                <ol class="process">
                    {services::PROCESS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <li class="process__step">
                                    <span class="process__number">{i + 1}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>
        </PageShell>
    }
}
