//! Products page: featured product selector and category highlights.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::page_shell::PageShell;
use crate::components::section_header::SectionHeader;
use crate::content::products::{self, CATEGORIES, PRODUCTS};
use crate::content::shapes;
use crate::util::color::tint;
use crate::util::site_route::SiteRoute;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let selected = RwSignal::new(0_usize);
    let product = move || PRODUCTS[products::clamp_selection(selected.get())];

    view! {
        <PageShell>
            <Hero
                title=products::TITLE
                highlight=products::HIGHLIGHT
                body=products::INTRO
                shapes=&shapes::PRODUCTS
                badge="Our Products"
            >
                <a href=SiteRoute::Home.path() class="btn btn--secondary">
                    "← Back to Home"
                </a>
            </Hero>

            <section class="section section--surface">
                <SectionHeader title="Featured Products"/>
                <div class="product-picker">
                    <div class="product-picker__list" role="tablist">
                        {PRODUCTS
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <button
                                        class="product-picker__tab"
                                        class:product-picker__tab--active=move || selected.get() == i
                                        role="tab"
                                        on:click=move |_| selected.set(products::clamp_selection(i))
                                    >
                                        <span class="product-picker__category">{item.category}</span>
                                        <span class="product-picker__name">{item.title}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <article
                        class="product-picker__detail"
                        style=move || format!("border-color: {};", product().color)
                    >
                        <span class="product-picker__status" style=move || format!("background: {};", tint(product().color, 0.15))>
                            {move || product().status}
                        </span>
                        <h3 style=move || format!("color: {};", product().color)>{move || product().title}</h3>
                        <p>{move || product().description}</p>
                        <ul class="card__features">
                            {move || {
                                product()
                                    .features
                                    .iter()
                                    .map(|feature| view! { <li>{*feature}</li> })
                                    .collect_view()
                            }}
                        </ul>
                        <div class="product-picker__tech">
                            {move || {
                                product()
                                    .tech
                                    .iter()
                                    .map(|tech| view! { <span class="chip">{*tech}</span> })
                                    .collect_view()
                            }}
                        </div>
                        <a href=SiteRoute::Contact.path() class="btn btn--primary">
                            "Request a Demo"
                        </a>
                    </article>
                </div>
            </section>

            <section class="section">
                <SectionHeader title="Product Categories"/>
                <div class="card-grid">
                    {CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <article class="card">
                                    <span class="card__count" style=format!("color: {};", category.color)>
                                        {category.count}
                                    </span>
                                    <h3 class="card__title">{category.title}</h3>
                                    <p class="card__body">{category.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </PageShell>
    }
}
