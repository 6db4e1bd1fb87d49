//! Grid of accent-colored cards.

use leptos::prelude::*;

use crate::content::Feature;
use crate::util::color::tint;

#[component]
pub fn FeatureGrid(features: &'static [Feature]) -> impl IntoView {
    view! {
        <div class="card-grid">
            {features
                .iter()
                .map(|feature| {
                    view! {
                        <article class="card">
                            <div class="card__icon" style=format!("background: {};", tint(feature.color, 0.12))>
                                <span class="card__icon-dot" style=format!("background: {};", feature.color)></span>
                            </div>
                            <h3 class="card__title">{feature.title}</h3>
                            <p class="card__body">{feature.description}</p>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
