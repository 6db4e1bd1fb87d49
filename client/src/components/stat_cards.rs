//! Row of numeric highlight cards.

use leptos::prelude::*;

use crate::content::Stat;

#[component]
pub fn StatCards(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="stats">
            {stats
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stats__card">
                            <span class="stats__number">{stat.number}</span>
                            <span class="stats__label">{stat.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
