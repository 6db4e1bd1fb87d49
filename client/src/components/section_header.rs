//! Centered section heading with the accent underline.

use leptos::prelude::*;

#[component]
pub fn SectionHeader(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <header class="section-header">
            <h2 class="section-header__title">{title}</h2>
            <div class="section-header__rule"></div>
            {subtitle.map(|text| view! { <p class="section-header__subtitle">{text}</p> })}
        </header>
    }
}
