//! Page hero: headline with highlighted tail, intro copy, and shapes.

use leptos::prelude::*;

use crate::components::floating_shapes::FloatingShapes;
use crate::content::shapes::FloatingShape;

#[component]
pub fn Hero(
    title: &'static str,
    highlight: &'static str,
    body: &'static str,
    shapes: &'static [FloatingShape],
    #[prop(optional)] badge: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="hero">
            <FloatingShapes shapes=shapes/>
            <div class="hero__content">
                {badge.map(|text| view! { <span class="hero__badge">{text}</span> })}
                <h1 class="hero__title">
                    {title}
                    " "
                    <span class="hero__highlight">{highlight}</span>
                </h1>
                <p class="hero__body">{body}</p>
                {children.map(|c| c())}
            </div>
        </section>
    }
}
