//! Decorative floating shapes behind page heroes.
//!
//! Shapes are plain absolutely-positioned elements animated by CSS. The
//! table entries are consumed as-is; this component adds no motion logic of
//! its own beyond translating parameters to inline style.

#[cfg(test)]
#[path = "floating_shapes_test.rs"]
mod floating_shapes_test;

use leptos::prelude::*;

use crate::content::shapes::FloatingShape;
use crate::util::color::tint;

/// Inline style for one shape.
pub(crate) fn shape_style(shape: &FloatingShape) -> String {
    let (left, top) = shape.screen_position();
    format!(
        "left: {left:.1}%; top: {top:.1}%; width: {size}rem; height: {size}rem; \
         --shape-color: {color}; --shape-glow: {glow}; animation-duration: {cycle:.2}s; z-index: {depth};",
        size = shape.size,
        color = shape.color,
        glow = tint(shape.color, 0.35),
        cycle = shape.cycle_secs(),
        depth = shape.depth(),
    )
}

#[component]
pub fn FloatingShapes(shapes: &'static [FloatingShape]) -> impl IntoView {
    view! {
        <div class="shapes" aria-hidden="true">
            {shapes
                .iter()
                .map(|shape| {
                    view! {
                        <span class=format!("shape {}", shape.kind.css_class()) style=shape_style(shape)></span>
                    }
                })
                .collect_view()}
        </div>
    }
}
