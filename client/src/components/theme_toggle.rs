//! Sun/moon button that flips the site theme.

use leptos::prelude::*;

use crate::theme::use_theme;

/// The only control that mutates the theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let is_dark = move || theme.mode().is_dark();

    view! {
        <button
            class="theme-toggle"
            class:theme-toggle--dark=is_dark
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
            title="Toggle theme"
        >
            <span class="theme-toggle__icon theme-toggle__icon--sun" aria-hidden="true">"☀"</span>
            <span class="theme-toggle__icon theme-toggle__icon--moon" aria-hidden="true">"☾"</span>
        </button>
    }
}
