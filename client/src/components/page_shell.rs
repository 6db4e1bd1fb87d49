//! Common page frame: navigation, palette, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route renders inside `PageShell`. It reads the theme mode only to
//! pick one of the two precomputed palettes; it never changes the mode.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::theme::use_theme;
use crate::util::palette::Palette;

#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let theme = use_theme();
    let palette_vars = move || Palette::for_mode(theme.mode()).css_vars();

    view! {
        <div class="page" style=palette_vars>
            <NavBar/>
            <main class="page__main">{children()}</main>
            <Footer/>
        </div>
    }
}
