//! Fixed top navigation with brand, page links, and the theme toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::company::CONTACT;
use crate::util::site_route::SiteRoute;

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

/// Links shown in the bar, in order.
pub(crate) const NAV_LINKS: [SiteRoute; 5] = SiteRoute::ALL;

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let active = move || SiteRoute::from_path(&pathname.get());

    view! {
        <nav class="nav-bar">
            <a href=SiteRoute::Home.path() class="nav-bar__brand">
                {CONTACT.company}
            </a>
            <div class="nav-bar__links">
                {NAV_LINKS
                    .into_iter()
                    .map(|route| {
                        view! {
                            <a
                                href=route.path()
                                class="nav-bar__link"
                                class:nav-bar__link--active=move || active() == Some(route)
                            >
                                {route.label()}
                            </a>
                        }
                    })
                    .collect_view()}
                <a href=SiteRoute::Products.path() class="btn btn--primary nav-bar__demo">
                    "Demo Our Products"
                </a>
                <ThemeToggle/>
            </div>
        </nav>
    }
}
