//! Fallback for unknown paths.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::util::site_route::SiteRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageShell>
            <section class="section not-found">
                <h1>"Page not found"</h1>
                <p>"The page you are looking for does not exist."</p>
                <a href=SiteRoute::Home.path() class="btn btn--primary">
                    "Back to Home"
                </a>
            </section>
        </PageShell>
    }
}
