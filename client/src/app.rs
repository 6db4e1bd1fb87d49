//! Root application component with routing and the theme provider.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage, products::ProductsPage,
    services::ServicesPage,
};
use crate::theme::{ThemeMode, provide_theme};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The root starts with the `light` marker; the theme controller swaps it
/// once the app hydrates.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class=ThemeMode::default().as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme controller and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme();

    view! {
        <Stylesheet id="leptos" href="/pkg/pichsafe.css"/>
        <Title text="Pich & Safe | Smart ICT Solutions"/>
        <Meta
            name="description"
            content="Pich & Safe Consultancy Ltd: web development, digital marketing, hosting, and ICT consulting in Nairobi, Kenya."
        />

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route path=StaticSegment("products") view=ProductsPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
            </Routes>
        </Router>
    }
}
