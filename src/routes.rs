//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the five site routes to Leptos SSR, serves the compiled bundle
//! under `/pkg`, and answers `/healthz`. There is no API; the contact form
//! posts straight from the browser to the external form service.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use client::app::{App, shell};

/// Site router: SSR pages + static bundle + health check.
///
/// Unknown paths fall through to the app, which renders its not-found page.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(file_and_error_handler(shell))
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
