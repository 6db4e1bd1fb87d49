//! Site host: server-renders the Leptos pages and serves the WASM bundle.

mod config;
mod routes;

#[tokio::main]
async fn main() {
    // `.env` is optional; real deployments set variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = routes::app(config.leptos.clone());
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %config.addr, "pichsafe listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
