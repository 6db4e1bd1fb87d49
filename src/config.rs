//! Host configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

use leptos::config::{LeptosOptions, get_configuration};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    #[error("invalid SITE_HOST: {0:?}")]
    InvalidHost(String),

    /// Missing or malformed `[[workspace.metadata.leptos]]` settings.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    pub leptos: LeptosOptions,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `SITE_HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: bind port, default 3000
    ///
    /// Leptos build settings come from `cargo leptos` via `get_configuration`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let addr = parse_addr(
            std::env::var("SITE_HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )?;
        Ok(Self { addr, leptos: conf.leptos_options })
    }
}

fn parse_addr(host: Option<&str>, port: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let host = host.unwrap_or(DEFAULT_HOST);
    let ip = host
        .trim()
        .parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidHost(host.to_owned()))?;
    let port = match port {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        None => DEFAULT_PORT,
    };
    Ok(SocketAddr::new(ip, port))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
