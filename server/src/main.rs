#![recursion_limit = "256"]

mod config;
mod rate_limit;
mod relay;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::rate_limit::{RateLimitConfig, RateLimiter};
use crate::relay::{EmailJsRelay, EmailRelay};

#[tokio::main]
async fn main() {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");

    // Relay is optional: the site still serves and the contact endpoint answers 503.
    let relay: Option<Arc<dyn EmailRelay>> = match config.relay {
        Some(relay_config) => {
            let endpoint = relay_config.endpoint.clone();
            match EmailJsRelay::new(relay_config) {
                Ok(relay) => {
                    tracing::info!(%endpoint, "email relay initialized");
                    Some(Arc::new(relay))
                }
                Err(e) => {
                    tracing::error!(error = %e, "email relay init failed; contact form disabled");
                    None
                }
            }
        }
        None => {
            tracing::warn!("EMAILJS_* not configured; contact form disabled");
            None
        }
    };

    let limits = RateLimitConfig::from_env();
    tracing::info!(
        per_client = limits.per_client_limit,
        per_client_window_secs = limits.per_client_window.as_secs(),
        global = limits.global_limit,
        global_window_secs = limits.global_window.as_secs(),
        "contact rate limits"
    );

    let state =
        state::AppState::new(relay, RateLimiter::new(limits)).with_trust_forwarded_for(config.trust_forwarded_for);

    let app = routes::app(state).expect("router init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
