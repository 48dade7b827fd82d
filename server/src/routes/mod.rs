//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the contact endpoint and health check, then stitches them with
//! Leptos SSR rendering under a single Axum router. Compiled client assets
//! live under `/pkg`; everything else in the site root (images under
//! `/assets`) is served as static files.

pub mod contact;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contact",
            post(contact::send_contact).layer(DefaultBodyLimit::max(contact::MAX_BODY_BYTES)),
        )
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR at `/` + static site files.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portfolio_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portfolio_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(&site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
