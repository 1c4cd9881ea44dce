//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the health probe and the optional backend proxy under
//! the client's `PROXY_PREFIX`, and stitches them with Leptos SSR rendering
//! under a single Axum router.
//! Hydration assets are served from `/pkg`.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use gestiones_client::config::PROXY_PREFIX;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Health probe and backend proxy.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(&format!("{PROXY_PREFIX}/{{*path}}"), any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full host: API routes + Leptos SSR + static hydration assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(gestiones_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || gestiones_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
