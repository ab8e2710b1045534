//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and the prebuilt study-tool client under a
//! single Axum router. The client bundle is served as static files at `/`;
//! the cron trigger lives under `/api`.

pub mod cron;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Resolve the path to the built client bundle directory.
fn site_dir() -> PathBuf {
    std::env::var("SITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site"))
}

/// API routes + static client bundle at `/`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let site = ServeDir::new(site_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/cron/dispatch", post(cron::dispatch))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
        .fallback_service(site)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
