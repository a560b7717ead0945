//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /t/{token}`             - Tracking link (public)
//! - `GET  /health`                - Health check (public)
//! - `POST /campaign/create`       - Create campaign (basic auth)
//! - `POST /campaign/{id}/upload`  - Import targets from CSV (basic auth)
//! - `GET  /campaign/{id}/export`  - Download campaign report (basic auth)
//! - `GET  /campaign/{id}/stats`   - Campaign totals and click rate (basic auth)
//! - `GET  /email/{id}`            - Email template preview (basic auth)
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Authentication** - HTTP Basic against injected credentials
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{
    campaign_stats_handler, create_campaign_handler, email_preview_handler,
    export_campaign_handler, health_handler, track_handler, upload_targets_handler,
};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let admin_routes = Router::new()
        .route("/campaign/create", post(create_campaign_handler))
        .route("/campaign/{id}/upload", post(upload_targets_handler))
        .route("/campaign/{id}/export", get(export_campaign_handler))
        .route("/campaign/{id}/stats", get(campaign_stats_handler))
        .route("/email/{id}", get(email_preview_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/t/{token}", get(track_handler))
        .route("/health", get(health_handler))
        .merge(admin_routes)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
