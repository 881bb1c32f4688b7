//! HTTP routes
//!
//! One router per resource, assembled into the application router here.

pub mod asset_routes;
pub mod location_routes;
pub mod service_history_routes;
pub mod update_log_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_layer;
use crate::state::AppState;

/// Full application router with middleware applied
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/assets", asset_routes::create_asset_router())
        .nest("/service-histories", service_history_routes::create_service_history_router())
        .nest("/services", service_history_routes::create_service_history_router())
        .nest("/logs", update_log_routes::create_update_log_router())
        .nest("/areas", location_routes::create_area_router())
        .nest("/schools", location_routes::create_school_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
