//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Request bodies are small JSON documents.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/", get(handlers::api_root))
        // Fleet
        .route("/ships", post(handlers::create_ship))
        .route("/ships/{ship_id}", get(handlers::get_ship))
        .route("/fuel-logs", post(handlers::record_fuel_log))
        // Voyages
        .route("/plan-voyage", post(handlers::plan_voyage))
        .route("/plan-history", get(handlers::plan_history))
        .route("/feedback", post(handlers::submit_feedback))
        // Maintenance
        .route("/maintenance-alerts", get(handlers::maintenance_alerts))
        .route("/maintenance", post(handlers::schedule_maintenance))
        .route(
            "/maintenance/{maintenance_id}/complete",
            post(handlers::complete_maintenance),
        )
        .route(
            "/maintenance/{maintenance_id}/reschedule",
            post(handlers::reschedule_maintenance),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_v1)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
