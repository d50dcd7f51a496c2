//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    api::{api_conditions, api_rank, health},
    diagnose::{diagnose_page, diagnose_submit},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",         get(diagnose_page))
        .route("/diagnose", post(diagnose_submit))

        // API endpoints
        .route("/api/rank",       post(api_rank))
        .route("/api/conditions", get(api_conditions))
        .route("/health",         get(health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
