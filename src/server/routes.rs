// src/server/routes.rs
//! Axum router configuration for pantryd
//!
//! Defines all HTTP routes for the recipe REST API:
//! - `/recipes` - List and create recipes
//! - `/recipes/:id` - Replace and delete a single recipe
//! - `/health` - Health check endpoint
//! - `/metrics` - Prometheus text metrics

use crate::error::Error;
use crate::server::handlers::recipes;
use crate::server::SharedState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Recipe collection
        .route(
            "/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route(
            "/recipes/:id",
            put(recipes::replace_recipe).delete(recipes::delete_recipe),
        )
        // Health check
        .route("/health", get(health_handler))
        // Metrics (Prometheus format)
        .route("/metrics", get(metrics_handler))
        .layer(cors)
        .with_state(state)
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub recipes: usize,
    pub uptime_secs: u64,
}

/// Health check endpoint
///
/// GET /health
async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    let recipes = state.store.read().await.len();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        recipes,
        uptime_secs: state.metrics.snapshot().uptime_secs,
    })
}

/// Metrics endpoint (Prometheus format)
///
/// GET /metrics
async fn metrics_handler(State(state): State<SharedState>) -> String {
    let snapshot = state.metrics.snapshot();
    let stored = state.store.read().await.len();

    format!(
        r#"# HELP pantry_requests_total Total recipe requests handled
# TYPE pantry_requests_total counter
pantry_requests_total {}

# HELP pantry_recipes_created Recipes created
# TYPE pantry_recipes_created counter
pantry_recipes_created {}

# HELP pantry_recipes_replaced Recipes replaced
# TYPE pantry_recipes_replaced counter
pantry_recipes_replaced {}

# HELP pantry_recipes_deleted Recipes removed
# TYPE pantry_recipes_deleted counter
pantry_recipes_deleted {}

# HELP pantry_validation_failures Requests rejected by validation
# TYPE pantry_validation_failures counter
pantry_validation_failures {}

# HELP pantry_not_found Replace requests for absent recipes
# TYPE pantry_not_found counter
pantry_not_found {}

# HELP pantry_recipes_stored Recipes currently stored
# TYPE pantry_recipes_stored gauge
pantry_recipes_stored {}

# HELP pantry_uptime_seconds Server uptime in seconds
# TYPE pantry_uptime_seconds gauge
pantry_uptime_seconds {}
"#,
        snapshot.requests_total,
        snapshot.recipes_created,
        snapshot.recipes_replaced,
        snapshot.recipes_deleted,
        snapshot.validation_failures,
        snapshot.not_found,
        stored,
        snapshot.uptime_secs,
    )
}

/// Error response wrapper for the JSON error format
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.0.kind(),
            "message": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}
