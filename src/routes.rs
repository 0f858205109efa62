//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/users`                     - User creation and listing
//! - `/api/school/*`              - Students, courses and enrollments
//! - `GET /health`                - Health check
//! - `/api-docs`                  - Swagger UI
//! - `/api-docs/openapi.json`     - OpenAPI document
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::openapi;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `base_url` - public base URL advertised in the OpenAPI document
pub fn app_router(state: AppState, base_url: &str) -> Router {
    Router::new()
        .merge(api::routes::user_routes())
        .nest("/api/school", api::routes::school_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .merge(openapi::swagger_ui(base_url))
        .layer(tracing::layer())
}
