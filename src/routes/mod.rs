//! HTTP route handlers for the submission API.
//!
//! Two endpoints: a liveness probe at `/` and the submission validator at
//! `/submit`. All API responses are marked `Cache-Control: no-store` since
//! validation results depend on the configured schema hash and must never
//! be served stale by an upstream cache.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod submit;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Cache-Control value applied to every API response
pub const CACHE_CONTROL_API: &str = "no-store";

/// Creates the Axum router with all routes and response headers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::live))
        .route("/submit", post(submit::submit))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_API),
        ))
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
