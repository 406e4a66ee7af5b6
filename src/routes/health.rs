//! Liveness endpoint.
//!
//! Returns a fixed message confirming the process can serve HTTP. Used by
//! the hosting platform's health probes and by clients checking whether the
//! API is reachable before syncing.

use axum::Json;
use serde_json::{json, Value};

use crate::config::LIVENESS_MESSAGE;

/// Liveness handler. Always responds 200 with the fixed message, regardless
/// of query parameters or body.
pub async fn live() -> Json<Value> {
    Json(json!({ "message": LIVENESS_MESSAGE }))
}
