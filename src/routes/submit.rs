//! Submission validation handler.
//!
//! Accepts a JSON submission, gates it on the client's schema fingerprint,
//! then decodes and shape-checks the payload. Nothing is persisted; accepted
//! submissions are acknowledged with a placeholder row id.

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::config::PLACEHOLDER_ROW;
use crate::error::ApiError;
use crate::state::AppState;

/// A decoded submission. Only constructed once the schema gate has passed.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Target sheet name; must be non-empty
    pub sheet: String,
    /// Field values keyed by column name; absent means an empty submission
    #[serde(default)]
    pub fields: Map<String, Value>,
    /// Client schema fingerprint
    #[serde(rename = "schemaHash")]
    pub schema_hash: String,
}

/// Acknowledgment returned for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmitAck {
    pub ok: bool,
    /// The sheet name echoed back from the request
    pub sheet: String,
    /// Placeholder until submissions land in a real sheet store
    pub row: u64,
}

/// Handler for `POST /submit`.
///
/// The body is read as raw bytes and parsed here rather than through a JSON
/// extractor: clients send submissions under arbitrary content types, and a
/// malformed body must produce a structured error response instead of an
/// extractor rejection.
#[instrument(name = "submit", skip(state, body))]
pub async fn submit(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitAck>, ApiError> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Unexpected(format!("Failed to parse request body: {}", e)))?;

    let request = validate(&value, &state.config.schema.expected_hash)?;

    tracing::debug!(
        sheet = %request.sheet,
        fields = request.fields.len(),
        "Submission accepted"
    );

    Ok(Json(SubmitAck {
        ok: true,
        sheet: request.sheet,
        row: PLACEHOLDER_ROW,
    }))
}

/// Validate a parsed submission body against the expected schema hash.
///
/// Check order matters: the schema gate runs on the raw JSON object before
/// the typed decode, so a client with a stale schema always sees the
/// mismatch error even when the rest of its payload is also malformed.
fn validate(value: &Value, expected_hash: &str) -> Result<SubmitRequest, ApiError> {
    let object = value
        .as_object()
        .ok_or_else(|| ApiError::Unexpected("Request body is not a JSON object".to_string()))?;

    // A missing or non-string schemaHash cannot equal the expected hash
    let schema_hash = object.get("schemaHash").and_then(Value::as_str);
    if schema_hash != Some(expected_hash) {
        return Err(ApiError::SchemaMismatch);
    }

    let request: SubmitRequest =
        serde_json::from_value(value.clone()).map_err(|_| ApiError::InvalidPayload)?;

    if request.sheet.is_empty() {
        return Err(ApiError::InvalidPayload);
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const EXPECTED: &str = "875c62445908b4830afc1a0911c78b58749840b4af2bf8718ceb26a19edbf975";

    #[test]
    fn test_valid_submission_passes() {
        let value = json!({
            "sheet": "Sales",
            "fields": {"a": 1, "b": "two"},
            "schemaHash": EXPECTED,
        });

        let request = validate(&value, EXPECTED).expect("submission should pass");
        assert_eq!(request.sheet, "Sales");
        assert_eq!(request.fields.len(), 2);
    }

    #[test]
    fn test_missing_fields_defaults_to_empty() {
        let value = json!({
            "sheet": "Sales",
            "schemaHash": EXPECTED,
        });

        let request = validate(&value, EXPECTED).expect("submission should pass");
        assert!(request.fields.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let value = json!({
            "sheet": "Sales",
            "fields": {},
            "schemaHash": EXPECTED,
            "clientVersion": "1.2.3",
        });

        assert!(validate(&value, EXPECTED).is_ok());
    }

    #[test]
    fn test_wrong_hash_is_schema_mismatch() {
        let value = json!({
            "sheet": "Sales",
            "fields": {},
            "schemaHash": "wrong",
        });

        let err = validate(&value, EXPECTED).expect_err("wrong hash should fail");
        assert!(matches!(err, ApiError::SchemaMismatch));
    }

    #[test]
    fn test_missing_hash_is_schema_mismatch() {
        let value = json!({ "sheet": "Sales", "fields": {} });

        let err = validate(&value, EXPECTED).expect_err("missing hash should fail");
        assert!(matches!(err, ApiError::SchemaMismatch));
    }

    #[test]
    fn test_non_string_hash_is_schema_mismatch() {
        let value = json!({
            "sheet": "Sales",
            "fields": {},
            "schemaHash": 42,
        });

        let err = validate(&value, EXPECTED).expect_err("non-string hash should fail");
        assert!(matches!(err, ApiError::SchemaMismatch));
    }

    #[test]
    fn test_schema_check_precedes_shape_check() {
        // Empty sheet AND wrong hash: the hash mismatch must win
        let value = json!({
            "sheet": "",
            "fields": {},
            "schemaHash": "wrong",
        });

        let err = validate(&value, EXPECTED).expect_err("should fail");
        assert!(matches!(err, ApiError::SchemaMismatch));
    }

    #[test]
    fn test_hash_comparison_is_case_sensitive() {
        let value = json!({
            "sheet": "Sales",
            "fields": {},
            "schemaHash": EXPECTED.to_uppercase(),
        });

        let err = validate(&value, EXPECTED).expect_err("case mismatch should fail");
        assert!(matches!(err, ApiError::SchemaMismatch));
    }

    #[test]
    fn test_empty_sheet_is_invalid_payload() {
        let value = json!({
            "sheet": "",
            "fields": {},
            "schemaHash": EXPECTED,
        });

        let err = validate(&value, EXPECTED).expect_err("empty sheet should fail");
        assert!(matches!(err, ApiError::InvalidPayload));
    }

    #[test]
    fn test_missing_sheet_is_invalid_payload() {
        let value = json!({
            "fields": {},
            "schemaHash": EXPECTED,
        });

        let err = validate(&value, EXPECTED).expect_err("missing sheet should fail");
        assert!(matches!(err, ApiError::InvalidPayload));
    }

    #[test]
    fn test_non_string_sheet_is_invalid_payload() {
        let value = json!({
            "sheet": 123,
            "fields": {},
            "schemaHash": EXPECTED,
        });

        let err = validate(&value, EXPECTED).expect_err("non-string sheet should fail");
        assert!(matches!(err, ApiError::InvalidPayload));
    }

    #[test]
    fn test_non_mapping_fields_is_invalid_payload() {
        let value = json!({
            "sheet": "Sales",
            "fields": [1, 2, 3],
            "schemaHash": EXPECTED,
        });

        let err = validate(&value, EXPECTED).expect_err("list fields should fail");
        assert!(matches!(err, ApiError::InvalidPayload));
    }

    #[test]
    fn test_non_object_body_is_unexpected() {
        let value = json!([1, 2, 3]);

        let err = validate(&value, EXPECTED).expect_err("array body should fail");
        assert!(matches!(err, ApiError::Unexpected(_)));
    }
}
