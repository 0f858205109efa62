//! Helpers that turn axum extractor rejections into [`AppError`].
//!
//! Handlers take `Result<Json<T>, JsonRejection>` / `Result<Path<T>, PathRejection>`
//! so that malformed input gets the same JSON error envelope as every other
//! failure instead of axum's plain-text rejection.

use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::{JsonRejection, PathRejection};
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// Unwraps a JSON body, mapping deserialization failures to `400`.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result.map(|Json(v)| v).map_err(|err| {
        AppError::bad_request("Invalid request body", json!({ "reason": err.body_text() }))
    })
}

/// Unwraps a JSON body and runs its `validator` rules.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate()?;
    Ok(value)
}

/// Unwraps a path parameter, mapping parse failures to `400`.
pub fn extract_path<T>(result: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    result.map(|Path(v)| v).map_err(|err| {
        AppError::bad_request("Invalid path parameter", json!({ "reason": err.body_text() }))
    })
}
