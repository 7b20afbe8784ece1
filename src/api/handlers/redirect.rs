//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::registry::is_valid_code;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Path segments that are not exactly `code_length` alphanumeric characters
/// can never have been issued, so they are rejected without consulting the
/// registry.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_code(&code, state.registry.code_length()) {
        return Err(AppError::not_found(
            "Short code not found",
            json!({ "code": code }),
        ));
    }

    let original_url = state
        .registry
        .resolve(&code)
        .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))?;

    debug!("redirecting {} -> {}", code, original_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
}
