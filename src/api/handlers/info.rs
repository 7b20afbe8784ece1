//! Handler for short code details.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::shorten::ShortenResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves the original URL and short URL for a given short code.
///
/// # Endpoint
///
/// `GET /api/v1/urls/{code}/info`
///
/// # Errors
///
/// Returns 404 Not Found if the short code was never issued or has been
/// evicted.
pub async fn code_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortenResponse>, AppError> {
    let original_url = state
        .registry
        .resolve(&code)
        .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))?;

    let short_url = state.short_url(&code);

    Ok(Json(ShortenResponse {
        original_url,
        short_url,
        code,
    }))
}
