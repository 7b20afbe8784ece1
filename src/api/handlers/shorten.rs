//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_check::ensure_http_url;

/// Creates (or returns the existing) short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1/urls/shorten`
///
/// # Idempotence
///
/// Shortening the same URL twice returns the same code; no new code is
/// generated and no error is raised for the duplicate call.
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.google.com" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "originalUrl": "https://www.google.com",
///   "shortUrl": "https://short.ly/a1B2c3",
///   "code": "a1B2c3"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is blank, malformed, or not HTTP(S).
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;
    ensure_http_url(&payload.url)
        .map_err(|e| AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() })))?;

    let code = state.registry.shorten(&payload.url)?;
    let short_url = state.short_url(&code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            original_url: payload.url,
            short_url,
            code,
        }),
    ))
}
