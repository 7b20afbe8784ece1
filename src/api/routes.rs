//! API route configuration.

use crate::api::handlers::{code_info_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned REST API routes, nested under `/api/v1`.
///
/// # Endpoints
///
/// - `POST /urls/shorten`     - Create (or look up) a short link
/// - `GET  /urls/{code}/info` - Short code details
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls/shorten", post(shorten_handler))
        .route("/urls/{code}/info", get(code_info_handler))
}
