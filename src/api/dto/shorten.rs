//! DTOs for the URL shortening endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid absolute URL).
    #[validate(length(min = 1, message = "URL cannot be blank"))]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Details of a shortened URL.
///
/// Returned by both the shorten and the info endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    pub code: String,
}
