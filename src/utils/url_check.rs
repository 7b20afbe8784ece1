//! URL syntax validation for the HTTP layer.
//!
//! The registry trusts its callers and never re-validates URLs; this module
//! is the gate the HTTP layer applies before calling in.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlCheckError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` parses as an absolute HTTP or HTTPS URL.
///
/// Rejects relative references and potentially dangerous protocols like
/// `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlCheckError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlCheckError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn ensure_http_url(input: &str) -> Result<(), UrlCheckError> {
    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlCheckError::UnsupportedProtocol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http() {
        assert!(ensure_http_url("http://example.com").is_ok());
    }

    #[test]
    fn test_accepts_https_with_path_and_query() {
        assert!(ensure_http_url("https://example.com/search?q=rust&lang=en").is_ok());
    }

    #[test]
    fn test_accepts_custom_port() {
        assert!(ensure_http_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let result = ensure_http_url("example.com");
        assert!(matches!(result, Err(UrlCheckError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_not_a_url() {
        let result = ensure_http_url("not a valid url");
        assert!(matches!(result, Err(UrlCheckError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_empty_string() {
        let result = ensure_http_url("");
        assert!(matches!(result, Err(UrlCheckError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_ftp() {
        let result = ensure_http_url("ftp://example.com/file.txt");
        assert!(matches!(result, Err(UrlCheckError::UnsupportedProtocol)));
    }

    #[test]
    fn test_rejects_javascript() {
        let result = ensure_http_url("javascript:alert('xss')");
        assert!(matches!(result, Err(UrlCheckError::UnsupportedProtocol)));
    }

    #[test]
    fn test_rejects_file() {
        let result = ensure_http_url("file:///home/user/document.txt");
        assert!(matches!(result, Err(UrlCheckError::UnsupportedProtocol)));
    }

    #[test]
    fn test_rejects_data() {
        let result = ensure_http_url("data:text/plain,Hello");
        assert!(matches!(result, Err(UrlCheckError::UnsupportedProtocol)));
    }
}
