use std::sync::Arc;

use crate::registry::CodeRegistry;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CodeRegistry>,
    pub host: Arc<str>,
}

impl AppState {
    pub fn new(registry: Arc<CodeRegistry>, host: &str) -> Self {
        Self {
            registry,
            host: Arc::from(host),
        }
    }

    /// Constructs the full short URL for a code.
    ///
    /// Always uses HTTPS protocol.
    pub fn short_url(&self, code: &str) -> String {
        format!("https://{}/{}", self.host.trim_end_matches('/'), code)
    }
}
