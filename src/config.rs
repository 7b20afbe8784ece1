//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional and fall back to defaults:
//!
//! - `SHORTLINK_HOST` - Host used to build short URLs (default: `short.ly`)
//! - `SHORTLINK_MAX_CAPACITY` - Per-index entry cap (default: `10000`)
//! - `SHORTLINK_CODE_LENGTH` - Short code length (default: `6`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host used by the HTTP layer to build short URLs.
    pub host: String,
    /// Maximum number of URL/code pairs held by the registry.
    pub max_capacity: usize,
    /// Length of generated short codes.
    pub code_length: usize,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let host = env::var("SHORTLINK_HOST").unwrap_or_else(|_| "short.ly".to_string());

        let max_capacity = env::var("SHORTLINK_MAX_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let code_length = env::var("SHORTLINK_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(6);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            host,
            max_capacity,
            code_length,
            listen_addr,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `host` is blank or contains a path separator
    /// - `max_capacity` is zero or absurdly large
    /// - `code_length` is outside `1..=32`
    /// - the code space is smaller than `max_capacity`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("SHORTLINK_HOST must not be blank");
        }

        if self.host.contains('/') || self.host.contains(char::is_whitespace) {
            anyhow::bail!(
                "SHORTLINK_HOST must be a bare host name, got '{}'",
                self.host
            );
        }

        if self.max_capacity == 0 {
            anyhow::bail!("SHORTLINK_MAX_CAPACITY must be at least 1");
        }

        if self.max_capacity > 100_000_000 {
            anyhow::bail!(
                "SHORTLINK_MAX_CAPACITY is too large (max: 100000000), got {}",
                self.max_capacity
            );
        }

        if self.code_length == 0 || self.code_length > 32 {
            anyhow::bail!(
                "SHORTLINK_CODE_LENGTH must be between 1 and 32, got {}",
                self.code_length
            );
        }

        // 62 alphanumeric symbols per position; a code space smaller than the
        // capacity would make code generation fail long before the cap.
        if let Some(space) = 62u128.checked_pow(self.code_length as u32)
            && space < self.max_capacity as u128
        {
            anyhow::bail!(
                "code space of {} (62^{}) is smaller than SHORTLINK_MAX_CAPACITY {}",
                space,
                self.code_length,
                self.max_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Short URL host: {}", self.host);
        tracing::info!("  Registry capacity: {}", self.max_capacity);
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
