//! Utility functions used across the application.
//!
//! - [`url_check`] - URL syntax validation for the HTTP layer

pub mod url_check;
