//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

use crate::bigcommerce;

/// Default API base URL.
pub const BASE_URL: &str = bigcommerce::DEFAULT_BASE_URL;

/// Default OAuth base URL.
pub const OAUTH_BASE_URL: &str = bigcommerce::DEFAULT_OAUTH_BASE_URL;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = bigcommerce::DEFAULT_TIMEOUT.as_secs();

/// Default maximum number of body characters kept in error messages.
pub const MAX_ERROR_LENGTH: usize = bigcommerce::DEFAULT_MAX_ERROR_LENGTH;

/// Default path written by `init`.
pub const CONFIG_FILE: &str = "storehooks.toml";

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
