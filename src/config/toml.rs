//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Store credentials section
    #[serde(default)]
    pub store: StoreSection,

    /// API endpoint and transport section
    #[serde(default)]
    pub api: ApiSection,
}

/// Store credentials section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Store hash
    pub hash: Option<String>,

    /// API access token
    pub access_token: Option<String>,
}

/// API endpoint and transport section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// API base URL
    pub base_url: Option<String>,

    /// OAuth base URL
    pub oauth_base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// Maximum number of body characters kept in error messages
    pub max_error_length: Option<usize>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# storehooks configuration file

[store]
# Store hash, as in https://api.bigcommerce.com/stores/{hash}/v3 (required)
# hash = "abc123"

# API access token with the webhooks scope (required)
# Prefer --access-token over storing the token here.
# access_token = "your-token-here"

[api]
# API base URL (default: https://api.bigcommerce.com)
# base_url = "https://api.bigcommerce.com"

# OAuth base URL (default: https://login.bigcommerce.com)
# oauth_base_url = "https://login.bigcommerce.com"

# Request timeout in seconds (default: 10)
timeout = 10

# Maximum number of response body characters kept in error messages (default: 1000)
# max_error_length = 1000
"#
    .to_string()
}
