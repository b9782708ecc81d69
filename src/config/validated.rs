//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::header::{HeaderName, HeaderValue};
use url::Url;

use crate::model::{ListWebhooksOptions, UpsertWebhookRequest, WebhookId};

use super::cli::{Cli, Command, CreateArgs, ListArgs, UpdateArgs};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// The API call selected on the command line, with its arguments validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a webhook.
    Create(UpsertWebhookRequest),
    /// Update a webhook.
    Update {
        /// Target webhook
        id: WebhookId,
        /// Fields to change
        request: UpsertWebhookRequest,
    },
    /// List webhooks.
    List(ListWebhooksOptions),
    /// Delete a webhook.
    Delete {
        /// Target webhook
        id: WebhookId,
    },
}

impl Action {
    /// Short name of the action, as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::List(_) => "list",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// This struct represents a complete, validated configuration where all
/// required fields are present and all values have been validated.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
pub struct ValidatedConfig {
    /// Store hash (required)
    pub store_hash: String,

    /// API access token (required)
    pub access_token: String,

    /// API base URL
    pub base_url: Url,

    /// OAuth base URL
    pub oauth_base_url: Url,

    /// Request timeout
    pub timeout: Duration,

    /// Maximum number of body characters kept in error messages
    pub max_error_length: usize,

    /// The API call to make
    pub action: Action,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("store_hash", &self.store_hash)
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("oauth_base_url", &self.oauth_base_url)
            .field("timeout", &self.timeout)
            .field("max_error_length", &self.max_error_length)
            .field("action", &self.action)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ store: {}, access_token: ***, base_url: {}, timeout: {}s, \
             max_error_length: {}, action: {} }}",
            self.store_hash,
            self.base_url,
            self.timeout.as_secs(),
            self.max_error_length,
            self.action.name(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command is `init`, which needs no API configuration
    /// - Required fields are missing (`store_hash`, `access_token`)
    /// - A URL is invalid
    /// - The timeout or maximum error length is zero
    /// - Header format is invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let action = resolve_action(&cli.command)?;

        let store_hash = Self::resolve_store_hash(cli, toml)?;
        let access_token = Self::resolve_access_token(cli, toml)?;

        let base_url = Self::resolve_url(
            cli.base_url.as_deref(),
            toml.and_then(|t| t.api.base_url.as_deref()),
            defaults::BASE_URL,
        )?;
        let oauth_base_url = Self::resolve_url(
            cli.oauth_base_url.as_deref(),
            toml.and_then(|t| t.api.oauth_base_url.as_deref()),
            defaults::OAUTH_BASE_URL,
        )?;

        let timeout = Self::resolve_timeout(cli, toml)?;
        let max_error_length = Self::resolve_max_error_length(cli, toml)?;

        Ok(Self {
            store_hash,
            access_token,
            base_url,
            oauth_base_url,
            timeout,
            max_error_length,
            action,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_store_hash(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        // CLI takes precedence
        let hash = cli
            .store_hash
            .as_deref()
            .or_else(|| toml.and_then(|t| t.store.hash.as_deref()))
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(
                    field::STORE_HASH,
                    "Use --store-hash or set store.hash in config file",
                )
            })?;

        // The hash becomes a path segment of every endpoint
        if !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidValue {
                field: field::STORE_HASH,
                reason: format!("'{hash}' must contain only letters and digits"),
            });
        }

        Ok(hash.to_string())
    }

    fn resolve_access_token(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let token = cli
            .access_token
            .as_deref()
            .or_else(|| toml.and_then(|t| t.store.access_token.as_deref()))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(
                    field::ACCESS_TOKEN,
                    "Use --access-token or set store.access_token in config file",
                )
            })?;

        HeaderValue::from_str(token).map_err(|e| ConfigError::InvalidHeaderValue {
            name: "X-Auth-Token".to_string(),
            reason: e.to_string(),
        })?;

        Ok(token.to_string())
    }

    fn resolve_url(
        cli: Option<&str>,
        toml: Option<&str>,
        default: &str,
    ) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli.or(toml).unwrap_or(default);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.api.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_max_error_length(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<usize, ConfigError> {
        let length = cli
            .max_error_length
            .or_else(|| toml.and_then(|t| t.api.max_error_length))
            .unwrap_or(defaults::MAX_ERROR_LENGTH);

        if length == 0 {
            return Err(ConfigError::InvalidValue {
                field: field::MAX_ERROR_LENGTH,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(length)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn resolve_action(command: &Command) -> Result<Action, ConfigError> {
    match command {
        Command::Init { .. } => Err(ConfigError::NotAnApiCommand("init")),
        Command::Create(args) => create_request(args).map(Action::Create),
        Command::Update(args) => Ok(Action::Update {
            id: args.id,
            request: update_request(args)?,
        }),
        Command::List(args) => Ok(Action::List(list_options(args))),
        Command::Delete { id } => Ok(Action::Delete { id: *id }),
    }
}

fn create_request(args: &CreateArgs) -> Result<UpsertWebhookRequest, ConfigError> {
    let mut request = UpsertWebhookRequest::new(&args.scope, &args.destination);
    if args.inactive {
        request = request.with_active(false);
    }
    request.headers = parse_headers(&args.headers)?;

    request
        .validate_for_create()
        .map_err(|e| ConfigError::InvalidValue {
            field: "create",
            reason: e.to_string(),
        })?;

    Ok(request)
}

fn update_request(args: &UpdateArgs) -> Result<UpsertWebhookRequest, ConfigError> {
    Ok(UpsertWebhookRequest {
        scope: args.scope.clone(),
        destination: args.destination.clone(),
        is_active: args.active,
        headers: parse_headers(&args.headers)?,
    })
}

fn list_options(args: &ListArgs) -> ListWebhooksOptions {
    ListWebhooksOptions {
        page: args.page,
        limit: args.limit,
        is_active: args.active,
        scope: args.scope.clone(),
        destination: args.destination.clone(),
        page_link: args.page_link.clone(),
    }
}

// Helper functions

/// Parses repeated `--header` values; no values means "no headers".
fn parse_headers(values: &[String]) -> Result<Option<HashMap<String, String>>, ConfigError> {
    if values.is_empty() {
        return Ok(None);
    }

    let mut headers = HashMap::new();
    for header_str in values {
        let (name, value) = parse_header_string(header_str)?;
        parse_header_name(&name)?;
        parse_header_value(&name, &value)?;
        headers.insert(name, value);
    }
    Ok(Some(headers))
}

fn parse_header_string(s: &str) -> Result<(String, String), ConfigError> {
    // Try "Key=Value" format first
    if let Some((name, value)) = s.split_once('=') {
        return Ok((name.trim().to_string(), value.trim().to_string()));
    }

    // Try "Key: Value" format
    if let Some((name, value)) = s.split_once(':') {
        return Ok((name.trim().to_string(), value.trim().to_string()));
    }

    Err(ConfigError::InvalidHeader {
        value: s.to_string(),
    })
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse::<HeaderName>()
        .map_err(|e| ConfigError::InvalidHeaderName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
