//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::defaults;
use crate::model::WebhookId;

/// storehooks: manage BigCommerce webhook subscriptions
///
/// Creates, updates, lists and deletes the webhooks of one store through
/// the v3 API.
#[derive(Debug, Parser)]
#[command(name = "storehooks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Store hash identifying the store
    #[arg(long = "store-hash", global = true)]
    pub store_hash: Option<String>,

    /// API access token of the store
    #[arg(long = "access-token", global = true)]
    pub access_token: Option<String>,

    /// API base URL
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// OAuth base URL
    #[arg(long = "oauth-base-url", global = true)]
    pub oauth_base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum number of response body characters kept in error messages
    #[arg(long = "max-error-length", global = true)]
    pub max_error_length: Option<usize>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for storehooks
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Create a webhook
    Create(CreateArgs),

    /// Update fields of an existing webhook
    Update(UpdateArgs),

    /// List webhooks
    List(ListArgs),

    /// Delete a webhook
    Delete {
        /// Id of the webhook
        #[arg(long)]
        id: WebhookId,
    },
}

/// Arguments of `create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Event scope to subscribe to, e.g. `store/order/*`
    #[arg(long)]
    pub scope: String,

    /// URL the events are delivered to
    #[arg(long)]
    pub destination: String,

    /// Create the webhook disabled
    #[arg(long)]
    pub inactive: bool,

    /// Delivery headers in 'Key=Value' or 'Key: Value' format (can be specified multiple times)
    #[arg(long = "header", value_name = "K=V")]
    pub headers: Vec<String>,
}

/// Arguments of `update`. Omitted options leave the field unchanged.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Id of the webhook
    #[arg(long)]
    pub id: WebhookId,

    /// New event scope
    #[arg(long)]
    pub scope: Option<String>,

    /// New destination URL
    #[arg(long)]
    pub destination: Option<String>,

    /// New active state
    #[arg(long, value_name = "BOOL")]
    pub active: Option<bool>,

    /// Delivery headers replacing the current ones (can be specified multiple times)
    #[arg(long = "header", value_name = "K=V")]
    pub headers: Vec<String>,
}

/// Arguments of `list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only webhooks with this scope
    #[arg(long)]
    pub scope: Option<String>,

    /// Only webhooks with this destination
    #[arg(long)]
    pub destination: Option<String>,

    /// Only webhooks with this active state
    #[arg(long, value_name = "BOOL")]
    pub active: Option<bool>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long)]
    pub limit: Option<u32>,

    /// Page link from a previous listing; overrides all filters
    #[arg(long = "page-link")]
    pub page_link: Option<String>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
