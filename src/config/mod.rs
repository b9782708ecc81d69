//! Configuration layer for storehooks.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`Action`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! For required fields without defaults (`store_hash`, `access_token`), CLI takes
//! precedence over TOML. An empty value counts as missing.
//!
//! Webhook fields (`--scope`, `--destination`, `--header`, ...) exist only on the
//! command line; the config file holds store credentials and API settings.
//!
//! # Secrets
//!
//! The access token is never printed: the [`ValidatedConfig`] `Display` output
//! masks it and the API client redacts it from its `Debug` output.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, CreateArgs, ListArgs, UpdateArgs};
pub use error::{ConfigError, field};
pub use toml::{ApiSection, StoreSection, TomlConfig, default_config_template};
pub use validated::{Action, ValidatedConfig, write_default_config};
