//! Tests for validated configuration.

use std::io::Write;
use std::time::Duration;

use tempfile::{NamedTempFile, tempdir};

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{Action, ValidatedConfig, write_default_config};
use crate::model::ListWebhooksOptions;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["storehooks"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper for a command with store credentials on the command line
fn with_store(args: &[&str]) -> Cli {
    let mut full_args = vec!["--store-hash", "abc123", "--access-token", "tok"];
    full_args.extend(args);
    cli(&full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod required_fields {
    use super::*;

    #[test]
    fn missing_store_hash_returns_error() {
        let cli = cli(&["--access-token", "tok", "list"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired {
                field: "store_hash",
                ..
            })
        ));
    }

    #[test]
    fn missing_access_token_returns_error() {
        let cli = cli(&["--store-hash", "abc123", "list"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired {
                field: "access_token",
                ..
            })
        ));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let cli = cli(&["--store-hash", "", "--access-token", "tok", "list"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired {
                field: "store_hash",
                ..
            })
        ));
    }

    #[test]
    fn required_fields_from_toml() {
        let cli = cli(&["list"]);
        let toml = toml(
            r#"
            [store]
            hash = "abc123"
            access_token = "tok"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.store_hash, "abc123");
        assert_eq!(config.access_token, "tok");
    }

    #[test]
    fn init_is_not_an_api_command() {
        let cli = with_store(&["init"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(result, Err(ConfigError::NotAnApiCommand("init"))));
    }
}

mod precedence {
    use super::*;

    #[test]
    fn cli_overrides_toml() {
        let cli = cli(&[
            "--store-hash",
            "fromcli",
            "--timeout",
            "3",
            "--base-url",
            "http://127.0.0.1:9000",
            "list",
        ]);
        let toml = toml(
            r#"
            [store]
            hash = "fromtoml"
            access_token = "tok"

            [api]
            base_url = "https://api.example.test"
            timeout = 30
            max_error_length = 50
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.store_hash, "fromcli");
        assert_eq!(config.access_token, "tok");
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.max_error_length, 50);
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = ValidatedConfig::from_raw(&with_store(&["list"]), None).unwrap();

        assert_eq!(config.base_url.as_str(), "https://api.bigcommerce.com/");
        assert_eq!(config.oauth_base_url.as_str(), "https://login.bigcommerce.com/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_error_length, 1000);
        assert!(!config.verbose);
    }
}

mod validation {
    use super::*;

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ValidatedConfig::from_raw(&with_store(&["--timeout", "0", "list"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "timeout",
                ..
            })
        ));
    }

    #[test]
    fn zero_max_error_length_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&with_store(&["--max-error-length", "0", "list"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "max_error_length",
                ..
            })
        ));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let cli = with_store(&["--base-url", "not a url", "list"]);
        let result = ValidatedConfig::from_raw(&cli, None);
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&with_store(&["--base-url", "ftp://x.test", "list"]), None);
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn store_hash_must_be_a_path_segment() {
        let cli = cli(&["--store-hash", "abc/../x", "--access-token", "tok", "list"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "store_hash",
                ..
            })
        ));
    }

    #[test]
    fn token_must_be_a_header_value() {
        let cli = cli(&["--store-hash", "abc123", "--access-token", "a\nb", "list"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(result, Err(ConfigError::InvalidHeaderValue { .. })));
    }

    #[test]
    fn display_masks_token() {
        let cli = cli(&["--store-hash", "abc123", "--access-token", "sekrit", "list"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        let shown = config.to_string();

        assert!(shown.contains("abc123"));
        assert!(shown.contains("***"));
        assert!(!shown.contains("sekrit"));
        assert!(shown.contains("action: list"));
    }

    #[test]
    fn debug_redacts_token() {
        let cli = cli(&["--store-hash", "abc123", "--access-token", "sekrit", "list"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        let shown = format!("{config:?}");

        assert!(shown.contains("abc123"));
        assert!(shown.contains("<redacted>"));
        assert!(!shown.contains("sekrit"));
    }
}

mod actions {
    use super::*;

    #[test]
    fn create_builds_request() {
        let cli = with_store(&[
            "create",
            "--scope",
            "store/order/*",
            "--destination",
            "https://x.test/a",
            "--inactive",
            "--header",
            "X-Secret=s3cr3t",
        ]);

        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        let Action::Create(request) = config.action else {
            panic!("Expected create action");
        };
        assert_eq!(request.scope.as_deref(), Some("store/order/*"));
        assert_eq!(request.destination.as_deref(), Some("https://x.test/a"));
        assert_eq!(request.is_active, Some(false));
        assert_eq!(request.headers.unwrap()["X-Secret"], "s3cr3t");
    }

    #[test]
    fn create_leaves_active_unset_by_default() {
        let cli = with_store(&["create", "--scope", "s", "--destination", "https://x.test"]);

        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert!(matches!(config.action, Action::Create(ref r) if r.is_active.is_none()));
    }

    #[test]
    fn create_with_empty_scope_is_rejected() {
        let cli = with_store(&["create", "--scope", "", "--destination", "https://x.test"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn update_keeps_unset_fields_unset() {
        let cli = with_store(&["update", "--id", "9", "--destination", "https://x.test/b"]);

        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        let Action::Update { id, request } = config.action else {
            panic!("Expected update action");
        };
        assert_eq!(id, 9);
        assert_eq!(request.destination.as_deref(), Some("https://x.test/b"));
        assert!(request.scope.is_none());
        assert!(request.is_active.is_none());
        assert!(request.headers.is_none());
    }

    #[test]
    fn header_colon_format_is_accepted() {
        let cli = with_store(&["update", "--id", "9", "--header", "X-Tenant: acme"]);

        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        let Action::Update { request, .. } = config.action else {
            panic!("Expected update action");
        };
        assert_eq!(request.headers.unwrap()["X-Tenant"], "acme");
    }

    #[test]
    fn malformed_header_is_rejected() {
        let cli = with_store(&["update", "--id", "9", "--header", "no-separator"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let cli = with_store(&["update", "--id", "9", "--header", "bad name=v"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(result, Err(ConfigError::InvalidHeaderName { .. })));
    }

    #[test]
    fn list_maps_every_option() {
        let cli = with_store(&[
            "list",
            "--scope",
            "store/order/*",
            "--destination",
            "https://x.test/a",
            "--active",
            "true",
            "--page",
            "2",
            "--limit",
            "5",
            "--page-link",
            "?page=3",
        ]);

        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        let expected = ListWebhooksOptions::default()
            .with_scope("store/order/*")
            .with_destination("https://x.test/a")
            .with_active(true)
            .with_page(2)
            .with_limit(5)
            .with_page_link("?page=3");
        assert_eq!(config.action, Action::List(expected));
    }

    #[test]
    fn delete_carries_id() {
        let cli = with_store(&["delete", "--id", "3"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();
        assert_eq!(config.action, Action::Delete { id: 3 });
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[store]\nhash = \"abc123\"\naccess_token = \"tok\"").unwrap();
        let path = file.path().to_str().unwrap();

        let config = ValidatedConfig::load(&cli(&["--config", path, "list"])).unwrap();

        assert_eq!(config.store_hash, "abc123");
    }

    #[test]
    fn load_without_config_uses_cli_only() {
        let config = ValidatedConfig::load(&with_store(&["list"])).unwrap();
        assert_eq!(config.store_hash, "abc123");
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap(), "list"]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn write_default_config_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storehooks.toml");

        write_default_config(&path).unwrap();

        let written = TomlConfig::load(&path).unwrap();
        assert_eq!(written.api.timeout, Some(10));
    }

    #[test]
    fn write_default_config_into_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/storehooks.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
