//! Application execution logic.
//!
//! This module turns a validated configuration into one API call and
//! prints its result as JSON.

use thiserror::Error;

use storehooks::bigcommerce::BigCommerceClient;
use storehooks::client::{ClientError, WebhookClient};
use storehooks::config::{Action, ValidatedConfig};
use storehooks::http::{HttpError, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP transport.
    #[error("Failed to create HTTP client: {0}")]
    Transport(#[source] HttpError),

    /// The API call failed.
    #[error("{action} failed: {source}")]
    Api {
        /// Name of the failed action
        action: &'static str,
        /// Underlying client error
        #[source]
        source: ClientError,
    },

    /// Failed to render the result.
    #[error("Failed to render output: {0}")]
    Output(#[source] serde_json::Error),
}

/// Executes the configured action against the API and prints the result.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP transport cannot be built
/// - The API call fails
/// - The result cannot be rendered as JSON
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires a reachable
/// API endpoint.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let mut client = create_client(&config)?;

    let output = perform(&mut client, config.action).await?;
    println!("{output}");

    Ok(())
}

/// Creates the API client from configuration.
fn create_client(config: &ValidatedConfig) -> Result<BigCommerceClient<ReqwestClient>, RunError> {
    let client = BigCommerceClient::connect(config.timeout)
        .map_err(RunError::Transport)?
        .with_store(&config.store_hash, &config.access_token)
        .with_base_url(&config.base_url)
        .with_oauth_base_url(&config.oauth_base_url)
        .with_max_error_length(config.max_error_length);

    tracing::debug!("Using API at {}", client.base_url());
    Ok(client)
}

/// Runs `action` on `client` and renders the result as pretty JSON.
async fn perform<C: WebhookClient>(client: &mut C, action: Action) -> Result<String, RunError> {
    let name = action.name();
    let api = |source| RunError::Api {
        action: name,
        source,
    };

    let rendered = match action {
        Action::Create(request) => {
            let created = client.create_webhook(&request).await.map_err(api)?;
            tracing::info!("Created webhook {}", created.id);
            serde_json::to_string_pretty(&created)
        }
        Action::Update { id, request } => {
            let updated = client.update_webhook(id, &request).await.map_err(api)?;
            serde_json::to_string_pretty(&updated)
        }
        Action::List(options) => {
            let listed = client.list_webhooks(&options).await.map_err(api)?;
            if let Some(next) = listed.next_page().and_then(|o| o.page_link) {
                tracing::info!("More results: --page-link '{next}'");
            }
            serde_json::to_string_pretty(&listed)
        }
        Action::Delete { id } => {
            let deleted = client.delete_webhook(id).await.map_err(api)?;
            tracing::info!("Deleted webhook {id}");
            serde_json::to_string_pretty(&deleted)
        }
    };

    rendered.map_err(RunError::Output)
}
