//! The BigCommerce adapter and its settings.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::client::ClientError;
use crate::http::{HttpError, ReqwestClient};
use crate::model::WebhookId;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.bigcommerce.com";

/// Default OAuth base URL.
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://login.bigcommerce.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default maximum number of body characters kept in error values.
pub const DEFAULT_MAX_ERROR_LENGTH: usize = 1000;

/// Webhook client talking to the BigCommerce v3 API.
///
/// Holds one long-lived transport reused across calls. Every operation is
/// authenticated with the store's access token.
///
/// # Type Parameters
///
/// - `H`: The transport (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use storehooks::bigcommerce::BigCommerceClient;
/// use storehooks::client::WebhookClient;
/// use storehooks::model::ListWebhooksOptions;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = BigCommerceClient::connect(std::time::Duration::from_secs(5))?
///     .with_store("abc123", "access-token");
///
/// let hooks = client.list_webhooks(&ListWebhooksOptions::default()).await?;
/// println!("{} webhook(s)", hooks.data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BigCommerceClient<H = ReqwestClient> {
    pub(super) http: H,
    base_url: String,
    oauth_base_url: String,
    pub(super) store_hash: String,
    pub(super) access_token: String,
    pub(super) max_error_length: usize,
}

impl BigCommerceClient<ReqwestClient> {
    /// Creates a client over reqwest whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the transport cannot be built.
    pub fn connect(timeout: Duration) -> Result<Self, HttpError> {
        Ok(Self::new(ReqwestClient::with_timeout(timeout)?))
    }
}

impl<H> BigCommerceClient<H> {
    /// Creates a client with default settings over the given transport.
    ///
    /// Store hash and access token start empty; set them with
    /// [`with_store`](Self::with_store).
    #[must_use]
    pub fn new(http: H) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            oauth_base_url: DEFAULT_OAUTH_BASE_URL.to_string(),
            store_hash: String::new(),
            access_token: String::new(),
            max_error_length: DEFAULT_MAX_ERROR_LENGTH,
        }
    }

    /// Sets the store hash and its access token.
    #[must_use]
    pub fn with_store(
        mut self,
        store_hash: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        self.store_hash = store_hash.into();
        self.access_token = access_token.into();
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: &Url) -> Self {
        self.base_url = url.as_str().trim_end_matches('/').to_string();
        self
    }

    /// Sets the OAuth base URL.
    #[must_use]
    pub fn with_oauth_base_url(mut self, url: &Url) -> Self {
        self.oauth_base_url = url.as_str().trim_end_matches('/').to_string();
        self
    }

    /// Sets how many body characters error values keep.
    #[must_use]
    pub const fn with_max_error_length(mut self, limit: usize) -> Self {
        self.max_error_length = limit;
        self
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the OAuth base URL.
    #[must_use]
    pub fn oauth_base_url(&self) -> &str {
        &self.oauth_base_url
    }

    /// Returns the store hash.
    #[must_use]
    pub fn store_hash(&self) -> &str {
        &self.store_hash
    }

    /// Returns the maximum number of body characters kept in errors.
    #[must_use]
    pub const fn max_error_length(&self) -> usize {
        self.max_error_length
    }

    /// URL of the store's webhook collection.
    pub(super) fn hooks_endpoint(&self) -> Result<Url, ClientError> {
        parse_endpoint(&format!(
            "{}/stores/{}/v3/hooks",
            self.base_url, self.store_hash
        ))
    }

    /// URL of a single webhook.
    pub(super) fn hook_endpoint(&self, id: WebhookId) -> Result<Url, ClientError> {
        parse_endpoint(&format!(
            "{}/stores/{}/v3/hooks/{id}",
            self.base_url, self.store_hash
        ))
    }
}

impl<H: fmt::Debug> fmt::Debug for BigCommerceClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigCommerceClient")
            .field("http", &self.http)
            .field("base_url", &self.base_url)
            .field("oauth_base_url", &self.oauth_base_url)
            .field("store_hash", &self.store_hash)
            .field("access_token", &"<redacted>")
            .field("max_error_length", &self.max_error_length)
            .finish()
    }
}

fn parse_endpoint(url: &str) -> Result<Url, ClientError> {
    Url::parse(url).map_err(|e| HttpError::InvalidUrl(format!("{url}: {e}")).into())
}
