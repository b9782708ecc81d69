//! In-memory implementation of the webhook client.

use std::collections::BTreeMap;

use crate::client::{ClientError, WebhookClient};
use crate::model::{
    ListWebhooksOptions, ListWebhooksResponse, UpsertWebhookRequest, Webhook, WebhookId,
};
use crate::time::{Clock, SystemClock};

/// A webhook client backed by an owned map.
///
/// Ids are assigned from an incrementing sequence starting at 1 and are
/// never reused. Listing ignores `page` and `limit` and returns every
/// match without pagination metadata; a page link resolves to the whole
/// collection.
///
/// # Type Parameters
///
/// - `C`: The clock stamping `created_at` / `updated_at` (defaults to [`SystemClock`])
///
/// # Example
///
/// ```
/// use storehooks::inmemory::InMemoryClient;
/// use storehooks::time::ManualClock;
///
/// let client = InMemoryClient::new()
///     .with_store("abc123", "my-app")
///     .with_clock(ManualClock::new(1_700_000_000));
/// assert!(client.is_empty());
/// ```
#[derive(Debug)]
pub struct InMemoryClient<C = SystemClock> {
    clock: C,
    last_id: WebhookId,
    store_hash: String,
    client_id: String,
    webhooks: BTreeMap<WebhookId, Webhook>,
}

impl InMemoryClient<SystemClock> {
    /// Creates an empty client using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: SystemClock,
            last_id: 0,
            store_hash: String::new(),
            client_id: String::new(),
            webhooks: BTreeMap::new(),
        }
    }
}

impl Default for InMemoryClient<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryClient<C> {
    /// Replaces the clock used for timestamps.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> InMemoryClient<C2> {
        InMemoryClient {
            clock,
            last_id: self.last_id,
            store_hash: self.store_hash,
            client_id: self.client_id,
            webhooks: self.webhooks,
        }
    }

    /// Sets the store hash and client id stamped onto created webhooks.
    #[must_use]
    pub fn with_store(
        mut self,
        store_hash: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        self.store_hash = store_hash.into();
        self.client_id = client_id.into();
        self
    }

    /// Returns the number of stored webhooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.webhooks.len()
    }

    /// Returns true if no webhook is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.webhooks.is_empty()
    }

    /// Returns true if a webhook other than `except` holds `scope`.
    fn scope_taken(&self, scope: &str, except: Option<WebhookId>) -> bool {
        self.webhooks
            .values()
            .any(|w| w.scope == scope && Some(w.id) != except)
    }
}

impl<C: Clock> InMemoryClient<C> {
    pub(crate) fn create(&mut self, req: &UpsertWebhookRequest) -> Result<Webhook, ClientError> {
        req.validate_for_create()?;

        let scope = req.scope.clone().unwrap_or_default();
        if self.scope_taken(&scope, None) {
            return Err(ClientError::DuplicateScope { scope });
        }

        let now = self.clock.unix_seconds();
        self.last_id += 1;
        let webhook = Webhook {
            id: self.last_id,
            client_id: self.client_id.clone(),
            store_hash: self.store_hash.clone(),
            scope,
            destination: req.destination.clone().unwrap_or_default(),
            is_active: req.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
            headers: req.headers.clone(),
        };

        tracing::debug!("Created webhook {} for scope {}", webhook.id, webhook.scope);
        self.webhooks.insert(webhook.id, webhook.clone());
        Ok(webhook)
    }

    pub(crate) fn update(
        &mut self,
        id: WebhookId,
        req: &UpsertWebhookRequest,
    ) -> Result<Webhook, ClientError> {
        if !self.webhooks.contains_key(&id) {
            return Err(ClientError::NotFound { id });
        }

        if let Some(scope) = req.scope.as_deref().filter(|s| !s.is_empty()) {
            if self.scope_taken(scope, Some(id)) {
                return Err(ClientError::DuplicateScope {
                    scope: scope.to_string(),
                });
            }
        }

        let now = self.clock.unix_seconds();
        let webhook = self
            .webhooks
            .get_mut(&id)
            .ok_or(ClientError::NotFound { id })?;
        if req.apply_to(webhook) {
            webhook.updated_at = now;
        }

        tracing::debug!("Updated webhook {id}");
        Ok(webhook.clone())
    }

    pub(crate) fn list(&self, opts: &ListWebhooksOptions) -> ListWebhooksResponse {
        let data = if opts.cursor().is_some() {
            self.webhooks.values().cloned().collect()
        } else {
            self.webhooks
                .values()
                .filter(|w| opts.matches(w))
                .cloned()
                .collect()
        };

        ListWebhooksResponse { data, meta: None }
    }

    pub(crate) fn delete(&mut self, id: WebhookId) -> Result<Webhook, ClientError> {
        let webhook = self
            .webhooks
            .remove(&id)
            .ok_or(ClientError::NotFound { id })?;

        tracing::debug!("Deleted webhook {id}");
        Ok(webhook)
    }
}

impl<C: Clock> WebhookClient for InMemoryClient<C> {
    async fn create_webhook(
        &mut self,
        req: &UpsertWebhookRequest,
    ) -> Result<Webhook, ClientError> {
        self.create(req)
    }

    async fn update_webhook(
        &mut self,
        id: WebhookId,
        req: &UpsertWebhookRequest,
    ) -> Result<Webhook, ClientError> {
        self.update(id, req)
    }

    async fn list_webhooks(
        &mut self,
        opts: &ListWebhooksOptions,
    ) -> Result<ListWebhooksResponse, ClientError> {
        Ok(self.list(opts))
    }

    async fn delete_webhook(&mut self, id: WebhookId) -> Result<Webhook, ClientError> {
        self.delete(id)
    }
}
