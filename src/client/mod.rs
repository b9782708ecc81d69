//! The webhook client capability shared by every adapter.
//!
//! [`WebhookClient`] is implemented by
//! [`BigCommerceClient`](crate::bigcommerce::BigCommerceClient), which talks
//! to the platform over HTTP, and by
//! [`InMemoryClient`](crate::inmemory::InMemoryClient), a process-local fake.
//! Both are held to the same behavior by a shared conformance suite.

mod error;

#[cfg(any(test, feature = "testing"))]
pub mod contract;

pub use error::ClientError;

use crate::model::{
    ListWebhooksOptions, ListWebhooksResponse, UpsertWebhookRequest, Webhook, WebhookId,
};

/// Operations for managing a store's webhook subscriptions.
///
/// Methods take `&mut self`: one call runs at a time per client, and
/// callers needing concurrency hold one client per task. Dropping a
/// returned future cancels the call.
///
/// # Example
///
/// ```
/// use storehooks::client::WebhookClient;
/// use storehooks::inmemory::InMemoryClient;
/// use storehooks::model::{ListWebhooksOptions, UpsertWebhookRequest};
///
/// # async fn example() -> Result<(), storehooks::client::ClientError> {
/// let mut client = InMemoryClient::new();
/// let created = client
///     .create_webhook(&UpsertWebhookRequest::new("store/order/updated", "https://x.test/a"))
///     .await?;
/// assert!(created.is_active);
///
/// let listed = client
///     .list_webhooks(&ListWebhooksOptions::default().with_scope("store/order/updated"))
///     .await?;
/// assert_eq!(listed.data, vec![created]);
/// # Ok(())
/// # }
/// ```
pub trait WebhookClient: Send {
    /// Creates a webhook.
    ///
    /// `is_active` defaults to `true` when the request leaves it unset.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidRequest`] if `scope` or `destination` is missing
    /// - a duplicate-scope rejection if a webhook with the same scope exists,
    ///   whether active or not
    /// - transport and response errors for remote adapters
    fn create_webhook(
        &mut self,
        req: &UpsertWebhookRequest,
    ) -> impl std::future::Future<Output = Result<Webhook, ClientError>> + Send;

    /// Updates the fields of webhook `id` that `req` provides.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if `id` does not exist, plus
    /// transport and response errors for remote adapters.
    fn update_webhook(
        &mut self,
        id: WebhookId,
        req: &UpsertWebhookRequest,
    ) -> impl std::future::Future<Output = Result<Webhook, ClientError>> + Send;

    /// Lists the webhooks matching every filter in `opts`.
    ///
    /// With a page link set, filters are ignored and the link is resolved
    /// instead. The order of results is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidPageLink`] for a link that leaves the
    /// listing endpoint, plus transport and response errors for remote
    /// adapters.
    fn list_webhooks(
        &mut self,
        opts: &ListWebhooksOptions,
    ) -> impl std::future::Future<Output = Result<ListWebhooksResponse, ClientError>> + Send;

    /// Deletes webhook `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if `id` does not exist, plus
    /// transport and response errors for remote adapters.
    fn delete_webhook(
        &mut self,
        id: WebhookId,
    ) -> impl std::future::Future<Output = Result<Webhook, ClientError>> + Send;
}
