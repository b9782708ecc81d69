//! Conformance suite every [`WebhookClient`] implementation must pass.
//!
//! The suite is parameterized by a constructor returning a fresh, empty
//! client. Adapters run it unmodified through
//! [`client_contract_tests!`](crate::client_contract_tests), inside this
//! crate's tests or, with the `testing` feature, from another crate.
//!
//! Scenarios panic on the first violated expectation, like any test body.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::WebhookClient;
use crate::model::{ListWebhooksOptions, UpsertWebhookRequest, Webhook};

const ORDER_UPDATED: &str = "store/order/updated";
const CART_CREATED: &str = "store/cart/created";

/// Returns a destination URL not used by any other call.
fn fresh_destination() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("https://hooks{n}.example.test/events/{n}")
}

fn sorted_ids(webhooks: &[Webhook]) -> Vec<u64> {
    let mut ids: Vec<u64> = webhooks.iter().map(|w| w.id).collect();
    ids.sort_unstable();
    ids
}

/// The shared scenarios, run against clients built by `new_client`.
#[derive(Debug)]
pub struct ClientContract<F> {
    new_client: F,
}

#[allow(clippy::missing_panics_doc)]
impl<C, F> ClientContract<F>
where
    C: WebhookClient,
    F: Fn() -> C + Sync,
{
    pub const fn new(new_client: F) -> Self {
        Self { new_client }
    }

    pub async fn creates_lists_and_updates(&self) {
        let mut cli = (self.new_client)();

        let req = UpsertWebhookRequest::new(ORDER_UPDATED, fresh_destination()).with_active(true);
        let created = cli.create_webhook(&req).await.unwrap();

        let by_scope = ListWebhooksOptions::default().with_scope(ORDER_UPDATED);
        let got = cli.list_webhooks(&by_scope).await.unwrap();
        assert_eq!(got.data, vec![created.clone()]);

        let new_destination = fresh_destination();
        let updated = cli
            .update_webhook(
                created.id,
                &UpsertWebhookRequest::default().with_destination(new_destination.clone()),
            )
            .await
            .unwrap();
        assert_eq!(updated.destination, new_destination);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.scope, created.scope);
        assert_eq!(updated.is_active, created.is_active);
        assert_eq!(updated.headers, created.headers);

        let got = cli.list_webhooks(&by_scope).await.unwrap();
        assert_eq!(got.data, vec![updated]);
    }

    pub async fn rejects_duplicate_scope(&self) {
        let mut cli = (self.new_client)();

        let destination = fresh_destination();
        let req = UpsertWebhookRequest::new(ORDER_UPDATED, destination.clone()).with_active(true);
        let first = cli.create_webhook(&req).await.unwrap();

        let req = UpsertWebhookRequest::new(ORDER_UPDATED, fresh_destination()).with_active(true);
        let second = cli.create_webhook(&req).await;
        assert!(
            second.is_err_and(|e| e.is_duplicate_scope()),
            "second create with the same scope must fail as a duplicate"
        );

        let got = cli
            .list_webhooks(&ListWebhooksOptions::default().with_scope(ORDER_UPDATED))
            .await
            .unwrap();
        assert_eq!(got.data, vec![first]);
        assert_eq!(got.data[0].destination, destination);
    }

    pub async fn rejects_duplicate_scope_of_inactive_webhook(&self) {
        let mut cli = (self.new_client)();

        let req = UpsertWebhookRequest::new(ORDER_UPDATED, fresh_destination()).with_active(false);
        cli.create_webhook(&req).await.unwrap();

        let second = cli
            .create_webhook(&UpsertWebhookRequest::new(ORDER_UPDATED, fresh_destination()))
            .await;
        assert!(
            second.is_err_and(|e| e.is_duplicate_scope()),
            "an inactive webhook still holds its scope"
        );
    }

    pub async fn create_echoes_request_and_defaults_to_active(&self) {
        let mut cli = (self.new_client)();

        let req = UpsertWebhookRequest::new(CART_CREATED, fresh_destination())
            .with_header("X-Secret", "s3cr3t");
        let created = cli.create_webhook(&req).await.unwrap();

        assert_eq!(Some(&created.scope), req.scope.as_ref());
        assert_eq!(Some(&created.destination), req.destination.as_ref());
        assert_eq!(created.headers, req.headers);
        assert!(created.is_active);
    }

    pub async fn partial_update_preserves_unset_fields(&self) {
        let mut cli = (self.new_client)();

        let created = cli
            .create_webhook(
                &UpsertWebhookRequest::new(CART_CREATED, fresh_destination())
                    .with_header("X-Secret", "s3cr3t"),
            )
            .await
            .unwrap();

        let updated = cli
            .update_webhook(created.id, &UpsertWebhookRequest::default().with_active(false))
            .await
            .unwrap();

        assert!(!updated.is_active);
        assert_eq!(updated.scope, created.scope);
        assert_eq!(updated.destination, created.destination);
        assert_eq!(updated.headers, created.headers);
    }

    pub async fn filters_by_active_state(&self) {
        let mut cli = (self.new_client)();

        let active = cli
            .create_webhook(&UpsertWebhookRequest::new(ORDER_UPDATED, fresh_destination()))
            .await
            .unwrap();
        let req = UpsertWebhookRequest::new(CART_CREATED, fresh_destination()).with_active(false);
        let inactive = cli.create_webhook(&req).await.unwrap();

        let got = cli
            .list_webhooks(&ListWebhooksOptions::default().with_active(false))
            .await
            .unwrap();
        assert_eq!(got.data, vec![inactive]);

        let got = cli
            .list_webhooks(&ListWebhooksOptions::default().with_active(true))
            .await
            .unwrap();
        assert_eq!(got.data, vec![active]);
    }

    pub async fn page_link_overrides_filters(&self) {
        let mut cli = (self.new_client)();

        let order = cli
            .create_webhook(&UpsertWebhookRequest::new(ORDER_UPDATED, fresh_destination()))
            .await
            .unwrap();
        let cart = cli
            .create_webhook(&UpsertWebhookRequest::new(CART_CREATED, fresh_destination()))
            .await
            .unwrap();

        let opts = ListWebhooksOptions::default()
            .with_scope(ORDER_UPDATED)
            .with_active(false)
            .with_page_link("?page=1&limit=50");
        let got = cli.list_webhooks(&opts).await.unwrap();

        assert_eq!(sorted_ids(&got.data), sorted_ids(&[order, cart]));
    }

    pub async fn missing_id_is_not_found(&self) {
        let mut cli = (self.new_client)();

        let req = UpsertWebhookRequest::default().with_destination(fresh_destination());
        let update = cli.update_webhook(4242, &req).await;
        assert!(update.is_err_and(|e| e.is_not_found()));

        let delete = cli.delete_webhook(4242).await;
        assert!(delete.is_err_and(|e| e.is_not_found()));
    }

    pub async fn delete_removes_and_returns_webhook(&self) {
        let mut cli = (self.new_client)();

        let created = cli
            .create_webhook(&UpsertWebhookRequest::new(ORDER_UPDATED, fresh_destination()))
            .await
            .unwrap();

        let deleted = cli.delete_webhook(created.id).await.unwrap();
        assert_eq!(deleted, created);

        let got = cli.list_webhooks(&ListWebhooksOptions::default()).await.unwrap();
        assert!(got.data.is_empty());

        // The scope is free again once its webhook is gone.
        cli.create_webhook(&UpsertWebhookRequest::new(ORDER_UPDATED, fresh_destination()))
            .await
            .unwrap();
    }

    pub async fn unset_headers_stay_unset(&self) {
        let mut cli = (self.new_client)();

        let created = cli
            .create_webhook(&UpsertWebhookRequest::new(ORDER_UPDATED, fresh_destination()))
            .await
            .unwrap();
        assert!(created.headers.as_ref().is_none_or(HashMap::is_empty));
    }
}

/// Expands to one `#[tokio::test]` per contract scenario.
///
/// `$client` is the adapter type and `$new_client` a non-capturing
/// constructor returning a fresh, empty instance of it. The calling crate
/// needs `tokio` with the `macros` and `rt` features.
///
/// ```ignore
/// mod contract {
///     use storehooks::inmemory::InMemoryClient;
///
///     storehooks::client_contract_tests!(InMemoryClient, InMemoryClient::new);
/// }
/// ```
#[macro_export]
macro_rules! client_contract_tests {
    ($client:ty, $new_client:expr) => {
        fn contract() -> $crate::client::contract::ClientContract<fn() -> $client> {
            $crate::client::contract::ClientContract::new($new_client as fn() -> $client)
        }

        #[tokio::test]
        async fn contract_creates_lists_and_updates() {
            contract().creates_lists_and_updates().await;
        }

        #[tokio::test]
        async fn contract_rejects_duplicate_scope() {
            contract().rejects_duplicate_scope().await;
        }

        #[tokio::test]
        async fn contract_rejects_duplicate_scope_of_inactive_webhook() {
            contract()
                .rejects_duplicate_scope_of_inactive_webhook()
                .await;
        }

        #[tokio::test]
        async fn contract_create_echoes_request_and_defaults_to_active() {
            contract()
                .create_echoes_request_and_defaults_to_active()
                .await;
        }

        #[tokio::test]
        async fn contract_partial_update_preserves_unset_fields() {
            contract().partial_update_preserves_unset_fields().await;
        }

        #[tokio::test]
        async fn contract_filters_by_active_state() {
            contract().filters_by_active_state().await;
        }

        #[tokio::test]
        async fn contract_page_link_overrides_filters() {
            contract().page_link_overrides_filters().await;
        }

        #[tokio::test]
        async fn contract_missing_id_is_not_found() {
            contract().missing_id_is_not_found().await;
        }

        #[tokio::test]
        async fn contract_delete_removes_and_returns_webhook() {
            contract().delete_removes_and_returns_webhook().await;
        }

        #[tokio::test]
        async fn contract_unset_headers_stay_unset() {
            contract().unset_headers_stay_unset().await;
        }
    };
}

