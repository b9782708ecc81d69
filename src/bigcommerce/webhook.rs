//! Webhook operations over the v3 hooks endpoints.

use http::{Method, StatusCode};
use serde::Deserialize;

use super::BigCommerceClient;
use super::pipeline::ApiCall;
use super::query::list_url;
use crate::client::{ClientError, WebhookClient};
use crate::http::HttpClient;
use crate::model::{
    ListWebhooksOptions, ListWebhooksResponse, UpsertWebhookRequest, Webhook, WebhookId,
};

/// Wrapper around singular resources in API responses.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Reports a 404 on a single webhook as a missing id.
fn not_found_as(id: WebhookId) -> impl FnOnce(ClientError) -> ClientError {
    move |err| {
        if err.status() == Some(StatusCode::NOT_FOUND) {
            ClientError::NotFound { id }
        } else {
            err
        }
    }
}

/// Whether the platform refused a create as conflicting with existing state.
fn is_conflict(err: &ClientError) -> bool {
    err.status()
        .is_some_and(|s| s == StatusCode::CONFLICT || s == StatusCode::UNPROCESSABLE_ENTITY)
}

impl<H: HttpClient> BigCommerceClient<H> {
    /// Reports a refused create as [`ClientError::DuplicateScope`] when the
    /// scope is already taken, and returns `err` unchanged otherwise.
    async fn confirm_duplicate(
        &mut self,
        req: &UpsertWebhookRequest,
        err: ClientError,
    ) -> ClientError {
        let Some(scope) = req.scope.as_deref() else {
            return err;
        };

        let by_scope = ListWebhooksOptions::default().with_scope(scope);
        match self.list_webhooks(&by_scope).await {
            Ok(listed) if listed.data.iter().any(|w| w.scope == scope) => {
                tracing::debug!("Scope {scope} is already taken");
                ClientError::DuplicateScope {
                    scope: scope.to_string(),
                }
            }
            Ok(_) => err,
            Err(lookup) => {
                tracing::debug!("Could not check scope {scope}: {lookup}");
                err
            }
        }
    }
}

impl<H: HttpClient> WebhookClient for BigCommerceClient<H> {
    async fn create_webhook(
        &mut self,
        req: &UpsertWebhookRequest,
    ) -> Result<Webhook, ClientError> {
        req.validate_for_create()?;

        let call = ApiCall::new(Method::POST, self.hooks_endpoint()?)
            .authenticated()
            .json(req)?
            .expecting_body();
        let created: Envelope<Webhook> = match self.request(call).await {
            Ok(response) => response.into_data()?,
            Err(err) if is_conflict(&err) => return Err(self.confirm_duplicate(req, err).await),
            Err(err) => return Err(err),
        };

        tracing::info!("Created webhook {} for scope {}", created.data.id, created.data.scope);
        Ok(created.data)
    }

    async fn update_webhook(
        &mut self,
        id: WebhookId,
        req: &UpsertWebhookRequest,
    ) -> Result<Webhook, ClientError> {
        let call = ApiCall::new(Method::PUT, self.hook_endpoint(id)?)
            .authenticated()
            .json(req)?
            .expecting_body();
        let updated: Envelope<Webhook> = self
            .request(call)
            .await
            .map_err(not_found_as(id))?
            .into_data()?;

        tracing::info!("Updated webhook {id}");
        Ok(updated.data)
    }

    async fn list_webhooks(
        &mut self,
        opts: &ListWebhooksOptions,
    ) -> Result<ListWebhooksResponse, ClientError> {
        let url = list_url(self.hooks_endpoint()?, opts)?;
        let call = ApiCall::new(Method::GET, url)
            .authenticated()
            .expecting_body();
        let listed: ListWebhooksResponse = self.request(call).await?.into_data()?;

        tracing::debug!("Listed {} webhook(s)", listed.data.len());
        Ok(listed)
    }

    async fn delete_webhook(&mut self, id: WebhookId) -> Result<Webhook, ClientError> {
        let call = ApiCall::new(Method::DELETE, self.hook_endpoint(id)?)
            .authenticated()
            .expecting_body();
        let deleted: Envelope<Webhook> = self
            .request(call)
            .await
            .map_err(not_found_as(id))?
            .into_data()?;

        tracing::info!("Deleted webhook {id}");
        Ok(deleted.data)
    }
}
