//! The webhook record and its create/update payload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::client::ClientError;

/// Identifier assigned to a webhook by the store.
pub type WebhookId = u64;

/// A webhook subscription as stored by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Identifier, unique within a store.
    pub id: WebhookId,

    /// Client ID of the app that owns the webhook.
    #[serde(default)]
    pub client_id: String,

    /// Permanent hash of the store.
    #[serde(default)]
    pub store_hash: String,

    /// Subscribed event, e.g. `store/order/*`.
    pub scope: String,

    /// URL the events are delivered to.
    pub destination: String,

    /// Whether events are currently delivered.
    pub is_active: bool,

    /// Creation time, Unix seconds.
    #[serde(default)]
    pub created_at: i64,

    /// Last update time, Unix seconds.
    #[serde(default)]
    pub updated_at: i64,

    /// Custom headers sent along with each delivery.
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
}

/// Request body for creating or updating a webhook.
///
/// Every field is optional. On update, `None` (or an empty string or map)
/// leaves the stored value unchanged. On create, `scope` and `destination`
/// are required and `is_active` defaults to `true`.
///
/// # Example
///
/// ```
/// use storehooks::model::UpsertWebhookRequest;
///
/// let create = UpsertWebhookRequest::new("store/order/updated", "https://hooks.example.com/orders")
///     .with_header("X-Secret", "s3cr3t");
/// assert_eq!(create.is_active, None);
///
/// let deactivate = UpsertWebhookRequest::default().with_active(false);
/// assert!(deactivate.scope.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertWebhookRequest {
    /// Event to subscribe to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// URL the events are delivered to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Active flag; `None` means "unchanged" on update and `true` on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Custom headers sent along with each delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl UpsertWebhookRequest {
    /// Creates a request carrying the two fields required for creation.
    #[must_use]
    pub fn new(scope: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            destination: Some(destination.into()),
            ..Self::default()
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the destination.
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Sets the active flag explicitly.
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    /// Adds a custom delivery header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Checks that the request can create a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] if `scope` or `destination`
    /// is missing or empty.
    pub fn validate_for_create(&self) -> Result<(), ClientError> {
        if non_empty(self.scope.as_ref()).is_none() {
            return Err(ClientError::InvalidRequest(
                "scope is required to create a webhook".to_string(),
            ));
        }
        if non_empty(self.destination.as_ref()).is_none() {
            return Err(ClientError::InvalidRequest(
                "destination is required to create a webhook".to_string(),
            ));
        }
        Ok(())
    }

    /// Overwrites the fields of `webhook` that this request provides.
    ///
    /// Returns `true` if any field was provided.
    pub(crate) fn apply_to(&self, webhook: &mut Webhook) -> bool {
        let mut changed = false;

        if let Some(scope) = non_empty(self.scope.as_ref()) {
            webhook.scope = scope.to_string();
            changed = true;
        }
        if let Some(destination) = non_empty(self.destination.as_ref()) {
            webhook.destination = destination.to_string();
            changed = true;
        }
        if let Some(active) = self.is_active {
            webhook.is_active = active;
            changed = true;
        }
        if let Some(headers) = self.headers.as_ref().filter(|h| !h.is_empty()) {
            webhook.headers = Some(headers.clone());
            changed = true;
        }

        changed
    }
}
