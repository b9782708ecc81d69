//! Value types exchanged with webhook clients.
//!
//! - [`Webhook`]: a stored webhook subscription
//! - [`UpsertWebhookRequest`]: payload for create and update
//! - [`ListWebhooksOptions`]: filters, pagination and cursor for listing
//! - [`ListWebhooksResponse`], [`Meta`], [`Pagination`], [`Links`]: list results
//!
//! Field names follow the platform's JSON wire format so the same types
//! serve as request bodies and response payloads.

mod list;
mod webhook;


pub use list::{Links, ListWebhooksOptions, ListWebhooksResponse, Meta, Pagination};
pub use webhook::{UpsertWebhookRequest, Webhook, WebhookId};

/// Returns the string when it is present and non-empty.
///
/// Empty strings are treated the same as absent ones for both update
/// fields and list filters.
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}
