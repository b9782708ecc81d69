//! Listing URL construction.

use url::Url;

use crate::client::ClientError;
use crate::model::ListWebhooksOptions;

/// Builds the listing URL for `opts` on top of the hooks `endpoint`.
///
/// A page link is appended verbatim and wins over every filter. Otherwise
/// the set filters are encoded as query parameters in key order.
pub(super) fn list_url(endpoint: Url, opts: &ListWebhooksOptions) -> Result<Url, ClientError> {
    if let Some(link) = opts.cursor() {
        return resolve_page_link(&endpoint, link);
    }

    let pairs = query_pairs(opts);
    let mut url = endpoint;
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(&pairs);
    }
    Ok(url)
}

/// Filter parameters sorted by key, skipping unset and empty values.
fn query_pairs(opts: &ListWebhooksOptions) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    if let Some(destination) = opts.destination.as_deref().filter(|d| !d.is_empty()) {
        pairs.push(("destination", destination.to_string()));
    }
    if let Some(active) = opts.is_active {
        pairs.push(("is_active", active.to_string()));
    }
    if let Some(limit) = opts.limit {
        pairs.push(("limit", limit.to_string()));
    }
    if let Some(page) = opts.page {
        pairs.push(("page", page.to_string()));
    }
    if let Some(scope) = opts.scope.as_deref().filter(|s| !s.is_empty()) {
        pairs.push(("scope", scope.to_string()));
    }

    pairs
}

/// Appends `link` to `endpoint` and checks the result still addresses it.
fn resolve_page_link(endpoint: &Url, link: &str) -> Result<Url, ClientError> {
    let invalid = |reason: &str| ClientError::InvalidPageLink {
        link: link.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(&format!("{endpoint}{link}"))
        .map_err(|e| invalid(&e.to_string()))?;

    if url.origin() != endpoint.origin() {
        return Err(invalid("points to a different host"));
    }
    if url.path() != endpoint.path() {
        return Err(invalid("points outside the webhook collection"));
    }
    if url.username() != endpoint.username() || url.password() != endpoint.password() {
        return Err(invalid("carries credentials"));
    }

    Ok(url)
}
