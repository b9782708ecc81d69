//! Listing options and paginated list results.

use serde::{Deserialize, Serialize};

use super::{Webhook, non_empty};

/// Options for listing webhooks.
///
/// Filters combine with logical AND; unset and empty filters match
/// everything. When [`page_link`](Self::page_link) is set it takes
/// precedence over every other field, which are then ignored.
///
/// # Example
///
/// ```
/// use storehooks::model::ListWebhooksOptions;
///
/// let first = ListWebhooksOptions::default()
///     .with_scope("store/order/updated")
///     .with_active(true)
///     .with_limit(50);
/// assert!(first.cursor().is_none());
///
/// let next = ListWebhooksOptions::from_page_link("?page=2&limit=50");
/// assert_eq!(next.cursor(), Some("?page=2&limit=50"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWebhooksOptions {
    /// Page number, starting at 1.
    pub page: Option<u32>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Only webhooks with this active state.
    pub is_active: Option<bool>,
    /// Only webhooks with this scope.
    pub scope: Option<String>,
    /// Only webhooks with this destination.
    pub destination: Option<String>,
    /// Server-issued link to a page of a previous listing.
    pub page_link: Option<String>,
}

impl ListWebhooksOptions {
    /// Creates options that resolve a server-issued page link.
    #[must_use]
    pub fn from_page_link(link: impl Into<String>) -> Self {
        Self {
            page_link: Some(link.into()),
            ..Self::default()
        }
    }

    /// Filters by scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Filters by destination.
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Filters by active state.
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    /// Requests a page number.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Limits the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page link, overriding all other options.
    #[must_use]
    pub fn with_page_link(mut self, link: impl Into<String>) -> Self {
        self.page_link = Some(link.into());
        self
    }

    /// Returns the page link if one is set and non-empty.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        non_empty(self.page_link.as_ref())
    }

    /// Returns true if `webhook` satisfies every filter.
    ///
    /// Pagination fields and the page link play no part here.
    #[must_use]
    pub fn matches(&self, webhook: &Webhook) -> bool {
        self.is_active.is_none_or(|active| webhook.is_active == active)
            && non_empty(self.scope.as_ref()).is_none_or(|scope| webhook.scope == scope)
            && non_empty(self.destination.as_ref())
                .is_none_or(|destination| webhook.destination == destination)
    }
}

/// Result of a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListWebhooksResponse {
    /// Webhooks on this page.
    #[serde(default)]
    pub data: Vec<Webhook>,

    /// Pagination details; only reported by the HTTP adapter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl ListWebhooksResponse {
    /// Returns options fetching the next page, if the server reported one.
    #[must_use]
    pub fn next_page(&self) -> Option<ListWebhooksOptions> {
        let next = self.meta.as_ref()?.pagination.links.next.as_ref();
        non_empty(next).map(ListWebhooksOptions::from_page_link)
    }
}

/// Collection metadata of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Pagination and collection totals.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Pagination and collection totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Total number of items in the collection.
    pub total: u64,
    /// Number of items on this page.
    pub count: u64,
    /// Page size.
    pub per_page: u64,
    /// Current page number.
    pub current_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Navigation links.
    pub links: Links,
}

/// Links to the previous, current and next pages.
///
/// Each link is a query string relative to the listing endpoint, suitable
/// for [`ListWebhooksOptions::page_link`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    /// Link to the previous page.
    pub previous: Option<String>,
    /// Link to the current page.
    pub current: Option<String>,
    /// Link to the next page.
    pub next: Option<String>,
}
