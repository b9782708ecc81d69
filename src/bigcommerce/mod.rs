//! HTTP-backed webhook client for the BigCommerce v3 API.
//!
//! This module provides:
//! - The adapter and its settings ([`BigCommerceClient`])
//! - The request pipeline shared by every operation (serialization,
//!   authentication headers, status classification, decoding)
//! - Listing URL construction, including page link resolution
//! - The [`WebhookClient`](crate::client::WebhookClient) implementation
//!
//! # Status classification
//!
//! | Response | Result |
//! |---|---|
//! | status ≥ 400 | [`ClientError::Status`] with a truncated body |
//! | status < 300, empty body, result expected | [`ClientError::NoContent`] |
//! | status < 300, body does not decode | [`ClientError::Decode`] with a truncated body |
//! | status 300..=399 | [`ClientError::UnexpectedStatus`] |
//!
//! [`ClientError::Status`]: crate::client::ClientError::Status
//! [`ClientError::NoContent`]: crate::client::ClientError::NoContent
//! [`ClientError::Decode`]: crate::client::ClientError::Decode
//! [`ClientError::UnexpectedStatus`]: crate::client::ClientError::UnexpectedStatus

mod client;
mod pipeline;
mod query;
mod webhook;

#[cfg(test)]
mod fake_api;
#[cfg(test)]
mod test_fixtures;

pub use client::{
    BigCommerceClient, DEFAULT_BASE_URL, DEFAULT_MAX_ERROR_LENGTH, DEFAULT_OAUTH_BASE_URL,
    DEFAULT_TIMEOUT,
};
