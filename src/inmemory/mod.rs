//! Process-local webhook client for tests.
//!
//! [`InMemoryClient`] keeps webhooks in an owned map and enforces the same
//! rules as the platform, so code written against
//! [`WebhookClient`](crate::client::WebhookClient) can be tested without
//! network access.

mod client;


pub use client::InMemoryClient;
