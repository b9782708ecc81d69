//! Transport layer used by the HTTP-backed webhook adapter.
//!
//! This module provides:
//! - Request and response values ([`HttpRequest`], [`HttpResponse`])
//! - The transport abstraction ([`HttpClient`])
//! - The production transport built on reqwest ([`ReqwestClient`])
//! - Transport failures ([`HttpError`])

mod client;
mod error;
mod message;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use message::{HttpClient, HttpRequest, HttpResponse};
