//! storehooks: BigCommerce webhook subscription client
//!
//! A library for creating, updating, listing and deleting the webhooks of a
//! BigCommerce store, with an HTTP adapter for the v3 API and an in-memory
//! adapter that behaves the same for tests.

pub mod bigcommerce;
pub mod client;
pub mod config;
pub mod http;
pub mod inmemory;
pub mod model;
pub mod time;
