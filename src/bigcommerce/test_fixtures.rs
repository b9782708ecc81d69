//! Shared fixtures for the adapter tests.

use std::sync::{Arc, Mutex};

use super::BigCommerceClient;
use crate::http::{HttpClient, HttpError, HttpRequest, HttpResponse};

pub(super) const STORE_HASH: &str = "abc123";
pub(super) const ACCESS_TOKEN: &str = "tok-3xample";

/// Transport that records requests and replays a queue of responses.
#[derive(Debug, Default)]
pub(super) struct ScriptedTransport {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(super) fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// A transport answering every call once with `status` and `body`.
    pub(super) fn replying(status: u16, body: &str) -> Arc<Self> {
        Self::new(vec![Ok(response(status, body))])
    }

    pub(super) fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(super) fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl HttpClient for ScriptedTransport {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for Arc<ScriptedTransport> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

pub(super) fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.as_bytes().to_vec(),
    )
}

/// A client for the test store over `transport`.
pub(super) fn client_over<H>(transport: H) -> BigCommerceClient<H> {
    BigCommerceClient::new(transport).with_store(STORE_HASH, ACCESS_TOKEN)
}

/// JSON of a webhook as the platform returns it, wrapped in `data`.
pub(super) fn webhook_json(id: u64, scope: &str, destination: &str) -> String {
    format!(
        r#"{{"data":{{"id":{id},"client_id":"app","store_hash":"{STORE_HASH}","scope":"{scope}","destination":"{destination}","is_active":true,"created_at":1700000000,"updated_at":1700000000}}}}"#
    )
}
