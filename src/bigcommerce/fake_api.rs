//! A stateful stand-in for the platform's hooks endpoints.
//!
//! Serves create, update, list and delete over [`HttpClient`] so the HTTP
//! adapter can run the conformance suite without a network. Storage and
//! domain rules come from [`InMemoryClient`]; this layer adds routing,
//! authentication, JSON bodies, status codes and pagination.

use std::sync::Mutex;

use http::{Method, StatusCode};
use serde_json::json;

use super::test_fixtures::{ACCESS_TOKEN, STORE_HASH};
use crate::client::ClientError;
use crate::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::inmemory::InMemoryClient;
use crate::model::{
    Links, ListWebhooksOptions, ListWebhooksResponse, Meta, Pagination, UpsertWebhookRequest,
    Webhook, WebhookId,
};
use crate::time::ManualClock;

const DEFAULT_LIMIT: u32 = 50;

#[derive(Debug)]
pub(super) struct FakeApi {
    store: Mutex<InMemoryClient<ManualClock>>,
}

impl FakeApi {
    pub(super) fn new() -> Self {
        let store = InMemoryClient::new()
            .with_store(STORE_HASH, "app")
            .with_clock(ManualClock::new(1_700_000_000));
        Self {
            store: Mutex::new(store),
        }
    }

    fn handle(&self, req: &HttpRequest) -> HttpResponse {
        let token = req
            .headers
            .get("x-auth-token")
            .and_then(|v| v.to_str().ok());
        if token != Some(ACCESS_TOKEN) {
            return problem(StatusCode::UNAUTHORIZED, "missing or invalid access token");
        }

        let prefix = format!("/stores/{STORE_HASH}/v3/hooks");
        let Some(rest) = req.url.path().strip_prefix(&prefix) else {
            return problem(StatusCode::NOT_FOUND, "no such route");
        };

        let method = &req.method;
        match rest {
            "" if method == Method::POST => self.create(req),
            "" if method == Method::GET => self.list(req),
            _ => match rest.strip_prefix('/').map(str::parse::<WebhookId>) {
                Some(Ok(id)) if method == Method::PUT => self.update(id, req),
                Some(Ok(id)) if method == Method::DELETE => self.delete(id),
                Some(Ok(_)) => problem(StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
                _ => problem(StatusCode::NOT_FOUND, "no such route"),
            },
        }
    }

    fn create(&self, req: &HttpRequest) -> HttpResponse {
        let body = match upsert_body(req) {
            Ok(body) => body,
            Err(resp) => return resp,
        };
        match self.store.lock().unwrap().create(&body) {
            Ok(webhook) => reply(StatusCode::OK, &json!({ "data": webhook })),
            Err(err) => rejection(&err),
        }
    }

    fn update(&self, id: WebhookId, req: &HttpRequest) -> HttpResponse {
        let body = match upsert_body(req) {
            Ok(body) => body,
            Err(resp) => return resp,
        };
        match self.store.lock().unwrap().update(id, &body) {
            Ok(webhook) => reply(StatusCode::OK, &json!({ "data": webhook })),
            Err(err) => rejection(&err),
        }
    }

    fn delete(&self, id: WebhookId) -> HttpResponse {
        match self.store.lock().unwrap().delete(id) {
            Ok(webhook) => reply(StatusCode::OK, &json!({ "data": webhook })),
            Err(err) => rejection(&err),
        }
    }

    fn list(&self, req: &HttpRequest) -> HttpResponse {
        let mut opts = ListWebhooksOptions::default();
        for (key, value) in req.url.query_pairs() {
            match key.as_ref() {
                "scope" => opts.scope = Some(value.into_owned()),
                "destination" => opts.destination = Some(value.into_owned()),
                "is_active" => match value.parse() {
                    Ok(active) => opts.is_active = Some(active),
                    Err(_) => return problem(StatusCode::BAD_REQUEST, "is_active"),
                },
                "page" => match value.parse() {
                    Ok(page) => opts.page = Some(page),
                    Err(_) => return problem(StatusCode::BAD_REQUEST, "page"),
                },
                "limit" => match value.parse() {
                    Ok(limit) => opts.limit = Some(limit),
                    Err(_) => return problem(StatusCode::BAD_REQUEST, "limit"),
                },
                _ => {}
            }
        }

        let all = self.store.lock().unwrap().list(&opts).data;
        reply(StatusCode::OK, &paginate(all, &opts))
    }
}

impl HttpClient for FakeApi {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        Ok(self.handle(&req))
    }
}

/// Cuts one page out of `all` and describes it the way the platform does.
fn paginate(all: Vec<Webhook>, opts: &ListWebhooksOptions) -> ListWebhooksResponse {
    let limit = opts.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT) as usize;
    let page = opts.page.filter(|p| *p > 0).unwrap_or(1) as usize;
    let total = all.len();
    let total_pages = total.div_ceil(limit).max(1);

    let data: Vec<_> = all.into_iter().skip((page - 1) * limit).take(limit).collect();
    let link = |page: usize| format!("?page={page}&limit={limit}");

    let pagination = Pagination {
        total: total as u64,
        count: data.len() as u64,
        per_page: limit as u64,
        current_page: page as u64,
        total_pages: total_pages as u64,
        links: Links {
            previous: (page > 1).then(|| link(page - 1)),
            current: Some(link(page)),
            next: (page < total_pages).then(|| link(page + 1)),
        },
    };

    ListWebhooksResponse {
        data,
        meta: Some(Meta { pagination }),
    }
}

fn upsert_body(req: &HttpRequest) -> Result<UpsertWebhookRequest, HttpResponse> {
    let body = req.body.as_deref().unwrap_or_default();
    serde_json::from_slice(body)
        .map_err(|e| problem(StatusCode::BAD_REQUEST, &format!("malformed body: {e}")))
}

fn rejection(err: &ClientError) -> HttpResponse {
    let status = match err {
        ClientError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    problem(status, &err.to_string())
}

fn problem(status: StatusCode, title: &str) -> HttpResponse {
    reply(status, &json!({ "status": status.as_u16(), "title": title }))
}

fn reply<T: serde::Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::new(
        status,
        http::HeaderMap::new(),
        serde_json::to_vec(body).unwrap(),
    )
}
