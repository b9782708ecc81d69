//! Request pipeline shared by every API operation.

use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderName, HeaderValue, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::BigCommerceClient;
use crate::client::ClientError;
use crate::http::{HttpClient, HttpRequest, HttpResponse};

/// Header carrying the store's access token.
pub(super) const AUTH_TOKEN_HEADER: &str = "x-auth-token";

const JSON: &str = "application/json";

/// Description of one API call.
#[derive(Debug)]
pub(super) struct ApiCall {
    method: Method,
    url: Url,
    auth_required: bool,
    body: Option<Vec<u8>>,
    expects_body: bool,
}

impl ApiCall {
    pub(super) const fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            auth_required: false,
            body: None,
            expects_body: false,
        }
    }

    /// Sends the store's access token with the call.
    pub(super) const fn authenticated(mut self) -> Self {
        self.auth_required = true;
        self
    }

    /// Serializes `body` as the JSON request body.
    pub(super) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_vec(body).map_err(ClientError::Encode)?);
        Ok(self)
    }

    /// Decodes the response body of a successful call.
    pub(super) const fn expecting_body(mut self) -> Self {
        self.expects_body = true;
        self
    }
}

/// A response that passed classification.
#[derive(Debug)]
pub(super) struct ApiResponse<T> {
    pub(super) status: StatusCode,
    /// Undecoded body, the only payload of a call made without `expecting_body`.
    pub(super) raw_body: Vec<u8>,
    /// Decoded body of a successful call made with `expecting_body`.
    pub(super) data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Returns the decoded body of a call whose status is in the success range.
    pub(super) fn into_data(self) -> Result<T, ClientError> {
        if self.status.as_u16() > 299 {
            return Err(ClientError::UnexpectedStatus(self.status.as_u16()));
        }
        self.data.ok_or(ClientError::NoContent {
            status: self.status,
        })
    }
}

impl<H: HttpClient> BigCommerceClient<H> {
    /// Builds, sends and classifies one API call.
    pub(super) async fn request<T: DeserializeOwned>(
        &self,
        call: ApiCall,
    ) -> Result<ApiResponse<T>, ClientError> {
        let request = self.build_request(call.method, call.url, call.auth_required, call.body)?;

        tracing::debug!("{} {}", request.method, request.url);
        let response = self.http.request(request).await?;
        tracing::debug!("Response status {}", response.status);

        let response = classify(response, call.expects_body, self.max_error_length)?;
        tracing::trace!("Response body: {} bytes", response.raw_body.len());
        Ok(response)
    }

    fn build_request(
        &self,
        method: Method,
        url: Url,
        auth_required: bool,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest, ClientError> {
        let mut request =
            HttpRequest::new(method, url).with_header(ACCEPT, HeaderValue::from_static(JSON));

        if let Some(body) = body {
            request = request
                .with_header(CONTENT_TYPE, HeaderValue::from_static(JSON))
                .with_body(body);
        }

        if auth_required {
            let mut token = HeaderValue::from_str(&self.access_token).map_err(|_| {
                ClientError::InvalidRequest("access token is not a valid header value".to_string())
            })?;
            token.set_sensitive(true);
            request = request.with_header(HeaderName::from_static(AUTH_TOKEN_HEADER), token);
        }

        Ok(request)
    }
}

/// Sorts a response into error, empty success, decoded success or raw pass-through.
pub(super) fn classify<T: DeserializeOwned>(
    response: HttpResponse,
    expects_body: bool,
    max_error_length: usize,
) -> Result<ApiResponse<T>, ClientError> {
    let status = response.status;

    if status.as_u16() > 399 {
        let body = response.body_excerpt(max_error_length);
        tracing::warn!("API call failed with {status}");
        return Err(ClientError::Status { status, body });
    }

    let mut data = None;
    if status.as_u16() < 300 && expects_body {
        if response.body.is_empty() {
            return Err(ClientError::NoContent { status });
        }
        let decoded = serde_json::from_slice(&response.body).map_err(|source| {
            ClientError::Decode {
                status,
                body: response.body_excerpt(max_error_length),
                source,
            }
        })?;
        data = Some(decoded);
    }

    Ok(ApiResponse {
        status,
        raw_body: response.body,
        data,
    })
}
