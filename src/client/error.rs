//! Error taxonomy shared by every webhook client.

use thiserror::Error;

use crate::http::HttpError;
use crate::model::WebhookId;

/// Error type for webhook client operations.
///
/// Callers branch on the variant, never on the message text. Transport
/// failures, rejected calls, unexpected statuses, empty and undecodable
/// bodies, and domain rule violations each have their own variant.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("Transport error: {0}")]
    Http(#[from] HttpError),

    /// The platform answered with a 4xx or 5xx status.
    ///
    /// `body` is truncated to the client's maximum error length.
    #[error("{status} - body: {body}")]
    Status {
        /// Response status
        status: http::StatusCode,
        /// Truncated response body
        body: String,
    },

    /// The platform answered with a status outside the success range that
    /// is not an error status either (3xx).
    #[error("wrong status - got: {0}")]
    UnexpectedStatus(u16),

    /// The call succeeded but the body a result was expected from is empty.
    #[error("no content to unmarshal ({status})")]
    NoContent {
        /// Response status
        status: http::StatusCode,
    },

    /// The call succeeded but its body could not be decoded.
    #[error("{status} - body: {body}: {source}")]
    Decode {
        /// Response status
        status: http::StatusCode,
        /// Truncated response body
        body: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A webhook with the same scope already exists.
    #[error("A webhook with scope '{scope}' already exists")]
    DuplicateScope {
        /// The scope already taken
        scope: String,
    },

    /// No webhook has the given id.
    #[error("Webhook {id} not found")]
    NotFound {
        /// The missing id
        id: WebhookId,
    },

    /// The request is missing data the operation needs.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The page link does not point at the listing endpoint.
    #[error("Invalid page link '{link}': {reason}")]
    InvalidPageLink {
        /// The rejected link
        link: String,
        /// Reason for rejection
        reason: String,
    },
}

impl ClientError {
    /// Returns true if the error reports a missing webhook.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the error reports a scope that is already taken.
    #[must_use]
    pub const fn is_duplicate_scope(&self) -> bool {
        matches!(self, Self::DuplicateScope { .. })
    }

    /// Returns the HTTP status attached to the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Status { status, .. }
            | Self::NoContent { status }
            | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}
