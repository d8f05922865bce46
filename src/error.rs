use std::fmt;

use serde::{Deserialize, Serialize};

/// Internal error type for request plumbing. Crate-private: the public
/// surface normalizes every failure into an [`ApiError`] sentinel.
#[derive(Debug, thiserror::Error)]
pub(crate) enum StorefrontError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty response body")]
    EmptyBody,

    #[error("server error: {0}")]
    Api(String),
}

pub(crate) type Result<T> = std::result::Result<T, StorefrontError>;

/// The uniform error sentinel every client operation resolves to on
/// failure: a single human-readable message, shaped on the wire as
/// `{"error": "..."}`.
///
/// Transport failures and unexpected statuses carry an operation-specific
/// fixed message; application errors carry the server's own string; an
/// absent body carries `"No response from server"`. Callers distinguish
/// them only by content, never structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        ApiError {
            error: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

/// Result alias for every public client operation.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
