//! REST interfaces over the storefront API, grouped by domain.
//!
//! Each interface is a lightweight wrapper borrowing the client, mirroring
//! the endpoint set the storefront frontend consumes. Every operation
//! resolves to the typed body or an [`ApiError`](crate::ApiError) sentinel;
//! see the crate docs for the normalization rules.

pub mod auth;
pub mod catalog;
pub mod checkout;

pub use auth::AuthApi;
pub use catalog::CatalogApi;
pub use checkout::CheckoutApi;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult, Result, StorefrontError};

/// Message used when the server produced no body at all.
pub(crate) const NO_RESPONSE: &str = "No response from server";

/// Collapse an internal failure into the public sentinel.
///
/// Application errors keep the server's message and an absent body keeps
/// its fixed message; everything else (transport, status, malformed JSON)
/// collapses into the operation's `fallback` string, with the underlying
/// cause logged rather than surfaced.
pub(crate) fn normalize(err: StorefrontError, fallback: &str) -> ApiError {
    match err {
        StorefrontError::Api(message) => ApiError::new(message),
        StorefrontError::EmptyBody => ApiError::new(NO_RESPONSE),
        other => {
            tracing::warn!(error = %other, "{}", fallback);
            ApiError::new(fallback)
        }
    }
}

/// Decode a fetched body into `T`, normalizing both fetch and decode
/// failures into the sentinel.
pub(crate) fn decode<T: DeserializeOwned>(fetched: Result<Value>, fallback: &str) -> ApiResult<T> {
    match fetched {
        Ok(value) => serde_json::from_value(value).map_err(|err| {
            tracing::warn!(error = %err, "{}", fallback);
            ApiError::new(fallback)
        }),
        Err(err) => Err(normalize(err, fallback)),
    }
}
