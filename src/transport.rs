//! Blocking HTTP plumbing shared by every API interface.
//!
//! Issues the request, enforces the status policy and parses the body into
//! JSON, classifying failures into [`StorefrontError`] variants. Turning
//! those into the public `{error}` sentinel happens one layer up, in `api`.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

use crate::error::{Result, StorefrontError};

pub(crate) struct Transport {
    http: Client,
    api_base: String,
}

impl Transport {
    pub(crate) fn new(api_base: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { http, api_base }
    }

    pub(crate) fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    /// Send a request, requiring a 2xx status before the body is parsed.
    pub(crate) fn execute(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send()?;
        let status = response.status();
        tracing::debug!(%status, "response received");
        if !status.is_success() {
            return Err(StorefrontError::Status(status));
        }
        parse_body(response)
    }

    /// Send a request and parse the body regardless of status. Signup uses
    /// this so a 4xx `{error}` body surfaces its own message instead of the
    /// generic transport one.
    pub(crate) fn execute_lenient(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send()?;
        tracing::debug!(status = %response.status(), "response received");
        parse_body(response)
    }
}

/// Parse a response body into JSON.
///
/// An empty body and a literal JSON `null` both count as an absent
/// response; a parseable object carrying an `error` string is an
/// application-level failure with the server's own message.
fn parse_body(response: Response) -> Result<Value> {
    let text = response.text()?;
    if text.trim().is_empty() {
        return Err(StorefrontError::EmptyBody);
    }
    let value: Value = serde_json::from_str(&text)?;
    if value.is_null() {
        return Err(StorefrontError::EmptyBody);
    }
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(StorefrontError::Api(message.to_string()));
    }
    Ok(value)
}
