//! Account operations.

use serde_json::Value;

use crate::api::decode;
use crate::error::ApiResult;
use crate::models::SignupRequest;
use crate::StorefrontClient;

// ---------------------------------------------------------------------------
// AuthApi
// ---------------------------------------------------------------------------

pub struct AuthApi<'a> {
    client: &'a StorefrontClient,
}

impl<'a> AuthApi<'a> {
    /// Create a new `AuthApi` bound to the given client.
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self { client }
    }

    /// Register an account: `POST /signup`.
    ///
    /// Unlike the catalog operations this parses the body on any status,
    /// so a rejection like `{"error": "Email already exists"}` comes back
    /// verbatim rather than as the generic connection message.
    pub fn signup(&self, request: &SignupRequest) -> ApiResult<Value> {
        let transport = self.client.transport();
        let req = transport.post("/signup").json(request);
        decode(
            transport.execute_lenient(req),
            "Failed to connect to server",
        )
    }
}
