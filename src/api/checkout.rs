//! Payment gateway and order operations. All three require a Bearer token.

use serde_json::{json, Value};

use crate::api::decode;
use crate::error::ApiResult;
use crate::models::{OrderDraft, PaymentRequest};
use crate::StorefrontClient;

// ---------------------------------------------------------------------------
// CheckoutApi
// ---------------------------------------------------------------------------

/// Checkout interface. Gateway responses are passed through as raw JSON;
/// their shape belongs to the payment provider, not to this crate.
pub struct CheckoutApi<'a> {
    client: &'a StorefrontClient,
}

impl<'a> CheckoutApi<'a> {
    /// Create a new `CheckoutApi` bound to the given client.
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self { client }
    }

    /// Client token for the payment gateway:
    /// `GET /braintree/getToken/{userId}`.
    pub fn get_braintree_client_token(&self, user_id: &str, token: &str) -> ApiResult<Value> {
        let transport = self.client.transport();
        let request = transport
            .get(&format!("/braintree/getToken/{}", user_id))
            .bearer_auth(token);
        decode(transport.execute(request), "Failed to fetch Braintree token")
    }

    /// Submit a payment nonce: `POST /braintree/payment/{userId}`.
    pub fn process_payment(
        &self,
        user_id: &str,
        token: &str,
        payment: &PaymentRequest,
    ) -> ApiResult<Value> {
        let transport = self.client.transport();
        let request = transport
            .post(&format!("/braintree/payment/{}", user_id))
            .bearer_auth(token)
            .json(payment);
        decode(transport.execute(request), "Failed to process payment")
    }

    /// Record an order: `POST /order/create/{userId}` with the draft
    /// wrapped as `{"order": ...}`.
    pub fn create_order(&self, user_id: &str, token: &str, order: &OrderDraft) -> ApiResult<Value> {
        let transport = self.client.transport();
        let request = transport
            .post(&format!("/order/create/{}", user_id))
            .bearer_auth(token)
            .json(&json!({ "order": order }));
        decode(transport.execute(request), "Failed to create order")
    }
}
