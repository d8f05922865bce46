use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OrderedProduct — cart line item as stored on an order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrderedProduct {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: i64,
    pub count: u32,
}

// ---------------------------------------------------------------------------
// OrderDraft — payload for order creation (wrapped as {"order": ...})
// ---------------------------------------------------------------------------

// Field names mirror the order schema, which keeps transaction_id in
// snake case unlike the rest of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrderDraft {
    #[serde(default)]
    pub products: Vec<OrderedProduct>,
    pub transaction_id: String,
    pub amount: f64,
    pub address: String,
}

// ---------------------------------------------------------------------------
// PaymentRequest — nonce + amount forwarded to the payment gateway
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub payment_method_nonce: String,
    pub amount: f64,
}
