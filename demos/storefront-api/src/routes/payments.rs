//! Braintree-shaped payment endpoints. The gateway is simulated, but the
//! token and transaction envelopes match what the real one returns.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use storefront_sdk::models::PaymentRequest;

use crate::error::AppError;
use crate::routes::require_bearer;
use crate::state::AppState;

/// `GET /braintree/getToken/{user_id}`.
pub async fn token(
    State(_state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    require_bearer(&headers)?;
    Ok(Json(json!({
        "clientToken": format!("sandbox-client-token-{user_id}"),
        "success": true,
    })))
}

/// `POST /braintree/payment/{user_id}`. Every nonce settles successfully.
pub async fn pay(
    State(state): State<Arc<AppState>>,
    Path(_user_id): Path<String>,
    headers: HeaderMap,
    Json(payment): Json<PaymentRequest>,
) -> Result<Json<Value>, AppError> {
    require_bearer(&headers)?;
    let serial = state.transactions.fetch_add(1, Ordering::Relaxed) + 1;
    Ok(Json(json!({
        "success": true,
        "transaction": {
            "id": format!("txn-{serial:04}"),
            "status": "submitted_for_settlement",
            "amount": payment.amount,
        },
    })))
}
