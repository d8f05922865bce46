//! Order creation handler.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::routes::require_bearer;
use crate::state::AppState;

/// Order drafts arrive wrapped as `{"order": ...}`.
#[derive(Debug, Deserialize)]
pub struct OrderPayload {
    pub order: Value,
}

/// `POST /order/create/{user_id}`. Assigns an id and echoes the stored
/// order back.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(_user_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<Value>, AppError> {
    require_bearer(&headers)?;
    let mut orders = state
        .orders
        .lock()
        .map_err(|_| AppError::Internal("orders lock poisoned".to_string()))?;
    let mut order = payload.order;
    if let Value::Object(fields) = &mut order {
        let serial = orders.len() + 1;
        fields.insert("_id".to_string(), Value::from(format!("order-{serial:04}")));
    }
    orders.push(order.clone());
    Ok(Json(order))
}
