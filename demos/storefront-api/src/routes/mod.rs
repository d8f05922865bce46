//! Route table mirroring the endpoints the SDK client calls.

pub mod auth;
pub mod categories;
pub mod orders;
pub mod payments;
pub mod products;

use std::sync::Arc;

use axum::http::{header, HeaderMap};
use axum::routing::{get, post};
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(products::list))
        .route("/products/by/search", post(products::by_search))
        .route("/products/search", get(products::search))
        .route("/products/related/{product_id}", get(products::related))
        .route("/product/{product_id}", get(products::read))
        .route("/categories", get(categories::list))
        .route("/braintree/getToken/{user_id}", get(payments::token))
        .route("/braintree/payment/{user_id}", post(payments::pay))
        .route("/order/create/{user_id}", post(orders::create))
        .route("/signup", post(auth::signup))
}

/// Checkout routes want a `Bearer` token; this reference server only checks
/// that one is present.
pub fn require_bearer(headers: &HeaderMap) -> Result<(), AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or("");
    if token.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
