//! Category listing handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use storefront_sdk::models::Category;

use crate::state::AppState;

/// `GET /categories`.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Category>> {
    Json(state.catalog.categories().to_vec())
}
