//! Product listing, paging, search and single-read handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use storefront_sdk::models::{PagedProducts, Product, ProductFilters};

use crate::error::AppError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query and body shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct PageBody {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub filters: ProductFilters,
}

fn default_limit() -> usize {
    6
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /products` sorted listing for the home page rails.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Product>> {
    let sort_by = params.sort_by.as_deref().unwrap_or("_id");
    let order = params.order.as_deref().unwrap_or("asc");
    let limit = params.limit.unwrap_or_else(default_limit);
    Json(state.catalog.sorted(sort_by, order, limit))
}

/// `POST /products/by/search` filtered page for the shop grid.
pub async fn by_search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PageBody>,
) -> Json<PagedProducts> {
    Json(state.catalog.page(body.skip, body.limit, &body.filters))
}

/// `GET /products/search` free-text search, optionally scoped to a category.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Product>> {
    let needle = params.search.unwrap_or_default();
    Json(state.catalog.search(&needle, params.category.as_deref()))
}

/// `GET /product/{product_id}`.
pub async fn read(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, AppError> {
    state
        .catalog
        .read(&product_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

/// `GET /products/related/{product_id}` others from the same category.
pub async fn related(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<Product>>, AppError> {
    state
        .catalog
        .related(&product_id, default_limit())
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}
