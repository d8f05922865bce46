//! Product and category operations.

use serde_json::json;

use crate::api::decode;
use crate::config;
use crate::error::ApiResult;
use crate::models::{Category, PagedProducts, Product, ProductFilters, ProductSort, SearchQuery};
use crate::StorefrontClient;

// ---------------------------------------------------------------------------
// CatalogApi
// ---------------------------------------------------------------------------

/// Catalog interface: listings, filtered pages, search and single reads.
pub struct CatalogApi<'a> {
    client: &'a StorefrontClient,
}

impl<'a> CatalogApi<'a> {
    /// Create a new `CatalogApi` bound to the given client.
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self { client }
    }

    // -- Listings ----------------------------------------------------------

    /// Top products for a sort key: `GET /products?sortBy&order=desc&limit=6`.
    pub fn get_products(&self, sort_by: ProductSort) -> ApiResult<Vec<Product>> {
        let transport = self.client.transport();
        let request = transport
            .get("/products")
            .query(&[("sortBy", sort_by.key()), ("order", "desc")])
            .query(&[("limit", config::PAGE_SIZE)]);
        decode(transport.execute(request), "Failed to fetch products")
    }

    /// All categories: `GET /categories`.
    pub fn get_categories(&self) -> ApiResult<Vec<Category>> {
        let transport = self.client.transport();
        let request = transport.get("/categories");
        decode(transport.execute(request), "Failed to fetch categories")
    }

    /// One page of filtered results: `POST /products/by/search` with body
    /// `{limit, skip, filters}`.
    pub fn get_filtered_products(
        &self,
        skip: u32,
        limit: u32,
        filters: &ProductFilters,
    ) -> ApiResult<PagedProducts> {
        let transport = self.client.transport();
        let body = json!({ "limit": limit, "skip": skip, "filters": filters });
        let request = transport.post("/products/by/search").json(&body);
        decode(
            transport.execute(request),
            "Failed to fetch filtered products",
        )
    }

    // -- Search ------------------------------------------------------------

    /// Free-text search: `GET /products/search?<query>`.
    pub fn list(&self, query: &SearchQuery) -> ApiResult<Vec<Product>> {
        let transport = self.client.transport();
        let request = transport.get("/products/search").query(query);
        decode(transport.execute(request), "Failed to fetch search results")
    }

    // -- Single product ----------------------------------------------------

    /// Single product by id: `GET /product/{id}`.
    pub fn read(&self, product_id: &str) -> ApiResult<Product> {
        let transport = self.client.transport();
        let request = transport.get(&format!("/product/{}", product_id));
        decode(transport.execute(request), "Failed to fetch product")
    }

    /// Products sharing the given product's category:
    /// `GET /products/related/{id}`.
    pub fn list_related(&self, product_id: &str) -> ApiResult<Vec<Product>> {
        let transport = self.client.transport();
        let request = transport.get(&format!("/products/related/{}", product_id));
        decode(
            transport.execute(request),
            "Failed to fetch related products",
        )
    }
}
