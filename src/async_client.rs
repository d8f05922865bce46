//! Async wrapper around [`StorefrontClient`] for use in async runtimes
//! (Tokio, etc.).
//!
//! Runs all client operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! The blocking `reqwest` client must not be driven from an async context
//! directly, so construction happens on the blocking pool as well.
//!
//! # Example
//!
//! ```no_run
//! use storefront_sdk::models::ProductSort;
//! use storefront_sdk::AsyncStorefrontClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncStorefrontClient::builder().build().await.unwrap();
//!
//!     // Run any sync client operation via closure
//!     let arrivals = client
//!         .run(|c| c.catalog().get_products(ProductSort::CreatedAt))
//!         .await
//!         .unwrap();
//!
//!     // Or use a convenience method
//!     let categories = client.get_categories().await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    Category, PagedProducts, Product, ProductFilters, ProductSort, SearchQuery, SignupRequest,
};
use crate::{config, StorefrontClient};

// ---------------------------------------------------------------------------
// AsyncStorefrontClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncStorefrontClient`].
pub struct AsyncStorefrontClientBuilder {
    api_base: Option<String>,
    timeout: Duration,
}

impl Default for AsyncStorefrontClientBuilder {
    fn default() -> Self {
        Self {
            api_base: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncStorefrontClientBuilder {
    /// Override the API base URL.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async client. Construction runs on the blocking thread
    /// pool so the blocking HTTP client is never created on an async
    /// worker thread.
    pub async fn build(self) -> ApiResult<AsyncStorefrontClient> {
        tokio::task::spawn_blocking(move || {
            let mut builder = StorefrontClient::builder();
            if let Some(url) = self.api_base {
                builder = builder.api_base(url);
            }
            let client = builder.timeout(self.timeout).build();
            Ok(AsyncStorefrontClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| ApiError::new(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncStorefrontClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`StorefrontClient`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying client takes `&self`
/// everywhere, so it is shared plainly behind an [`Arc`].
pub struct AsyncStorefrontClient {
    inner: Arc<StorefrontClient>,
}

impl AsyncStorefrontClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncStorefrontClientBuilder {
        AsyncStorefrontClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    ///
    /// The closure receives an `&StorefrontClient` reference and should
    /// return an `ApiResult<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use storefront_sdk::AsyncStorefrontClient;
    /// # async fn example() -> storefront_sdk::ApiResult<()> {
    /// # let client = AsyncStorefrontClient::builder().build().await?;
    /// let product = client.run(|c| c.catalog().read("42")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&StorefrontClient) -> ApiResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| ApiError::new(format!("Task join error: {e}")))?
    }

    // -- Convenience wrappers ----------------------------------------------

    /// Top products for a sort key, asynchronously.
    pub async fn get_products(&self, sort_by: ProductSort) -> ApiResult<Vec<Product>> {
        self.run(move |c| c.catalog().get_products(sort_by)).await
    }

    /// All categories, asynchronously.
    pub async fn get_categories(&self) -> ApiResult<Vec<Category>> {
        self.run(|c| c.catalog().get_categories()).await
    }

    /// One page of filtered results, asynchronously.
    pub async fn get_filtered_products(
        &self,
        skip: u32,
        limit: u32,
        filters: &ProductFilters,
    ) -> ApiResult<PagedProducts> {
        let filters = filters.clone();
        self.run(move |c| c.catalog().get_filtered_products(skip, limit, &filters))
            .await
    }

    /// Free-text search, asynchronously.
    pub async fn list(&self, query: &SearchQuery) -> ApiResult<Vec<Product>> {
        let query = query.clone();
        self.run(move |c| c.catalog().list(&query)).await
    }

    /// Single product by id, asynchronously.
    pub async fn read(&self, product_id: &str) -> ApiResult<Product> {
        let product_id = product_id.to_string();
        self.run(move |c| c.catalog().read(&product_id)).await
    }

    /// Register an account, asynchronously.
    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<Value> {
        let request = request.clone();
        self.run(move |c| c.auth().signup(&request)).await
    }
}
