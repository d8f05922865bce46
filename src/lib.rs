//! Storefront SDK for Rust.
//!
//! Provides a typed, blocking client for a MERN-style storefront REST API,
//! plus headless page containers (home, search, shop, signup) that own the
//! component-local state the frontend pages keep and drive the client the
//! same way the pages do.
//!
//! Every API operation resolves to the parsed body or a uniform
//! `{error: string}` sentinel ([`ApiError`]): transport failures, non-2xx
//! statuses, absent bodies and server-side `{error}` payloads are all
//! normalized at the client boundary, never thrown past it.
//!
//! # Quick start
//!
//! ```no_run
//! use storefront_sdk::StorefrontClient;
//!
//! let client = StorefrontClient::builder().build();
//!
//! // One-off API calls
//! let categories = client.catalog().get_categories().unwrap();
//!
//! // Stateful page containers
//! let mut shop = client.shop_page();
//! shop.init();
//! shop.set_price_bucket(2);
//! for product in shop.results() {
//!     println!("{}: ${}", product.name, product.price);
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod api;
pub mod config;
pub mod controls;
pub mod error;
pub mod models;
pub mod pages;
pub mod prices;
mod transport;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncStorefrontClient;
pub use api::{AuthApi, CatalogApi, CheckoutApi};
pub use error::{ApiError, ApiResult};
pub use pages::{HomePage, PageMode, RequestToken, SearchPage, ShopPage, SignupForm};

use std::fmt;
use std::time::Duration;

use transport::Transport;

// ---------------------------------------------------------------------------
// StorefrontClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StorefrontClient`].
///
/// Use [`StorefrontClient::builder()`] to obtain a builder, chain
/// configuration methods, and call
/// [`build()`](StorefrontClientBuilder::build) to create the client.
pub struct StorefrontClientBuilder {
    api_base: Option<String>,
    timeout: Duration,
}

impl Default for StorefrontClientBuilder {
    fn default() -> Self {
        Self {
            api_base: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl StorefrontClientBuilder {
    /// Override the API base URL.
    ///
    /// If not set, the `STOREFRONT_API_URL` environment variable is
    /// consulted, falling back to `http://localhost:5000/api`. The base
    /// URL is static configuration; it never changes after `build`.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> StorefrontClient {
        let api_base = config::resolve_api_base(self.api_base.as_deref());
        StorefrontClient {
            transport: Transport::new(api_base, self.timeout),
        }
    }
}

// ---------------------------------------------------------------------------
// StorefrontClient
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Owns the HTTP transport and exposes the REST interfaces and page
/// containers as lightweight borrowing wrappers.
///
/// Created via [`StorefrontClient::builder()`].
pub struct StorefrontClient {
    transport: Transport,
}

impl StorefrontClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> StorefrontClientBuilder {
        StorefrontClientBuilder::default()
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    /// The resolved API base URL.
    pub fn api_base(&self) -> &str {
        self.transport.api_base()
    }

    // -- API accessors -----------------------------------------------------

    /// Access the catalog interface (listings, filters, search, reads).
    ///
    /// Returns a lightweight wrapper that borrows the client.
    pub fn catalog(&self) -> CatalogApi<'_> {
        CatalogApi::new(self)
    }

    /// Access the checkout interface (gateway token, payment, orders).
    pub fn checkout(&self) -> CheckoutApi<'_> {
        CheckoutApi::new(self)
    }

    /// Access the account interface.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    // -- Page accessors ----------------------------------------------------

    /// Create a home page container bound to this client.
    ///
    /// Page containers own their state for as long as the caller holds
    /// them; creating a new one starts from the page's initial state.
    pub fn home_page(&self) -> HomePage<'_> {
        HomePage::new(self)
    }

    /// Create a search page container bound to this client.
    pub fn search_page(&self) -> SearchPage<'_> {
        SearchPage::new(self)
    }

    /// Create a shop page container bound to this client.
    pub fn shop_page(&self) -> ShopPage<'_> {
        ShopPage::new(self)
    }

    /// Create a signup form container bound to this client.
    pub fn signup_form(&self) -> SignupForm<'_> {
        SignupForm::new(self)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StorefrontClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorefrontClient(api_base={})", self.transport.api_base())
    }
}
