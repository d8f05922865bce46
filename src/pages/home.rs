//! Home page: two product rails sharing one error slot.

use crate::error::ApiResult;
use crate::models::{Product, ProductSort};
use crate::view::{PageChrome, HOME_CHROME};
use crate::StorefrontClient;

// ---------------------------------------------------------------------------
// HomePage
// ---------------------------------------------------------------------------

/// State container for the home page.
///
/// [`init`](HomePage::init) loads the two rails with independent fetches.
/// Both report into a single error slot: a later failure overwrites
/// whatever the slot held, and a later success leaves it alone, so the
/// banner shows the most recent failure regardless of completion order.
pub struct HomePage<'a> {
    client: &'a StorefrontClient,
    new_arrivals: Vec<Product>,
    best_sellers: Vec<Product>,
    error: Option<String>,
}

impl<'a> HomePage<'a> {
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self {
            client,
            new_arrivals: Vec::new(),
            best_sellers: Vec::new(),
            error: None,
        }
    }

    /// Load both rails: new arrivals first, then best sellers.
    pub fn init(&mut self) {
        self.load_new_arrivals();
        self.load_best_sellers();
    }

    /// Fetch the six newest products into the arrivals rail.
    pub fn load_new_arrivals(&mut self) {
        let outcome = self.client.catalog().get_products(ProductSort::CreatedAt);
        self.apply_new_arrivals(outcome);
    }

    /// Fetch the six best-selling products into the sellers rail.
    pub fn load_best_sellers(&mut self) {
        let outcome = self.client.catalog().get_products(ProductSort::Sold);
        self.apply_best_sellers(outcome);
    }

    // -- Outcome application -----------------------------------------------
    //
    // Split out so completion order can be driven explicitly: the shared
    // error slot makes ordering observable.

    /// Apply an arrivals outcome: success fills the rail without touching
    /// the error slot, failure empties the rail and overwrites the slot.
    pub fn apply_new_arrivals(&mut self, outcome: ApiResult<Vec<Product>>) {
        match outcome {
            Ok(products) => self.new_arrivals = products,
            Err(err) => {
                self.new_arrivals.clear();
                self.error = Some(err.error);
            }
        }
    }

    /// Apply a best-sellers outcome; same slot rules as the arrivals rail.
    pub fn apply_best_sellers(&mut self, outcome: ApiResult<Vec<Product>>) {
        match outcome {
            Ok(products) => self.best_sellers = products,
            Err(err) => {
                self.best_sellers.clear();
                self.error = Some(err.error);
            }
        }
    }

    // -- Accessors ---------------------------------------------------------

    pub fn new_arrivals(&self) -> &[Product] {
        &self.new_arrivals
    }

    pub fn best_sellers(&self) -> &[Product] {
        &self.best_sellers
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Placeholder shown in place of an empty arrivals rail.
    pub fn arrivals_placeholder(&self) -> Option<&'static str> {
        self.new_arrivals
            .is_empty()
            .then_some("No new arrivals available")
    }

    /// Placeholder shown in place of an empty sellers rail.
    pub fn best_sellers_placeholder(&self) -> Option<&'static str> {
        self.best_sellers
            .is_empty()
            .then_some("No best sellers available")
    }

    pub fn chrome(&self) -> PageChrome {
        HOME_CHROME
    }
}
