//! Shop page: composed category/price filters with skip/limit pagination.

use crate::error::ApiResult;
use crate::models::{Category, PagedProducts, Product, ProductFilters};
use crate::pages::RequestToken;
use crate::prices::price_range_for;
use crate::view::{PageChrome, SHOP_CHROME};
use crate::{config, StorefrontClient};

// ---------------------------------------------------------------------------
// PageMode
// ---------------------------------------------------------------------------

/// How a fetched page lands in the result grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// First page for the current filters: replaces the grid.
    Replace,
    /// Load-more page: appends after the existing results and advances
    /// `skip` by `limit`.
    Append,
}

// ---------------------------------------------------------------------------
// ShopPage
// ---------------------------------------------------------------------------

/// State container for the shop page.
///
/// Category and price selections compose into one [`ProductFilters`];
/// changing either dimension replaces it wholesale, resets `skip` to 0 and
/// refetches the first page, superseding any fetch still in flight.
/// `size` is the server-reported length of the last page and gates the
/// load-more control.
pub struct ShopPage<'a> {
    client: &'a StorefrontClient,
    categories: Vec<Category>,
    filters: ProductFilters,
    results: Vec<Product>,
    limit: u32,
    skip: u32,
    size: u32,
    error: Option<String>,
    epoch: u64,
}

impl<'a> ShopPage<'a> {
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self {
            client,
            categories: Vec::new(),
            filters: ProductFilters::default(),
            results: Vec::new(),
            limit: config::PAGE_SIZE,
            skip: 0,
            size: 0,
            error: None,
            epoch: 0,
        }
    }

    /// Load the category sidebar and the first unfiltered page.
    pub fn init(&mut self) {
        self.load_categories();
        self.refetch();
    }

    /// Fetch the sidebar's category list.
    pub fn load_categories(&mut self) {
        match self.client.catalog().get_categories() {
            Ok(categories) => self.categories = categories,
            Err(err) => {
                self.categories.clear();
                self.error = Some(err.error);
            }
        }
    }

    // -- Filter changes ----------------------------------------------------

    /// Replace the category dimension with the checklist's full selection
    /// and refetch from the first page.
    pub fn set_category_filter(&mut self, category_ids: Vec<String>) {
        self.filters.category = category_ids;
        self.filters_changed();
    }

    /// Resolve a price bucket id through the fixture and replace the price
    /// dimension with its range (unmatched ids resolve to no constraint),
    /// then refetch from the first page.
    pub fn set_price_bucket(&mut self, bucket_id: u32) {
        self.filters.price = price_range_for(bucket_id);
        self.filters_changed();
    }

    fn filters_changed(&mut self) {
        self.epoch += 1;
        self.skip = 0;
        self.refetch();
    }

    fn refetch(&mut self) {
        let token = self.request_token();
        let outcome = self
            .client
            .catalog()
            .get_filtered_products(self.skip, self.limit, &self.filters);
        self.apply_page(token, outcome, PageMode::Replace);
    }

    // -- Pagination --------------------------------------------------------

    /// Whether the load-more control is shown: the last page came back
    /// full, so at least one more page probably exists. Exact-boundary
    /// endings can show the button once too often; the follow-up fetch
    /// then comes back empty.
    pub fn can_load_more(&self) -> bool {
        self.size > 0 && self.size >= self.limit
    }

    /// Fetch the next page and append it after the existing results.
    pub fn load_more(&mut self) {
        let token = self.request_token();
        let outcome = self.client.catalog().get_filtered_products(
            self.skip + self.limit,
            self.limit,
            &self.filters,
        );
        self.apply_page(token, outcome, PageMode::Append);
    }

    // -- Outcome application -----------------------------------------------

    /// Mint a token for a fetch about to be issued against the current
    /// filter state.
    pub fn request_token(&self) -> RequestToken {
        RequestToken(self.epoch)
    }

    /// Apply a fetched page. Returns `false` without touching any state
    /// when the token was superseded by a later filter change.
    ///
    /// On success a `Replace` page becomes the grid and an `Append` page
    /// extends it and advances `skip`; both record the page's reported
    /// `size`. On failure a `Replace` clears the grid and zeroes `size`
    /// while an `Append` leaves results and pagination untouched; both
    /// write the error slot.
    pub fn apply_page(
        &mut self,
        token: RequestToken,
        outcome: ApiResult<PagedProducts>,
        mode: PageMode,
    ) -> bool {
        if token.0 != self.epoch {
            tracing::debug!("discarding superseded shop page");
            return false;
        }
        match (outcome, mode) {
            (Ok(page), PageMode::Replace) => {
                self.results = page.data;
                self.size = page.size;
            }
            (Ok(page), PageMode::Append) => {
                self.results.extend(page.data);
                self.size = page.size;
                self.skip += self.limit;
            }
            (Err(err), PageMode::Replace) => {
                self.error = Some(err.error);
                self.results.clear();
                self.size = 0;
            }
            (Err(err), PageMode::Append) => {
                self.error = Some(err.error);
            }
        }
        true
    }

    // -- Accessors ---------------------------------------------------------

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    pub fn results(&self) -> &[Product] {
        &self.results
    }

    pub fn skip(&self) -> u32 {
        self.skip
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Placeholder shown in place of an empty grid.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.results.is_empty().then_some("No products found")
    }

    pub fn chrome(&self) -> PageChrome {
        SHOP_CHROME
    }
}
