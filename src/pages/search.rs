//! Search page: category dropdown plus free-text search with a tri-state
//! result message.

use crate::error::ApiResult;
use crate::models::{Category, Product, SearchQuery};
use crate::pages::RequestToken;
use crate::StorefrontClient;

// ---------------------------------------------------------------------------
// SearchPage
// ---------------------------------------------------------------------------

/// State container for the search page.
///
/// `searched` is tri-state through [`message`](SearchPage::message): no
/// message before the first submit, a result count after a hit, and a
/// fixed not-found line after a miss. Every field edit clears the error
/// slot, resets `searched` and supersedes any fetch still in flight.
pub struct SearchPage<'a> {
    client: &'a StorefrontClient,
    categories: Vec<Category>,
    category: String,
    search: String,
    results: Vec<Product>,
    searched: bool,
    error: Option<String>,
    epoch: u64,
}

impl<'a> SearchPage<'a> {
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self {
            client,
            categories: Vec::new(),
            category: String::new(),
            search: String::new(),
            results: Vec::new(),
            searched: false,
            error: None,
            epoch: 0,
        }
    }

    /// Load the category dropdown. Called once when the page mounts.
    pub fn init(&mut self) {
        match self.client.catalog().get_categories() {
            Ok(categories) => self.categories = categories,
            Err(err) => {
                self.categories.clear();
                self.error = Some(err.error);
            }
        }
    }

    // -- Field edits -------------------------------------------------------

    /// Select a category (an id, or `"All"` for no category constraint).
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.edited();
    }

    /// Replace the free-text query.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.edited();
    }

    fn edited(&mut self) {
        self.error = None;
        self.searched = false;
        self.epoch += 1;
    }

    // -- Submission --------------------------------------------------------

    /// The query a submit would issue, or `None` when the text is empty
    /// (submitting with only a category selected is an explicit no-op).
    pub fn query(&self) -> Option<SearchQuery> {
        if self.search.is_empty() {
            return None;
        }
        Some(SearchQuery {
            search: self.search.clone(),
            category: Some(self.category.clone()),
        })
    }

    /// Submit the form. Issues no request when the text is empty; returns
    /// whether a request was made.
    pub fn submit(&mut self) -> bool {
        let Some(query) = self.query() else {
            return false;
        };
        let token = self.request_token();
        let outcome = self.client.catalog().list(&query);
        self.apply_results(token, outcome);
        true
    }

    /// Mint a token for a fetch about to be issued against the current
    /// query state.
    pub fn request_token(&self) -> RequestToken {
        RequestToken(self.epoch)
    }

    /// Apply a fetch outcome. Returns `false` without touching any state
    /// when the token was superseded by a later edit.
    pub fn apply_results(
        &mut self,
        token: RequestToken,
        outcome: ApiResult<Vec<Product>>,
    ) -> bool {
        if token.0 != self.epoch {
            tracing::debug!("discarding superseded search response");
            return false;
        }
        match outcome {
            Ok(products) => {
                self.results = products;
                self.searched = true;
            }
            Err(err) => {
                self.error = Some(err.error);
                self.results.clear();
                self.searched = true;
            }
        }
        true
    }

    // -- Accessors ---------------------------------------------------------

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn results(&self) -> &[Product] {
        &self.results
    }

    pub fn searched(&self) -> bool {
        self.searched
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The heading over the results: `Found N products` after a hit,
    /// `Search: No products found` after a miss, nothing before the first
    /// submit.
    pub fn message(&self) -> Option<String> {
        if self.searched && !self.results.is_empty() {
            Some(format!("Found {} products", self.results.len()))
        } else if self.searched {
            Some("Search: No products found".to_string())
        } else {
            None
        }
    }
}
