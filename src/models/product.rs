use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Product — catalog item as the API returns it (category populated inline)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub sold: i64,
    pub created_at: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

// ---------------------------------------------------------------------------
// ProductSort — sortBy keys for the listing endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    /// Newest first (`createdAt`).
    CreatedAt,
    /// Best selling first (`sold`).
    Sold,
}

impl ProductSort {
    pub fn key(&self) -> &'static str {
        match self {
            ProductSort::CreatedAt => "createdAt",
            ProductSort::Sold => "sold",
        }
    }
}

// ---------------------------------------------------------------------------
// ProductFilters — filter state posted to /products/by/search
// ---------------------------------------------------------------------------

/// Dimensions are replaced wholesale when a control changes; the struct is
/// serialized verbatim as the `filters` member of the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProductFilters {
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub price: Vec<i64>,
}

// ---------------------------------------------------------------------------
// PagedProducts — one page of filtered results
// ---------------------------------------------------------------------------

/// `size` is the count the server reports for this page (the returned
/// page's length), not a total match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PagedProducts {
    #[serde(default)]
    pub data: Vec<Product>,
    pub size: u32,
}

// ---------------------------------------------------------------------------
// SearchQuery — query string for /products/search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
