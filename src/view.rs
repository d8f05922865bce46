//! Presentational helpers: the display-ready mapping of catalog data,
//! with no business logic.

use crate::models::Product;

// ---------------------------------------------------------------------------
// ProductCard
// ---------------------------------------------------------------------------

/// Display fields for one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    /// First 100 characters of the description.
    pub description_snippet: String,
    /// Price formatted as `$N`.
    pub price_label: String,
    pub in_stock: bool,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description_snippet: snippet(&product.description, 100),
            price_label: format!("${}", product.price),
            in_stock: product.stock > 0,
        }
    }

    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }
}

fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

// ---------------------------------------------------------------------------
// PageChrome
// ---------------------------------------------------------------------------

/// Title and description a page renders in its layout header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChrome {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_CHROME: PageChrome = PageChrome {
    title: "Home page",
    description: "MERN E-commerce App",
};

pub const SHOP_CHROME: PageChrome = PageChrome {
    title: "Shop page",
    description: "Search and find books",
};

pub const SIGNUP_CHROME: PageChrome = PageChrome {
    title: "Signup page",
    description: "Signup to MERN E-commerce App",
};

// ---------------------------------------------------------------------------
// Copyright
// ---------------------------------------------------------------------------

pub fn copyright_line(year: i32) -> String {
    format!("Copyright © MERN E-commerce App {}.", year)
}
