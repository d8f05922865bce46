//! In-memory catalog backing the API, loaded from a JSON seed at startup.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use storefront_sdk::models::{Category, PagedProducts, Product, ProductFilters};

// ---------------------------------------------------------------------------
// SeedError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Catalog, SeedError> {
        let raw = fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&raw)?;
        Ok(catalog)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products ordered by `sort_by`, reversed when `order` is `desc`.
    pub fn sorted(&self, sort_by: &str, order: &str, limit: usize) -> Vec<Product> {
        let mut products = self.products.clone();
        products.sort_by(|a, b| compare(a, b, sort_by));
        if order == "desc" {
            products.reverse();
        }
        products.truncate(limit);
        products
    }

    /// One page of products matching `filters`; `size` is the page length.
    pub fn page(&self, skip: usize, limit: usize, filters: &ProductFilters) -> PagedProducts {
        let data: Vec<Product> = self
            .products
            .iter()
            .filter(|product| matches_filters(product, filters))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect();
        let size = data.len() as u32;
        PagedProducts { data, size }
    }

    /// Case-insensitive substring match over name and description, scoped to
    /// `category` unless it is absent, blank, or the `All` sentinel.
    pub fn search(&self, needle: &str, category: Option<&str>) -> Vec<Product> {
        let needle = needle.to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            })
            .filter(|product| match category {
                Some(id) if !id.is_empty() && id != "All" => product.category.id == id,
                _ => true,
            })
            .cloned()
            .collect()
    }

    pub fn read(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    /// Other products in the same category, or `None` for an unknown id.
    pub fn related(&self, product_id: &str, limit: usize) -> Option<Vec<Product>> {
        let product = self.read(product_id)?;
        let related = self
            .products
            .iter()
            .filter(|other| other.id != product_id && other.category.id == product.category.id)
            .take(limit)
            .cloned()
            .collect();
        Some(related)
    }
}

fn compare(a: &Product, b: &Product, sort_by: &str) -> Ordering {
    match sort_by {
        "sold" => a.sold.cmp(&b.sold),
        "createdAt" => a.created_at.cmp(&b.created_at),
        "price" => a.price.cmp(&b.price),
        "name" => a.name.cmp(&b.name),
        _ => a.id.cmp(&b.id),
    }
}

fn matches_filters(product: &Product, filters: &ProductFilters) -> bool {
    if !filters.category.is_empty() && !filters.category.contains(&product.category.id) {
        return false;
    }
    if let [min, max, ..] = filters.price[..] {
        if product.price < min || product.price > max {
            return false;
        }
    }
    true
}
