//! Storefront data: products (optionally server-filtered) and category counts.

#[cfg(test)]
#[path = "storefront_test.rs"]
mod storefront_test;

use crate::net::api::{ApiError, Catalog, FULL_PAGE_SIZE, Transport};
use crate::net::types::{CategoryStats, Product};

/// Everything the storefront page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Storefront {
    pub products: Vec<Product>,
    pub stats: Vec<CategoryStats>,
}

/// Fetch products and category stats concurrently.
///
/// Category navigation is optional: failed stats are logged and render as an
/// empty menu.
///
/// # Errors
///
/// Any `ApiError` from the product fetch.
pub async fn load_storefront<T: Transport>(catalog: &Catalog<T>, category_id: Option<i64>) -> Result<Storefront, ApiError> {
    let (products, stats) =
        futures::join!(catalog.list_products(1, FULL_PAGE_SIZE, category_id), catalog.category_stats());
    let stats = stats.unwrap_or_else(|e| {
        leptos::logging::error!("Error loading category stats: {e}");
        Vec::new()
    });
    Ok(Storefront { products: products?.items, stats })
}
