//! Category filtering helpers for the storefront.
//!
//! Two independent paths exist. Navigation links reload the page with a
//! `category_id` query parameter and the server filters the product list.
//! The `category-filter` select hides already rendered cards whose
//! `data-category` differs from the selection. Neither path reads the other.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::Product;

/// Query parameter carrying the server-side category filter.
pub const CATEGORY_QUERY_PARAM: &str = "category_id";

/// Storefront URL for a category, or for all products.
pub fn category_href(category_id: Option<i64>) -> String {
    match category_id {
        Some(id) => format!("/?{CATEGORY_QUERY_PARAM}={id}"),
        None => "/".to_owned(),
    }
}

/// Parse the query parameter; blank or non-numeric values mean "all".
pub fn parse_category_param(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

/// `data-category` value for a product card. Empty for uncategorised products.
pub fn card_category_attr(product: &Product) -> String {
    product
        .category_id
        .or_else(|| product.category.as_ref().map(|c| c.id))
        .map(|id| id.to_string())
        .unwrap_or_default()
}

/// Whether a card stays visible under the client-side selection.
///
/// An empty selection shows every card.
pub fn card_visible(card_category: &str, selected: &str) -> bool {
    selected.is_empty() || card_category == selected
}
