//! Text formatting for rendered products and categories.
//!
//! Rows are built as plain view models so placeholder handling for missing
//! fields is testable without a DOM.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::net::types::{Category, Product};

pub const NO_CATEGORY_LABEL: &str = "No category";
pub const NO_DESCRIPTION_LABEL: &str = "No description";
pub const NO_IMAGE_LABEL: &str = "Image Not Available";

pub fn price_label(price: f64) -> String {
    format!("{price:.2} ₽")
}

pub fn stock_label(in_stock: bool) -> &'static str {
    if in_stock { "✅ In stock" } else { "❌ Out of stock" }
}

pub fn category_label(category: Option<&Category>) -> &str {
    category.map_or(NO_CATEGORY_LABEL, |c| c.name.as_str())
}

/// Non-empty description or the placeholder.
pub fn description_label(description: Option<&str>) -> &str {
    match description {
        Some(text) if !text.trim().is_empty() => text,
        _ => NO_DESCRIPTION_LABEL,
    }
}

/// Calendar date of an ISO 8601 timestamp.
pub fn created_label(created_at: Option<&str>) -> String {
    let date = created_at
        .and_then(|ts| ts.split(['T', ' ']).next())
        .filter(|d| !d.is_empty())
        .unwrap_or("unknown");
    format!("Created: {date}")
}

/// Image URL worth rendering, if any.
pub fn image_src(product: &Product) -> Option<&str> {
    product.image_url.as_deref().filter(|url| !url.trim().is_empty())
}

/// One row of the admin product list.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub summary: String,
    pub stock: &'static str,
}

impl ProductRow {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            summary: format!(
                "Price: {} | Category: {}",
                price_label(product.price),
                category_label(product.category.as_ref())
            ),
            stock: stock_label(product.in_stock),
        }
    }
}

/// One row of the admin category list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created: String,
}

impl CategoryRow {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: description_label(category.description.as_deref()).to_owned(),
            created: created_label(category.created_at.as_deref()),
        }
    }
}
