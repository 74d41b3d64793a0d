//! Wire DTOs for the catalog REST API.
//!
//! DESIGN
//! ======
//! These types mirror what the catalog server returns. The console never
//! holds authoritative state of its own, so fields are optional wherever the
//! server may omit them and decoding stays lenient.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A catalog category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Server timestamp in ISO 8601 form, when present.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A catalog product as returned by the list and detail endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Raw foreign key; used to preselect the category in the edit form.
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Embedded category, `None` when the product is uncategorised.
    #[serde(default)]
    pub category: Option<Category>,
}

fn default_in_stock() -> bool {
    true
}

/// One page of products from `GET /products/`.
///
/// Only `items` is required; the paging counters default when absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
}

/// Product count per category from `GET /categories/stats/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category_id: i64,
    pub category_name: String,
    pub product_count: u64,
}

/// Request body for product create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category_id: Option<i64>,
    pub in_stock: bool,
}

/// Request body for category create and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: Option<String>,
}

/// Error body returned by the catalog server on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Parse an error body, returning its human-readable detail if any.
    ///
    /// A string `detail` is returned verbatim. Validation errors arrive as an
    /// array of objects with a `msg` field; those messages are joined.
    pub fn detail_from(raw: &str) -> Option<String> {
        let body: Self = serde_json::from_str(raw).ok()?;
        body.detail_text()
    }

    /// Human-readable form of `detail`.
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(text) => Some(text.clone()),
            serde_json::Value::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(serde_json::Value::as_str))
                    .collect();
                if messages.is_empty() { None } else { Some(messages.join("; ")) }
            }
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
