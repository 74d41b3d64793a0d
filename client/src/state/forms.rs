//! Form drafts and their conversion into request payloads.
//!
//! Form inputs hold raw text exactly as typed; parsing happens once, when a
//! payload is built for submission. That keeps the wire rules in one place:
//! `price` is always a JSON number and `category_id` an integer or `null`.
//! Text fields are sent exactly as typed.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{Category, CategoryPayload, Product, ProductPayload};

/// Why a form could not be turned into a payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("name is required")]
    MissingName,
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),
}

/// Draft of the product create/edit form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    /// Selected `<option>` value; empty means "No category".
    pub category_id: String,
    pub in_stock: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image_url: String::new(),
            category_id: String::new(),
            in_stock: true,
        }
    }
}

impl ProductForm {
    /// Prefill from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            image_url: product.image_url.clone().unwrap_or_default(),
            category_id: product.category_id.map(|id| id.to_string()).unwrap_or_default(),
            in_stock: product.in_stock,
        }
    }

    /// Build the request body.
    ///
    /// # Errors
    ///
    /// `MissingName` for a blank name, `InvalidPrice` when the price is not a
    /// finite number.
    pub fn to_payload(&self) -> Result<ProductPayload, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        let price = parse_price(&self.price)?;
        Ok(ProductPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            image_url: self.image_url.clone(),
            category_id: parse_category_id(&self.category_id),
            in_stock: self.in_stock,
        })
    }
}

fn parse_price(raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(FormError::InvalidPrice(raw.to_owned())),
    }
}

/// Selected option value to category id. Empty or unparsable is `None`.
pub fn parse_category_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Draft of the category create form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    /// Build the request body. The description is always sent, even when empty.
    ///
    /// # Errors
    ///
    /// `MissingName` for a blank name.
    pub fn to_payload(&self) -> Result<CategoryPayload, FormError> {
        category_payload(&self.name, Some(self.description.as_str()))
    }
}

/// Category body from free text, as entered in the form or the edit prompts.
///
/// `None` for the description (a cancelled prompt) is sent as `null`.
///
/// # Errors
///
/// `MissingName` for a blank name.
pub fn category_payload(name: &str, description: Option<&str>) -> Result<CategoryPayload, FormError> {
    if name.trim().is_empty() {
        return Err(FormError::MissingName);
    }
    Ok(CategoryPayload { name: name.to_owned(), description: description.map(str::to_owned) })
}

/// One entry of a category `<select>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl CategoryOption {
    pub fn from_category(category: &Category) -> Self {
        Self { value: category.id.to_string(), label: category.name.clone() }
    }
}

/// Options for a category select, in server order.
pub fn category_options(categories: &[Category]) -> Vec<CategoryOption> {
    categories.iter().map(CategoryOption::from_category).collect()
}

/// An open product edit modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductEditor {
    pub product_id: i64,
    pub form: ProductForm,
    /// Category choices captured when the modal opened.
    pub options: Vec<CategoryOption>,
}

impl ProductEditor {
    pub fn new(product: &Product, categories: &[Category]) -> Self {
        Self {
            product_id: product.id,
            form: ProductForm::from_product(product),
            options: category_options(categories),
        }
    }
}
