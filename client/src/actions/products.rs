//! Product create, list, edit and delete workflows.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use super::{ActionError, Outcome};
use crate::net::api::{ApiError, Catalog, FULL_PAGE_SIZE, Transport};
use crate::net::types::Product;
use crate::state::forms::{ProductEditor, ProductForm};
use crate::util::dialog::Dialogs;

pub const CONFIRM_DELETE_PRODUCT: &str = "Are you sure you want to delete this product?";

/// Validate the form and POST it. No request is sent for an invalid form.
///
/// # Errors
///
/// `Form` for invalid input, `Api` when the call fails.
pub async fn create_product<T: Transport>(catalog: &Catalog<T>, form: &ProductForm) -> Result<(), ActionError> {
    let payload = form.to_payload()?;
    Ok(catalog.create_product(&payload).await?)
}

/// All products, fetched as one oversized first page.
///
/// # Errors
///
/// Any `ApiError` from the call.
pub async fn load_products<T: Transport>(catalog: &Catalog<T>) -> Result<Vec<Product>, ApiError> {
    Ok(catalog.list_products(1, FULL_PAGE_SIZE, None).await?.items)
}

/// Ask for confirmation, then delete. Declining sends nothing.
///
/// # Errors
///
/// `Api` when the delete fails.
pub async fn delete_product<T: Transport, D: Dialogs>(
    catalog: &Catalog<T>,
    dialogs: &D,
    product_id: i64,
) -> Result<Outcome<()>, ActionError> {
    if !dialogs.confirm(CONFIRM_DELETE_PRODUCT).await {
        return Ok(Outcome::Cancelled);
    }
    catalog.delete_product(product_id).await?;
    Ok(Outcome::Completed(()))
}

/// Fetch a product and the category choices for its edit modal.
///
/// A failed category fetch is logged and leaves only "No category".
///
/// # Errors
///
/// `Api` when the product cannot be fetched.
pub async fn open_product_editor<T: Transport>(catalog: &Catalog<T>, product_id: i64) -> Result<ProductEditor, ActionError> {
    let product = catalog.get_product(product_id).await?;
    let categories = catalog.list_categories().await.unwrap_or_else(|e| {
        leptos::logging::error!("Error loading categories: {e}");
        Vec::new()
    });
    Ok(ProductEditor::new(&product, &categories))
}

/// PUT the edited form.
///
/// # Errors
///
/// `Form` for invalid input, `Api` when the call fails.
pub async fn update_product<T: Transport>(catalog: &Catalog<T>, editor: &ProductEditor) -> Result<(), ActionError> {
    let payload = editor.form.to_payload()?;
    Ok(catalog.update_product(editor.product_id, &payload).await?)
}
