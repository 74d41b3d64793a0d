//! Category create, list, edit and delete workflows.
//!
//! Editing goes through two prompts (name, then description) rather than a
//! modal form.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use super::{ActionError, Outcome};
use crate::net::api::{ApiError, Catalog, Transport};
use crate::net::types::Category;
use crate::state::forms::{CategoryForm, category_payload};
use crate::util::dialog::Dialogs;

pub const CONFIRM_DELETE_CATEGORY: &str = "Are you sure you want to delete this category?";
pub const PROMPT_CATEGORY_NAME: &str = "Enter the new category name:";
pub const PROMPT_CATEGORY_DESCRIPTION: &str = "Enter the new category description:";

/// # Errors
///
/// `Form` for a blank name, `Api` when the call fails.
pub async fn create_category<T: Transport>(catalog: &Catalog<T>, form: &CategoryForm) -> Result<(), ActionError> {
    let payload = form.to_payload()?;
    Ok(catalog.create_category(&payload).await?)
}

/// # Errors
///
/// Any `ApiError` from the call.
pub async fn load_categories<T: Transport>(catalog: &Catalog<T>) -> Result<Vec<Category>, ApiError> {
    catalog.list_categories().await
}

/// Ask for confirmation, then delete. Declining sends nothing.
///
/// # Errors
///
/// `Api` when the delete fails.
pub async fn delete_category<T: Transport, D: Dialogs>(
    catalog: &Catalog<T>,
    dialogs: &D,
    category_id: i64,
) -> Result<Outcome<()>, ActionError> {
    if !dialogs.confirm(CONFIRM_DELETE_CATEGORY).await {
        return Ok(Outcome::Cancelled);
    }
    catalog.delete_category(category_id).await?;
    Ok(Outcome::Completed(()))
}

/// Prompt for a new name and description, then PUT them.
///
/// The current values are looked up in the full category list. Cancelling or
/// clearing the name prompt aborts without a request; cancelling only the
/// description prompt clears the description.
///
/// # Errors
///
/// `NotFound` if the category is gone, `Api` when a call fails.
pub async fn edit_category<T: Transport, D: Dialogs>(
    catalog: &Catalog<T>,
    dialogs: &D,
    category_id: i64,
) -> Result<Outcome<()>, ActionError> {
    let categories = catalog.list_categories().await?;
    let Some(category) = categories.into_iter().find(|c| c.id == category_id) else {
        return Err(ActionError::NotFound("Category"));
    };

    let name = dialogs.prompt(PROMPT_CATEGORY_NAME, &category.name).await;
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return Ok(Outcome::Cancelled);
    };
    let description = dialogs
        .prompt(PROMPT_CATEGORY_DESCRIPTION, category.description.as_deref().unwrap_or_default())
        .await;

    let payload = category_payload(&name, description.as_deref())?;
    catalog.update_category(category_id, &payload).await?;
    Ok(Outcome::Completed(()))
}
