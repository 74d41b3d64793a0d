//! Admin console state: active tab, rendered lists, category dropdown.
//!
//! DESIGN
//! ======
//! Lists are replaced wholesale by each fetch, never patched. Every fetch
//! takes a ticket from `begin_load`; a response is applied only if its ticket
//! is still the newest for that list, so a slow earlier response cannot
//! overwrite a later one.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use super::forms::{CategoryOption, ProductEditor, category_options};
use crate::net::types::{Category, Product};

/// Admin tabs. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdminTab {
    #[default]
    AddProduct,
    AddCategory,
    ManageProducts,
    ManageCategories,
}

impl AdminTab {
    pub const ALL: [Self; 4] = [Self::AddProduct, Self::AddCategory, Self::ManageProducts, Self::ManageCategories];

    /// Id of the tab's content section.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::AddProduct => "add-product",
            Self::AddCategory => "add-category",
            Self::ManageProducts => "manage-products",
            Self::ManageCategories => "manage-categories",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddProduct => "Add product",
            Self::AddCategory => "Add category",
            Self::ManageProducts => "Manage products",
            Self::ManageCategories => "Manage categories",
        }
    }

    /// List fetched when the tab is entered.
    pub fn list(self) -> Option<ListKind> {
        match self {
            Self::ManageProducts => Some(ListKind::Products),
            Self::ManageCategories => Some(ListKind::Categories),
            Self::AddProduct | Self::AddCategory => None,
        }
    }
}

/// Server collections rendered by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Products,
    Categories,
}

/// Admin page state, provided via context as `RwSignal<AdminState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub active_tab: AdminTab,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    /// Options of the add-product category select.
    pub category_options: Vec<CategoryOption>,
    pub editor: Option<ProductEditor>,
    products_ticket: u64,
    categories_ticket: u64,
}

impl AdminState {
    /// Switch tabs. Returns the list to (re)load, if the tab shows one.
    ///
    /// Re-entering the active tab still reloads.
    pub fn activate(&mut self, tab: AdminTab) -> Option<ListKind> {
        self.active_tab = tab;
        tab.list()
    }

    pub fn is_active(&self, tab: AdminTab) -> bool {
        self.active_tab == tab
    }

    /// Whether the tab showing `list` is the active one.
    pub fn is_showing(&self, list: ListKind) -> bool {
        self.active_tab.list() == Some(list)
    }

    /// Start a fetch of `list` and return its ticket.
    pub fn begin_load(&mut self, list: ListKind) -> u64 {
        let ticket = match list {
            ListKind::Products => &mut self.products_ticket,
            ListKind::Categories => &mut self.categories_ticket,
        };
        *ticket += 1;
        *ticket
    }

    /// Replace the product list if `ticket` is the newest product fetch.
    pub fn apply_products(&mut self, ticket: u64, products: Vec<Product>) -> bool {
        if ticket != self.products_ticket {
            return false;
        }
        self.products = products;
        true
    }

    /// Replace the category list and dropdown if `ticket` is the newest
    /// category fetch.
    pub fn apply_categories(&mut self, ticket: u64, categories: Vec<Category>) -> bool {
        if ticket != self.categories_ticket {
            return false;
        }
        self.category_options = category_options(&categories);
        self.categories = categories;
        true
    }
}
