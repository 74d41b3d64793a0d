//! Persisted shopping cart: an ordered list of product ids.
//!
//! TRADE-OFFS
//! ==========
//! `add` is a plain read-modify-write against storage. Two tabs adding at
//! the same moment can lose one write; there is no cross-tab locking.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::util::storage::{BrowserStorage, KeyValueStore, load_json, save_json};

/// Storage key holding the cart JSON array.
pub const CART_STORAGE_KEY: &str = "cart";

#[derive(Clone, Debug, Default)]
pub struct CartStore<S> {
    storage: S,
}

impl CartStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self { storage: BrowserStorage }
    }
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persisted ids; a missing or corrupted entry reads as empty.
    pub fn items(&self) -> Vec<i64> {
        load_json(&self.storage, CART_STORAGE_KEY).unwrap_or_default()
    }

    /// Append `product_id` (duplicates allowed) and return the new size.
    pub fn add(&self, product_id: i64) -> usize {
        let mut items = self.items();
        items.push(product_id);
        save_json(&self.storage, CART_STORAGE_KEY, &items);
        items.len()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Cart size mirrored into a signal for the header badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartCount(pub usize);
