use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn added_item_survives_reload() {
    let storage = MemoryStorage::default();
    let cart = CartStore::new(storage.clone());
    assert!(cart.is_empty());
    assert_eq!(cart.add(42), 1);

    let reloaded = CartStore::new(storage.clone());
    assert_eq!(reloaded.items(), vec![42]);
    assert_eq!(storage.get_item(CART_STORAGE_KEY).as_deref(), Some("[42]"));
}

#[test]
fn duplicates_are_kept_in_order() {
    let cart = CartStore::new(MemoryStorage::default());
    cart.add(1);
    cart.add(2);
    cart.add(1);
    assert_eq!(cart.items(), vec![1, 2, 1]);
    assert_eq!(cart.len(), 3);
}

#[test]
fn corrupted_cart_is_replaced() {
    let storage = MemoryStorage::default();
    storage.set_item(CART_STORAGE_KEY, "not-json");
    let cart = CartStore::new(storage);
    assert!(cart.items().is_empty());
    cart.add(7);
    assert_eq!(cart.items(), vec![7]);
}
