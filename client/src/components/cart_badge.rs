//! Cart size badge and the add-to-cart handler.

use leptos::prelude::*;

use super::notice_bar::notify_success;
use crate::state::cart::{CartCount, CartStore};
use crate::state::notice::NoticeState;

/// Append `product_id` to the persisted cart and refresh the badge.
pub fn add_to_cart(cart: RwSignal<CartCount>, notices: RwSignal<NoticeState>, product_id: i64) {
    let size = CartStore::browser().add(product_id);
    cart.set(CartCount(size));
    notify_success(notices, "Added to cart");
}

#[component]
pub fn CartBadge() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartCount>>();

    // Storage is browser-only, so read it after hydration.
    Effect::new(move || cart.set(CartCount(CartStore::browser().len())));

    view! {
        <span class="cart-badge" title="Cart">
            "🛒 "
            {move || cart.get().0}
        </span>
    }
}
