//! Storefront product card.
//!
//! DESIGN
//! ======
//! Cards carry `data-category` for the client-side filter and hide
//! themselves when it does not match the selection. A missing or broken
//! image is swapped for a placeholder.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::display::{NO_IMAGE_LABEL, description_label, image_src, price_label, stock_label};
use crate::util::filter::{card_category_attr, card_visible};

#[component]
pub fn ProductCard(
    product: Product,
    /// Value of the `category-filter` select; empty shows every card.
    #[prop(into)]
    selected_category: Signal<String>,
    on_add: Callback<i64>,
) -> impl IntoView {
    let id = product.id;
    let category = card_category_attr(&product);
    let image = image_src(&product).map(str::to_owned);
    let href = format!("/product/{id}");
    let name = product.name;
    let alt = name.clone();
    let description = description_label(product.description.as_deref()).to_owned();
    let in_stock = product.in_stock;

    let display = {
        let category = category.clone();
        move || if card_visible(&category, &selected_category.get()) { "block" } else { "none" }
    };

    view! {
        <div class="product-card" data-category=category style:display=display>
            <ProductImage src=image alt=alt/>
            <div class="product-card__body">
                <h3 class="product-card__name">
                    <a href=href>{name}</a>
                </h3>
                <p class="product-card__description">{description}</p>
                <p class="product-card__price">{price_label(product.price)}</p>
                <p class="product-card__stock">{stock_label(in_stock)}</p>
                <button class="btn btn-primary" on:click=move |_| on_add.run(id)>
                    "Add to cart"
                </button>
            </div>
        </div>
    }
}

/// Product image, or the placeholder when absent or failed to load.
#[component]
pub fn ProductImage(src: Option<String>, alt: String) -> impl IntoView {
    let failed = RwSignal::new(false);
    let placeholder = || {
        view! {
            <div class="no-image-placeholder">
                <span>"🖼️"</span>
                <p>{NO_IMAGE_LABEL}</p>
            </div>
        }
    };

    view! {
        {move || match src.clone() {
            Some(src) if !failed.get() => {
                view! { <img src=src alt=alt.clone() on:error=move |_| failed.set(true)/> }.into_any()
            }
            _ => placeholder().into_any(),
        }}
    }
}
