//! Product detail page (`/product/:id`).

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::cart_badge::{CartBadge, add_to_cart};
use crate::components::product_card::ProductImage;
use crate::net::types::Product;
use crate::state::cart::CartCount;
use crate::state::notice::NoticeState;
use crate::util::display::{category_label, description_label, image_src, price_label, stock_label};

#[derive(Clone, Debug, PartialEq)]
enum Load {
    Pending,
    Ready(Product),
    NotFound,
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let cart = expect_context::<RwSignal<CartCount>>();
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));

    let data = RwSignal::new(Load::Pending);

    Effect::new(move || {
        let Some(product_id) = product_id() else {
            data.set(Load::NotFound);
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::Catalog;

            leptos::task::spawn_local(async move {
                match Catalog::browser().get_product(product_id).await {
                    Ok(product) => data.set(Load::Ready(product)),
                    Err(e) => {
                        leptos::logging::error!("Error loading product {product_id}: {e}");
                        data.set(Load::NotFound);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = product_id;
        }
    });

    view! {
        <div class="product-page">
            <header class="storefront__header">
                <a href="/" rel="external">"← Catalog"</a>
                <CartBadge/>
            </header>
            {move || match data.get() {
                Load::Pending => view! { <p>"Loading..."</p> }.into_any(),
                Load::NotFound => {
                    view! {
                        <Title text="Product not found"/>
                        <h1>"Product not found"</h1>
                    }
                        .into_any()
                }
                Load::Ready(product) => {
                    let id = product.id;
                    let image = image_src(&product).map(str::to_owned);
                    let category = category_label(product.category.as_ref()).to_owned();
                    let description = description_label(product.description.as_deref()).to_owned();
                    let price = price_label(product.price);
                    let stock = stock_label(product.in_stock);
                    let title = product.name.clone();
                    let alt = product.name.clone();
                    view! {
                        <Title text=title/>
                        <article class="product-detail">
                            <ProductImage src=image alt=alt/>
                            <h1>{product.name}</h1>
                            <p class="product-detail__category">{category}</p>
                            <p>{description}</p>
                            <p class="product-detail__price">{price}</p>
                            <p>{stock}</p>
                            <button class="btn btn-primary" on:click=move |_| add_to_cart(cart, notices, id)>
                                "Add to cart"
                            </button>
                        </article>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
