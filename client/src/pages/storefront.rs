//! Storefront page: product grid with two independent category filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation menu links to `/?category_id=N` as full page loads, and the
//! product fetch forwards that parameter for server-side filtering. The
//! `category-filter` select only toggles visibility of cards already on the
//! page. The two never read each other's state.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::actions::storefront::Storefront;
use crate::components::cart_badge::{CartBadge, add_to_cart};
use crate::components::product_card::ProductCard;
use crate::net::types::CategoryStats;
use crate::state::cart::CartCount;
use crate::state::notice::NoticeState;
use crate::util::filter::{CATEGORY_QUERY_PARAM, category_href, parse_category_param};

/// Load progress for the storefront data.
#[derive(Clone, Debug, PartialEq)]
enum Load {
    Pending,
    Ready(Storefront),
    Failed,
}

#[component]
pub fn StorefrontPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let cart = expect_context::<RwSignal<CartCount>>();
    let query = use_query_map();
    let category_id = move || query.with(|q| parse_category_param(q.get(CATEGORY_QUERY_PARAM).as_deref()));

    let data = RwSignal::new(Load::Pending);
    let selected = RwSignal::new(String::new());

    Effect::new(move || {
        let category_id = category_id();
        #[cfg(feature = "hydrate")]
        {
            use crate::actions::storefront::load_storefront;
            use crate::net::api::Catalog;

            leptos::task::spawn_local(async move {
                match load_storefront(&Catalog::browser(), category_id).await {
                    Ok(storefront) => data.set(Load::Ready(storefront)),
                    Err(e) => {
                        leptos::logging::error!("Error loading products: {e}");
                        data.set(Load::Failed);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = category_id;
        }
    });

    let on_add = Callback::new(move |product_id: i64| add_to_cart(cart, notices, product_id));
    let stats = Signal::derive(move || match data.get() {
        Load::Ready(storefront) => storefront.stats,
        Load::Pending | Load::Failed => Vec::new(),
    });

    view! {
        <Title text="Catalog"/>
        <div class="storefront">
            <header class="storefront__header">
                <h1>"Catalog"</h1>
                <CartBadge/>
                <a href="/admin" rel="external">"Admin"</a>
            </header>

            <CategoryNav stats=stats active=Signal::derive(category_id)/>

            <div class="storefront__filter">
                <label for="category-filter">"Show"</label>
                <select
                    id="category-filter"
                    class="form-select"
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="">"All categories"</option>
                    {move || {
                        stats
                            .get()
                            .into_iter()
                            .map(|s| view! { <option value=s.category_id.to_string()>{s.category_name}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>

            <div class="products-grid">
                {move || match data.get() {
                    Load::Pending => view! { <p>"Loading products..."</p> }.into_any(),
                    Load::Failed => view! { <p class="storefront__error">"Products are unavailable."</p> }.into_any(),
                    Load::Ready(storefront) if storefront.products.is_empty() => {
                        view! { <p>"No products found."</p> }.into_any()
                    }
                    Load::Ready(storefront) => {
                        storefront
                            .products
                            .into_iter()
                            .map(|product| {
                                view! { <ProductCard product=product selected_category=selected on_add=on_add/> }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Full-page category links with product counts.
#[component]
fn CategoryNav(stats: Signal<Vec<CategoryStats>>, active: Signal<Option<i64>>) -> impl IntoView {
    view! {
        <nav class="category-nav">
            <a href=category_href(None) rel="external" class:active=move || active.get().is_none()>
                "All"
            </a>
            {move || {
                stats
                    .get()
                    .into_iter()
                    .map(|s| {
                        let id = s.category_id;
                        view! {
                            <a
                                href=category_href(Some(id))
                                rel="external"
                                class:active=move || active.get() == Some(id)
                            >
                                {s.category_name}
                                " ("
                                {s.product_count}
                                ")"
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
