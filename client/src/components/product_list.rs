//! Admin product list (`products-list`).
//!
//! Rows are re-rendered from `AdminState::products` on every fetch. Each
//! row's Edit and Delete buttons are bound to that row's product id.

use leptos::prelude::*;

use crate::state::admin::AdminState;
use crate::state::notice::NoticeState;
use crate::util::dialog::DialogHandle;
use crate::util::display::ProductRow;

#[component]
pub fn ProductList() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let dialogs = expect_context::<DialogHandle>();

    let on_edit = Callback::new(move |product_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            use super::notice_bar::notify_error;
            use crate::actions::products::open_product_editor;
            use crate::net::api::Catalog;

            leptos::task::spawn_local(async move {
                match open_product_editor(&Catalog::browser(), product_id).await {
                    Ok(editor) => admin.update(|s| s.editor = Some(editor)),
                    Err(e) => notify_error(notices, e.user_message("Error loading product")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product_id, notices);
        }
    });

    let on_delete = Callback::new(move |product_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            use super::notice_bar::{notify_error, notify_success};
            use crate::actions::Outcome;
            use crate::actions::products::delete_product;
            use crate::actions::refresh::spawn_reload;
            use crate::net::api::Catalog;
            use crate::state::admin::ListKind;

            leptos::task::spawn_local(async move {
                match delete_product(&Catalog::browser(), &dialogs, product_id).await {
                    Ok(Outcome::Completed(())) => {
                        notify_success(notices, "Product deleted");
                        spawn_reload(admin, ListKind::Products);
                    }
                    Ok(Outcome::Cancelled) => {}
                    Err(e) => notify_error(notices, e.user_message("Error deleting product")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product_id, dialogs);
        }
    });

    view! {
        <div id="products-list" class="admin-list">
            {move || {
                admin
                    .get()
                    .products
                    .iter()
                    .map(ProductRow::from_product)
                    .map(|row| {
                        let id = row.id;
                        view! {
                            <div class="product-item">
                                <div class="product-info">
                                    <h4>{row.name}</h4>
                                    <p>{row.summary}</p>
                                    <p>{row.stock}</p>
                                </div>
                                <div class="product-actions">
                                    <button class="btn btn-secondary" on:click=move |_| on_edit.run(id)>
                                        "Edit"
                                    </button>
                                    <button class="btn btn-danger" on:click=move |_| on_delete.run(id)>
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
