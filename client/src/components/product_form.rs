//! Add-product form and the field set it shares with the edit modal.
//!
//! DESIGN
//! ======
//! Inputs write raw text into a `ProductForm` signal; nothing is parsed until
//! submit, where `ProductForm::to_payload` applies the wire rules.

use leptos::prelude::*;

use crate::state::admin::AdminState;
use crate::state::forms::{CategoryOption, ProductForm};
use crate::state::notice::NoticeState;

/// Labelled inputs for every product field.
///
/// `id_prefix` keeps element ids unique when the add form and the edit modal
/// are both in the document; the add form uses an empty prefix so its select
/// keeps the id `category_id`.
#[component]
pub fn ProductFields(
    form: RwSignal<ProductForm>,
    #[prop(into)] options: Signal<Vec<CategoryOption>>,
    #[prop(default = "")] id_prefix: &'static str,
) -> impl IntoView {
    let id = move |field: &str| format!("{id_prefix}{field}");

    view! {
        <div class="form-group">
            <label for=id("name")>"Product name"</label>
            <input
                type="text"
                id=id("name")
                name="name"
                class="form-input"
                required
                prop:value=move || form.get().name
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for=id("description")>"Description"</label>
            <textarea
                id=id("description")
                name="description"
                class="form-textarea"
                rows="4"
                prop:value=move || form.get().description
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            ></textarea>
        </div>
        <div class="form-row">
            <div class="form-group">
                <label for=id("price")>"Price (₽)"</label>
                <input
                    type="number"
                    id=id("price")
                    name="price"
                    step="0.01"
                    class="form-input"
                    required
                    prop:value=move || form.get().price
                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for=id("category_id")>"Category"</label>
                <select
                    id=id("category_id")
                    name="category_id"
                    class="form-select"
                    prop:value=move || form.get().category_id
                    on:change=move |ev| form.update(|f| f.category_id = event_target_value(&ev))
                >
                    <option value="">"No category"</option>
                    {move || {
                        let selected = form.get().category_id;
                        options
                            .get()
                            .into_iter()
                            .map(|option| {
                                let is_selected = option.value == selected;
                                view! {
                                    <option value=option.value selected=is_selected>
                                        {option.label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
        </div>
        <div class="form-group">
            <label for=id("image_url")>"Image URL"</label>
            <input
                type="url"
                id=id("image_url")
                name="image_url"
                class="form-input"
                prop:value=move || form.get().image_url
                on:input=move |ev| form.update(|f| f.image_url = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    id=id("in_stock")
                    name="in_stock"
                    prop:checked=move || form.get().in_stock
                    on:change=move |ev| form.update(|f| f.in_stock = event_target_checked(&ev))
                />
                "In stock"
            </label>
        </div>
    }
}

/// The `admin-form`: creates a product.
///
/// On success the form resets and, if the product list is on screen, it is
/// reloaded.
#[component]
pub fn AddProductForm() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let form = RwSignal::new(ProductForm::default());
    let options = Signal::derive(move || admin.get().category_options);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use super::notice_bar::{notify_error, notify_success};
            use crate::actions::products::create_product;
            use crate::actions::refresh::spawn_reload;
            use crate::net::api::Catalog;
            use crate::state::admin::ListKind;

            let draft = form.get_untracked();
            leptos::task::spawn_local(async move {
                match create_product(&Catalog::browser(), &draft).await {
                    Ok(()) => {
                        notify_success(notices, "Product added");
                        form.set(ProductForm::default());
                        if admin.get_untracked().is_showing(ListKind::Products) {
                            spawn_reload(admin, ListKind::Products);
                        }
                    }
                    Err(e) => notify_error(notices, e.user_message("Error adding product")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (admin, notices);
        }
    };

    view! {
        <form id="admin-form" class="admin-form" on:submit=on_submit>
            <ProductFields form=form options=options/>
            <button type="submit" class="btn btn-success">"Add product"</button>
        </form>
    }
}
