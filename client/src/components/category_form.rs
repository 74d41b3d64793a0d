//! Add-category form.

use leptos::prelude::*;

use crate::state::admin::AdminState;
use crate::state::forms::CategoryForm;
use crate::state::notice::NoticeState;

/// The `category-form`: creates a category.
///
/// On success the category list and the product form's dropdown are
/// reloaded from a single fetch.
#[component]
pub fn AddCategoryForm() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let form = RwSignal::new(CategoryForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use super::notice_bar::{notify_error, notify_success};
            use crate::actions::categories::create_category;
            use crate::actions::refresh::spawn_reload;
            use crate::net::api::Catalog;
            use crate::state::admin::ListKind;

            let draft = form.get_untracked();
            leptos::task::spawn_local(async move {
                match create_category(&Catalog::browser(), &draft).await {
                    Ok(()) => {
                        notify_success(notices, "Category added");
                        form.set(CategoryForm::default());
                        spawn_reload(admin, ListKind::Categories);
                    }
                    Err(e) => notify_error(notices, e.user_message("Error adding category")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (admin, notices);
        }
    };

    view! {
        <form id="category-form" class="admin-form" on:submit=on_submit>
            <div class="form-group">
                <label for="category-name">"Category name"</label>
                <input
                    type="text"
                    id="category-name"
                    name="name"
                    class="form-input"
                    required
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="category-description">"Description"</label>
                <textarea
                    id="category-description"
                    name="description"
                    class="form-textarea"
                    rows="3"
                    prop:value=move || form.get().description
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-success">"Add category"</button>
        </form>
    }
}
