//! Admin category list (`categories-list`).

use leptos::prelude::*;

use crate::state::admin::AdminState;
use crate::state::notice::NoticeState;
use crate::util::dialog::DialogHandle;
use crate::util::display::CategoryRow;

/// Category rows with prompt-driven Edit and confirm-guarded Delete.
///
/// Either mutation reloads the categories, which also refreshes the product
/// form's dropdown.
#[component]
pub fn CategoryList() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let dialogs = expect_context::<DialogHandle>();

    let on_edit = Callback::new(move |category_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            use super::notice_bar::{notify_error, notify_success};
            use crate::actions::Outcome;
            use crate::actions::categories::edit_category;
            use crate::actions::refresh::spawn_reload;
            use crate::net::api::Catalog;
            use crate::state::admin::ListKind;

            leptos::task::spawn_local(async move {
                match edit_category(&Catalog::browser(), &dialogs, category_id).await {
                    Ok(Outcome::Completed(())) => {
                        notify_success(notices, "Category updated");
                        spawn_reload(admin, ListKind::Categories);
                    }
                    Ok(Outcome::Cancelled) => {}
                    Err(e) => notify_error(notices, e.user_message("Error updating category")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (category_id, notices, dialogs);
        }
    });

    let on_delete = Callback::new(move |category_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            use super::notice_bar::{notify_error, notify_success};
            use crate::actions::Outcome;
            use crate::actions::categories::delete_category;
            use crate::actions::refresh::spawn_reload;
            use crate::net::api::Catalog;
            use crate::state::admin::ListKind;

            leptos::task::spawn_local(async move {
                match delete_category(&Catalog::browser(), &dialogs, category_id).await {
                    Ok(Outcome::Completed(())) => {
                        notify_success(notices, "Category deleted");
                        spawn_reload(admin, ListKind::Categories);
                    }
                    Ok(Outcome::Cancelled) => {}
                    Err(e) => notify_error(notices, e.user_message("Error deleting category")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (category_id, notices, dialogs);
        }
    });

    view! {
        <div id="categories-list" class="admin-list">
            {move || {
                admin
                    .get()
                    .categories
                    .iter()
                    .map(CategoryRow::from_category)
                    .map(|row| {
                        let id = row.id;
                        view! {
                            <div class="category-item-admin">
                                <div class="category-info">
                                    <h4>{row.name}</h4>
                                    <p>{row.description}</p>
                                    <small>{row.created}</small>
                                </div>
                                <div class="category-actions">
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
