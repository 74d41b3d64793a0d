//! Edit-product modal.
//!
//! Shown while `AdminState::editor` is set. The draft lives in a local signal
//! seeded from the editor; saving PUTs it, closes the modal and reloads the
//! product list. Cancel closes without a request.

use leptos::prelude::*;

use super::product_form::ProductFields;
use crate::state::admin::AdminState;
use crate::state::forms::ProductEditor;
use crate::state::notice::NoticeState;

#[component]
pub fn ProductEditorModal() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    // List reloads must not rebuild an open modal and drop the draft.
    let editor = Memo::new(move |_| admin.with(|s| s.editor.clone()));

    view! {
        {move || editor.get().map(|editor| view! { <EditorDialog editor=editor/> })}
    }
}

#[component]
fn EditorDialog(editor: ProductEditor) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let product_id = editor.product_id;
    let form = RwSignal::new(editor.form);
    let options = Signal::stored(editor.options);

    let close = move || admin.update(|s| s.editor = None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use super::notice_bar::{notify_error, notify_success};
            use crate::actions::products::update_product;
            use crate::actions::refresh::spawn_reload;
            use crate::net::api::Catalog;
            use crate::state::admin::ListKind;

            let draft = ProductEditor { product_id, form: form.get_untracked(), options: options.get_untracked() };
            leptos::task::spawn_local(async move {
                match update_product(&Catalog::browser(), &draft).await {
                    Ok(()) => {
                        notify_success(notices, "Product updated");
                        close();
                        spawn_reload(admin, ListKind::Products);
                    }
                    Err(e) => notify_error(notices, e.user_message("Error updating product")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product_id, notices);
        }
    };

    view! {
        <div id="edit-modal" class="dialog-backdrop modal-overlay">
            <div class="dialog modal-content" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit product"</h2>
                <form id="edit-product-form" on:submit=on_submit>
                    <ProductFields form=form options=options id_prefix="edit-"/>
                    <div class="modal-actions">
                        <button type="submit" class="btn btn-success">"Save"</button>
                        <button type="button" class="btn btn-secondary" on:click=move |_| close()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
