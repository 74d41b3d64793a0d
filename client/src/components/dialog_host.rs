//! Modal host for confirm and prompt requests.
//!
//! Renders the open `DialogRequest` from the `DialogHandle` in context and
//! resolves it from the user's answer. Clicking the backdrop or pressing
//! Escape answers "no" / cancel. A newly opened dialog takes focus: the
//! input for prompts, the dialog box for confirms.

use leptos::prelude::*;

use crate::util::dialog::{DialogHandle, DialogRequest, DialogResponse};

#[component]
pub fn DialogHost() -> impl IntoView {
    let dialogs = expect_context::<DialogHandle>();
    let text = RwSignal::new(String::new());
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let current = move || dialogs.channel.with(|c| c.current().map(|(id, request)| (id, request.clone())));

    // Seed the prompt input whenever a new prompt opens.
    Effect::new(move || {
        if let Some((_, DialogRequest::Prompt { default, .. })) = current() {
            text.set(default);
        }
    });

    Effect::new(move || {
        let is_prompt = current().map(|(_, request)| request.is_prompt());
        let dialog_el = dialog_ref.get();
        let input_el = input_ref.get();
        #[cfg(feature = "hydrate")]
        {
            match (is_prompt, input_el, dialog_el) {
                (Some(true), Some(input), _) => {
                    let _ = input.focus();
                }
                (Some(false), _, Some(dialog)) => {
                    let _ = dialog.focus();
                }
                _ => {}
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (is_prompt, dialog_el, input_el);
        }
    });

    let cancel = move || {
        let response = current().map_or(DialogResponse::Confirmed(false), |(_, request)| request.cancel_response());
        dialogs.resolve(response);
    };
    let accept = move || {
        let response = match current() {
            Some((_, request)) if request.is_prompt() => DialogResponse::Text(Some(text.get_untracked())),
            _ => DialogResponse::Confirmed(true),
        };
        dialogs.resolve(response);
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            cancel();
        }
        "Enter" => {
            ev.prevent_default();
            accept();
        }
        _ => {}
    };

    view! {
        {move || {
            current()
                .map(|(_, request)| {
                    let is_prompt = request.is_prompt();
                    let message = match request {
                        DialogRequest::Confirm { message } | DialogRequest::Prompt { message, .. } => message,
                    };
                    view! {
                        <div class="dialog-backdrop" on:click=move |_| cancel()>
                            <div
                                class="dialog"
                                role="dialog"
                                tabindex="0"
                                node_ref=dialog_ref
                                on:click=move |ev| ev.stop_propagation()
                                on:keydown=on_keydown
                            >
                                <p class="dialog__message">{message}</p>
                                <Show when=move || is_prompt>
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        node_ref=input_ref
                                        prop:value=move || text.get()
                                        on:input=move |ev| text.set(event_target_value(&ev))
                                    />
                                </Show>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=move |_| cancel()>
                                        "Cancel"
                                    </button>
                                    <button class="btn btn--primary" on:click=move |_| accept()>
                                        "OK"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
