//! Admin tab buttons.

use leptos::prelude::*;

use crate::actions::refresh::spawn_reload;
use crate::state::admin::{AdminState, AdminTab};

/// One button per tab, each bound to its own `AdminTab`.
///
/// Entering a manage tab reloads its list.
#[component]
pub fn TabBar() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();

    let open_tab = move |tab: AdminTab| {
        if let Some(Some(list)) = admin.try_update(|s| s.activate(tab)) {
            spawn_reload(admin, list);
        }
    };

    view! {
        <nav class="admin-tabs">
            {AdminTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-btn"
                            class:active=move || admin.get().is_active(tab)
                            on:click=move |_| open_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
