//! Non-blocking notice bar replacing `alert`.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

/// Raise a notice that dismisses itself after its kind's delay.
fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, message: String) {
    let Some(id) = notices.try_update(|n| n.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(kind.dismiss_after_ms()).await;
            notices.update(|n| n.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn notify_success(notices: RwSignal<NoticeState>, message: impl Into<String>) {
    notify(notices, NoticeKind::Success, message.into());
}

/// Log and show an error notice.
pub fn notify_error(notices: RwSignal<NoticeState>, message: impl Into<String>) {
    let message = message.into();
    leptos::logging::error!("{message}");
    notify(notices, NoticeKind::Error, message);
}

#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-bar" role="status">
            {move || {
                notices
                    .get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div
                                class="notice"
                                class:notice--success={notice.kind == NoticeKind::Success}
                                class:notice--error={notice.kind == NoticeKind::Error}
                            >
                                <span class="notice__message">{notice.message}</span>
                                <button class="notice__close" on:click=move |_| notices.update(|n| n.dismiss(id))>
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
