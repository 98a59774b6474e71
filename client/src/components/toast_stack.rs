//! Toast notifications pinned to the corner of the viewport.

use leptos::prelude::*;

use crate::config::TOAST_LIFETIME_MS;
use crate::state::notify::{NotifyState, ToastKind};
use crate::util::clock::sleep_ms;

/// Push `notice` (if any) and schedule its dismissal.
pub fn announce(notify: RwSignal<NotifyState>, notice: Option<(ToastKind, String)>) {
    let Some((kind, message)) = notice else {
        return;
    };
    let mut id = 0;
    notify.update(|n| id = n.push(kind, message));
    leptos::task::spawn_local(async move {
        sleep_ms(TOAST_LIFETIME_MS).await;
        notify.update(|n| n.dismiss(id));
    });
}

/// Renders queued toasts; clicking one dismisses it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                notify
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <button class=toast.kind.class() on:click=move |_| notify.update(|n| n.dismiss(id))>
                                {toast.message}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
