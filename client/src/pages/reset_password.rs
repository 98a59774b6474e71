//! Recovery step three: choose a new password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::pages::login::finish;
use crate::state::account;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let inline_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        let password_value = password.get();
        let confirm_value = confirm.get();

        leptos::task::spawn_local(async move {
            let api = HttpApi::anonymous();
            let mut next = session.get_untracked();
            let outcome = account::reset_password(&api, &mut next, &password_value, &confirm_value).await;
            session.set(next);
            finish(&outcome, inline_error, notify, |path| navigate(path, NavigateOptions::default()));
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Choose a new password"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Update password"
                    </button>
                </form>
                <Show when=move || inline_error.get().is_some()>
                    <p class="login-message login-message--error">{move || inline_error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
