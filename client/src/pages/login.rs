//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_stack::announce;
use crate::net::api::HttpApi;
use crate::state::account::{self, AccountOutcome};
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let inline_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        inline_error.set(None);
        let navigate = navigate.clone();
        let email_value = email.get();
        let password_value = password.get();

        leptos::task::spawn_local(async move {
            let api = HttpApi::anonymous();
            let mut next = session.get_untracked();
            let outcome = account::login(&api, &mut next, &email_value, &password_value).await;
            session.set(next);
            finish(&outcome, inline_error, notify, |path| navigate(path, NavigateOptions::default()));
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ProjectDesk"</h1>
                <p class="login-card__subtitle">"Admin sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || inline_error.get().is_some()>
                    <p class="login-message login-message--error">{move || inline_error.get().unwrap_or_default()}</p>
                </Show>
                <a class="login-link" href="/forgot-password">
                    "Forgot your password?"
                </a>
            </div>
        </div>
    }
}

/// Apply an account outcome: inline error, toast, and navigation.
pub(crate) fn finish<G: FnOnce(&str)>(
    outcome: &AccountOutcome,
    inline_error: RwSignal<Option<&'static str>>,
    notify: RwSignal<NotifyState>,
    navigate: G,
) {
    inline_error.set(outcome.inline_error());
    account::dispatch(outcome, |kind, message| announce(notify, Some((kind, message))), navigate);
}
