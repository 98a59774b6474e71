//! Recovery step one: request a one-time code by email.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::pages::login::finish;
use crate::state::account;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let inline_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        let email_value = email.get();

        leptos::task::spawn_local(async move {
            let api = HttpApi::anonymous();
            let mut next = session.get_untracked();
            let outcome = account::request_code(&api, &mut next, &email_value).await;
            session.set(next);
            finish(&outcome, inline_error, notify, |path| navigate(path, NavigateOptions::default()));
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reset password"</h1>
                <p class="login-card__subtitle">"We will email you a verification code."</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Send code"
                    </button>
                </form>
                <Show when=move || inline_error.get().is_some()>
                    <p class="login-message login-message--error">{move || inline_error.get().unwrap_or_default()}</p>
                </Show>
                <a class="login-link" href="/login">
                    "Back to sign in"
                </a>
            </div>
        </div>
    }
}
