//! Recovery step two: submit the one-time code for the email captured in
//! step one. The email comes from `SessionState.recovery`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::pages::login::finish;
use crate::state::account;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let code = RwSignal::new(String::new());
    let inline_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let recovery_email = move || session.get().recovery_email().map(str::to_owned);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        let code_value = code.get();

        leptos::task::spawn_local(async move {
            let api = HttpApi::anonymous();
            let mut next = session.get_untracked();
            let outcome = account::verify_code(&api, &mut next, &code_value).await;
            session.set(next);
            finish(&outcome, inline_error, notify, |path| navigate(path, NavigateOptions::default()));
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Enter verification code"</h1>
                <p class="login-card__subtitle">
                    {move || match recovery_email() {
                        Some(email) => format!("Code sent to {email}"),
                        None => "No recovery in progress.".to_owned(),
                    }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input login-input--code"
                        type="text"
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Verify"
                    </button>
                </form>
                <Show when=move || inline_error.get().is_some()>
                    <p class="login-message login-message--error">{move || inline_error.get().unwrap_or_default()}</p>
                </Show>
                <a class="login-link" href="/forgot-password">
                    "Send a new code"
                </a>
            </div>
        </div>
    }
}
