//! Header shown on authenticated pages: segment navigation, socket status,
//! signed-in admin, and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::connection_badge::ConnectionBadge;
use crate::state::clients::SEGMENTS;
use crate::state::session::SessionState;
use crate::util::auth::logout_and_redirect;

#[component]
pub fn TopBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| logout_and_redirect(session, &navigate);

    view! {
        <header class="top-bar">
            <span class="top-bar__brand">"ProjectDesk"</span>
            <nav class="top-bar__nav">
                {SEGMENTS
                    .iter()
                    .map(|(segment, label)| {
                        view! { <a class="top-bar__link" href=format!("/clients/{segment}")>{*label}</a> }
                    })
                    .collect_view()}
            </nav>
            <span class="top-bar__spacer"></span>
            <ConnectionBadge/>
            <span class="top-bar__user">{move || session.get().display_name()}</span>
            <button class="btn top-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
