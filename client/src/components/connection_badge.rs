//! Socket status indicator.

use leptos::prelude::*;

use crate::state::connection::{ConnectionState, ConnectionStatus};

#[component]
pub fn ConnectionBadge() -> impl IntoView {
    let connection = expect_context::<RwSignal<ConnectionState>>();

    let class = move || match connection.get().status {
        ConnectionStatus::Connected => "connection-badge connection-badge--live",
        ConnectionStatus::Connecting => "connection-badge connection-badge--connecting",
        ConnectionStatus::Disconnected => "connection-badge connection-badge--offline",
    };
    let title = move || connection.get().last_error.unwrap_or_default();

    view! {
        <span class=class title=title>
            <span class="connection-badge__dot"></span>
            {move || connection.get().label()}
        </span>
    }
}
