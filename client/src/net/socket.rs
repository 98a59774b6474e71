//! Socket lifecycle for live updates from the backend.
//!
//! The dashboard opens one socket at hydrate time against the configured
//! address. Only connect and connect-error events are observed: they are
//! logged and mirrored into [`ConnectionState`]. Inbound messages are
//! currently ignored. Disconnects reconnect with exponential backoff.
//!
//! All socket I/O is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

#[cfg(feature = "hydrate")]
use crate::state::connection::ConnectionState;

pub const INITIAL_BACKOFF_MS: u32 = 1000;
pub const MAX_BACKOFF_MS: u32 = 10_000;

/// Next reconnect delay: doubles up to [`MAX_BACKOFF_MS`].
pub fn next_backoff_ms(current: u32) -> u32 {
    current.saturating_mul(2).clamp(INITIAL_BACKOFF_MS, MAX_BACKOFF_MS)
}

/// Spawn the socket lifecycle as a local async task.
#[cfg(feature = "hydrate")]
pub fn spawn_socket(url: String, connection: leptos::prelude::RwSignal<ConnectionState>) {
    leptos::task::spawn_local(socket_loop(url, connection));
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn socket_loop(url: String, connection: leptos::prelude::RwSignal<ConnectionState>) {
    use leptos::prelude::Update;

    let mut backoff_ms = INITIAL_BACKOFF_MS;

    loop {
        connection.update(ConnectionState::mark_connecting);

        match observe(&url, connection).await {
            Ok(()) => {
                leptos::logging::log!("socket disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("socket connect_error: {e}");
                connection.update(|c| c.mark_error(e));
            }
        }

        connection.update(ConnectionState::mark_disconnected);

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff_ms(backoff_ms);
    }
}

/// Open the socket and drain it until it closes.
#[cfg(feature = "hydrate")]
async fn observe(url: &str, connection: leptos::prelude::RwSignal<ConnectionState>) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (_write, mut read) = ws.split();

    connection.update(ConnectionState::mark_connected);
    leptos::logging::log!("socket connected: {url}");

    while let Some(msg) = read.next().await {
        if let Err(e) = msg {
            return Err(e.to_string());
        }
    }

    Ok(())
}
