//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process env at runtime, so backend addresses
//! are baked in at build time from `PROJECTDESK_API_URL` and
//! `PROJECTDESK_SOCKET_URL`. Tunables live here as constants so flows and
//! components agree on them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_SOCKET_URL: &str = "ws://localhost:8080/socket";

/// Rows requested per client-list page.
pub const CLIENT_PAGE_SIZE: u32 = 10;
/// Idle window after the last slider movement before execution values persist.
pub const AUTOSAVE_DEBOUNCE_MS: u32 = 500;
/// Lifetime of a toast notification.
pub const TOAST_LIFETIME_MS: u32 = 4000;

/// Backend addresses used by the REST layer and the socket client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub socket_url: String,
}

impl ClientConfig {
    /// Config baked into this build.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PROJECTDESK_API_URL"), option_env!("PROJECTDESK_SOCKET_URL"))
    }

    fn new(api: Option<&str>, socket: Option<&str>) -> Self {
        Self {
            api_base_url: non_empty(api).unwrap_or(DEFAULT_API_URL).trim_end_matches('/').to_owned(),
            socket_url: non_empty(socket).unwrap_or(DEFAULT_SOCKET_URL).to_owned(),
        }
    }

    /// Join an API path (leading `/`) onto the configured base URL.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
