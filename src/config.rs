//! Host configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the dashboard shell and serves the WASM bundle, so
//! its config is limited to the listen port and an optional site-root
//! override. Everything else comes from `[package.metadata.leptos]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `PROJECTDESK_SITE_ROOT`: overrides the Leptos `site-root`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a valid
    /// port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars("PORT", "PROJECTDESK_SITE_ROOT")
    }

    fn from_vars(port_key: &str, site_root_key: &str) -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var(port_key).ok().as_deref())?;
        let site_root = std::env::var(site_root_key)
            .ok()
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        Ok(Self { port, site_root })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    raw.parse::<u16>()
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ConfigError::InvalidPort { raw: raw.to_owned() })
}
