//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every REST call resolves to `Result<Envelope<T>, ApiError>`. Flows map the
//! error to an outcome enum; nothing here is fatal to the UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when the server gave nothing usable.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401 from the backend; the session is no longer valid.
    #[error("session expired")]
    Unauthorized,
    /// Non-success status with the server-provided message (may be empty).
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for a toast: the server message when present, else the fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            _ => FALLBACK_MESSAGE.to_owned(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
