//! Result variants shared by page flows.
//!
//! ERROR HANDLING
//! ==============
//! Flows never return `Err`. Every path, including errors that are
//! deliberately swallowed, is an explicit variant so pages and tests can
//! match on it.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use crate::error::ApiError;
use crate::net::api::ApiResult;

use super::notify::ToastKind;

/// Result of fetching a collection or aggregate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// 401: the caller must force a logout.
    Unauthorized,
    /// Shown to the user (inline or as a toast).
    Failed(String),
    /// Logged and otherwise ignored; the view keeps its previous data.
    Ignored(String),
}

impl LoadOutcome {
    pub fn from_error(error: &ApiError) -> Self {
        if error.is_unauthorized() { Self::Unauthorized } else { Self::Failed(error.user_message()) }
    }
}

/// Result of a create/update/delete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Rejected locally; nothing was sent.
    Invalid(String),
    Done { message: String },
    Failed(String),
    Unauthorized,
}

impl MutationOutcome {
    /// Classify a mutation response, using `fallback` when the server sent no message.
    pub fn from_result<T>(result: ApiResult<T>, fallback: &str) -> Self {
        match result {
            Ok(envelope) if envelope.is_success() => {
                let message = if envelope.message.trim().is_empty() { fallback.to_owned() } else { envelope.message };
                Self::Done { message }
            }
            Ok(envelope) => Self::Failed(ApiError::Status { status: envelope.status, message: envelope.message }.user_message()),
            Err(ApiError::Unauthorized) => Self::Unauthorized,
            Err(e) => Self::Failed(e.user_message()),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }

    /// Toast to show for this outcome; validation errors render inline instead.
    pub fn notice(&self) -> Option<(ToastKind, String)> {
        match self {
            Self::Done { message } => Some((ToastKind::Success, message.clone())),
            Self::Failed(message) => Some((ToastKind::Error, message.clone())),
            Self::Invalid(_) | Self::Unauthorized => None,
        }
    }
}
