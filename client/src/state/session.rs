//! Session state for the signed-in admin and the account-recovery flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided via context from `App`. The bearer token and user are persisted
//! to `localStorage`; the recovery ticket (email from the request step, OTP
//! after verification) is kept in memory and travels only through this
//! context between recovery screens.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{LoginData, SessionUser};
use crate::util::storage;

pub const SESSION_STORAGE_KEY: &str = "projectdesk_session";

/// In-progress account recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveryTicket {
    pub email: String,
    /// Set once the backend accepted the code.
    pub otp: Option<String>,
}

/// Authentication state plus recovery context.
///
/// `restored` stays `false` until the browser has read persisted state, so
/// route guards do not redirect during server rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    pub recovery: Option<RecoveryTicket>,
    pub restored: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
    user: Option<SessionUser>,
}

impl SessionState {
    /// Read persisted credentials from `localStorage`.
    pub fn restore(&mut self) {
        if let Some(saved) = storage::load_json::<PersistedSession>(SESSION_STORAGE_KEY) {
            self.token = Some(saved.token);
            self.user = saved.user;
        }
        self.restored = true;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn sign_in(&mut self, data: LoginData) {
        storage::save_json(
            SESSION_STORAGE_KEY,
            &PersistedSession { token: data.token.clone(), user: Some(data.user.clone()) },
        );
        self.token = Some(data.token);
        self.user = Some(data.user);
        self.restored = true;
    }

    /// Drop credentials in memory and in storage.
    pub fn clear_auth(&mut self) {
        self.token = None;
        self.user = None;
        storage::remove(SESSION_STORAGE_KEY);
    }

    pub fn begin_recovery(&mut self, email: String) {
        self.recovery = Some(RecoveryTicket { email, otp: None });
    }

    pub fn recovery_email(&self) -> Option<&str> {
        self.recovery.as_ref().map(|r| r.email.as_str())
    }

    pub fn mark_otp_verified(&mut self, otp: String) {
        if let Some(ticket) = self.recovery.as_mut() {
            ticket.otp = Some(otp);
        }
    }

    /// Email and accepted code, once both steps are done.
    pub fn verified_recovery(&self) -> Option<(&str, &str)> {
        let ticket = self.recovery.as_ref()?;
        Some((ticket.email.as_str(), ticket.otp.as_deref()?))
    }

    pub fn finish_recovery(&mut self) {
        self.recovery = None;
    }

    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "Admin".to_owned(), |u| u.name.clone())
    }
}
