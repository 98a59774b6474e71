//! Login and OTP account-recovery flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Recovery is three screens: request a code for an email, verify the code,
//! then set a new password. The email and the accepted code are carried in
//! `SessionState.recovery` between screens. No flow retries; a rejected
//! attempt needs a new submission.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use crate::error::FALLBACK_MESSAGE;
use crate::net::api::AccountApi;
use crate::net::types::{LoginRequest, ResetPasswordRequest, VerifyOtpRequest};

use super::notify::ToastKind;
use super::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";
pub const VERIFY_OTP_ROUTE: &str = "/verify-otp";
pub const RESET_PASSWORD_ROUTE: &str = "/reset-password";
pub const HOME_ROUTE: &str = "/";

pub const MIN_PASSWORD_LEN: usize = 8;

/// Result of an account flow step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountOutcome {
    /// Blocked before any request; shown inline next to the form.
    Invalid(&'static str),
    /// Step accepted; show `message` and navigate to `redirect`.
    Advanced { message: String, redirect: &'static str },
    /// Backend or network rejected the step; shown as an error toast.
    Rejected(String),
}

impl AccountOutcome {
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::Advanced { redirect, .. } => Some(*redirect),
            _ => None,
        }
    }

    pub fn inline_error(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(message) => Some(*message),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<(ToastKind, String)> {
        match self {
            Self::Advanced { message, .. } => Some((ToastKind::Success, message.clone())),
            Self::Rejected(message) => Some((ToastKind::Error, message.clone())),
            Self::Invalid(_) => None,
        }
    }
}

/// Apply an outcome's side effects: at most one toast, at most one navigation.
pub fn dispatch<N, G>(outcome: &AccountOutcome, notify: N, navigate: G)
where
    N: FnOnce(ToastKind, String),
    G: FnOnce(&str),
{
    if let Some((kind, message)) = outcome.notice() {
        notify(kind, message);
    }
    if let Some(path) = outcome.redirect() {
        navigate(path);
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

pub fn validate_code(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim();
    if code.is_empty() {
        return Err("Enter the verification code.");
    }
    Ok(code.to_owned())
}

pub fn validate_new_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.is_empty() || confirm.is_empty() {
        return Err("Enter and confirm the new password.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(password.to_owned())
}

fn message_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}

// =============================================================================
// FLOWS
// =============================================================================

/// Sign in and persist the returned bearer token.
pub async fn login<A: AccountApi>(api: &A, session: &mut SessionState, email: &str, password: &str) -> AccountOutcome {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return AccountOutcome::Invalid("Enter your email and password.");
    }
    let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    match api.login(&request).await {
        Ok(envelope) if envelope.is_success() => match envelope.data {
            Some(data) => {
                session.sign_in(data);
                AccountOutcome::Advanced { message: message_or(envelope.message, "Welcome back."), redirect: HOME_ROUTE }
            }
            None => AccountOutcome::Rejected(FALLBACK_MESSAGE.to_owned()),
        },
        Ok(envelope) => AccountOutcome::Rejected(message_or(envelope.message, FALLBACK_MESSAGE)),
        Err(e) => AccountOutcome::Rejected(e.user_message()),
    }
}

/// Ask the backend to send a recovery code and remember the email for the next step.
pub async fn request_code<A: AccountApi>(api: &A, session: &mut SessionState, email: &str) -> AccountOutcome {
    let email = match validate_email(email) {
        Ok(email) => email,
        Err(message) => return AccountOutcome::Invalid(message),
    };
    match api.request_recovery_code(&email).await {
        Ok(envelope) if envelope.is_success() => {
            session.begin_recovery(email);
            AccountOutcome::Advanced {
                message: message_or(envelope.message, "Verification code sent."),
                redirect: VERIFY_OTP_ROUTE,
            }
        }
        Ok(envelope) => AccountOutcome::Rejected(message_or(envelope.message, FALLBACK_MESSAGE)),
        Err(e) => AccountOutcome::Rejected(e.user_message()),
    }
}

/// Verify a one-time code against the email from the request step.
///
/// Only an envelope status of exactly 200 counts as success.
pub async fn verify_code<A: AccountApi>(api: &A, session: &mut SessionState, code: &str) -> AccountOutcome {
    let code = match validate_code(code) {
        Ok(code) => code,
        Err(message) => return AccountOutcome::Invalid(message),
    };
    let Some(email) = session.recovery_email().map(str::to_owned) else {
        return AccountOutcome::Invalid("Start account recovery again.");
    };
    let request = VerifyOtpRequest { email, otp: code.clone() };
    match api.verify_otp(&request).await {
        Ok(envelope) if envelope.is_status(200) => {
            session.mark_otp_verified(code);
            AccountOutcome::Advanced {
                message: message_or(envelope.message, "Code verified."),
                redirect: RESET_PASSWORD_ROUTE,
            }
        }
        Ok(envelope) => AccountOutcome::Rejected(message_or(envelope.message, FALLBACK_MESSAGE)),
        Err(e) => AccountOutcome::Rejected(e.user_message()),
    }
}

/// Set a new password with the verified recovery ticket.
pub async fn reset_password<A: AccountApi>(
    api: &A,
    session: &mut SessionState,
    password: &str,
    confirm: &str,
) -> AccountOutcome {
    let password = match validate_new_password(password, confirm) {
        Ok(password) => password,
        Err(message) => return AccountOutcome::Invalid(message),
    };
    let Some((email, otp)) = session.verified_recovery() else {
        return AccountOutcome::Invalid("Start account recovery again.");
    };
    let request = ResetPasswordRequest { email: email.to_owned(), otp: otp.to_owned(), password };
    match api.reset_password(&request).await {
        Ok(envelope) if envelope.is_success() => {
            session.finish_recovery();
            AccountOutcome::Advanced {
                message: message_or(envelope.message, "Password updated. Please sign in."),
                redirect: LOGIN_ROUTE,
            }
        }
        Ok(envelope) => AccountOutcome::Rejected(message_or(envelope.message, FALLBACK_MESSAGE)),
        Err(e) => AccountOutcome::Rejected(e.user_message()),
    }
}
