//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it reads context, runs the
//! state-module flows on `spawn_local`, and applies their outcomes (toasts,
//! navigation, forced logout). Rendering details live in `components`.

pub mod clients;
pub mod forgot_password;
pub mod login;
pub mod project_detail;
pub mod reset_password;
pub mod verify_otp;
