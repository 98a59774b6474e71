//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`clients`, `project`) and by cross-cutting
//! concern (`session`, `notify`, `connection`). Each module is plain data plus
//! async flows generic over the `net::api` traits; pages hold them in
//! `RwSignal`s and apply flow results.

pub mod account;
pub mod clients;
pub mod connection;
pub mod execution;
pub mod gallery;
pub mod milestones;
pub mod notify;
pub mod outcome;
pub mod project;
pub mod session;
