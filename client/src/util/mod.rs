//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, downloads, clocks,
//! pointer geometry) from page and component logic. Each has a pure core
//! that runs natively and a hydrate-only shell.

pub mod auth;
pub mod clock;
pub mod download;
pub mod slider;
pub mod storage;
