//! Networking modules for the REST backend and the socket connection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the backend traits and the browser HTTP implementation,
//! `socket` manages the socket lifecycle, and `types` defines the wire schema.

pub mod api;
pub mod socket;
pub mod types;
