//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and interaction surfaces. Shared state
//! (session, toasts, socket status) comes from Leptos context; page state is
//! passed in as signals and callbacks.

pub mod client_form;
pub mod client_table;
pub mod connection_badge;
pub mod document_list;
pub mod execution_slider;
pub mod image_gallery;
pub mod milestone_list;
pub mod team_list;
pub mod toast_stack;
pub mod top_bar;
