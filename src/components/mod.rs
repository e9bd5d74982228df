//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and dialogs while reading/writing shared
//! state from Leptos context providers or signals handed down by pages.

pub mod alert;
pub mod nav_bar;
pub mod project_modal;
pub mod protected_route;
