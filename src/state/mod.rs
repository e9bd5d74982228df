//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth_form`, `projects`) so pages can
//! depend on small focused models. Every model here is plain data with pure
//! transitions; pages wrap them in `RwSignal`s.

pub mod auth_form;
pub mod projects;
pub mod session;
