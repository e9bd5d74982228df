//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (spawning requests, applying
//! results, logging failures) and delegates rendering details to
//! `components`.

pub mod login;
pub mod project_show;
pub mod projects;
pub mod signup;
