//! Route table and the authentication guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route renders through `ProtectedRoute`, which asks `check`
//! whether to admit, redirect to `/login`, or wait for the session to load.
//! A present token is trusted as-is; expiry is the server's business.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const PROJECTS_ROUTE: &str = "/projects";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Signup,
    Login,
    Root,
    Projects,
    /// Raw `:id` segment; the page validates it.
    ProjectShow(String),
    NotFound,
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Root,
            ["signup"] => Self::Signup,
            ["login"] => Self::Login,
            ["projects"] => Self::Projects,
            ["projects", id] => Self::ProjectShow((*id).to_owned()),
            _ => Self::NotFound,
        }
    }

    pub fn is_guarded(&self) -> bool {
        matches!(self, Self::Root | Self::Projects | Self::ProjectShow(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not read yet; render a placeholder.
    Pending,
    Admit,
    Redirect(&'static str),
}

pub fn check(route: &AppRoute, session: &SessionState) -> GuardDecision {
    if !route.is_guarded() {
        return GuardDecision::Admit;
    }
    if session.loading {
        return GuardDecision::Pending;
    }
    if session.is_authenticated() {
        GuardDecision::Admit
    } else {
        GuardDecision::Redirect(LOGIN_ROUTE)
    }
}

/// Path for a project's detail route.
pub fn project_route(id: impl std::fmt::Display) -> String {
    format!("{PROJECTS_ROUTE}/{id}")
}
