//! Signup/login form drafts and submission status.
//!
//! DESIGN
//! ======
//! Drafts keep raw field values until submit and borrow into request bodies.
//! `AuthFormState` is shared by both forms: a busy flag that drops duplicate
//! submits, the generic error line, and the success notification toggle.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::net::types::{LoginUser, SignupUser, UserEnvelope};

pub const SIGNUP_SUCCESS: &str = "Signup Successful";
pub const LOGIN_SUCCESS: &str = "Login Successful";
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Selectable roles: (wire value, label).
pub const ROLE_OPTIONS: &[(&str, &str)] = &[("manager", "Manager"), ("QA", "QA"), ("developer", "Developer")];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl SignupDraft {
    /// Every field is required.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.password, &self.role]
            .iter()
            .all(|field| !field.is_empty())
    }

    pub fn to_request(&self) -> UserEnvelope<SignupUser<'_>> {
        UserEnvelope {
            user: SignupUser { name: &self.name, email: &self.email, password: &self.password, role: &self.role },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn to_request(&self) -> UserEnvelope<LoginUser<'_>> {
        UserEnvelope { user: LoginUser { email: &self.email, password: &self.password } }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub busy: bool,
    pub error: Option<String>,
    pub show_alert: bool,
}

impl AuthFormState {
    /// Mark a submit as in flight. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    pub fn succeed(&mut self) {
        self.busy = false;
        self.show_alert = true;
    }

    /// Record a failure. The draft is left alone so the user can retry.
    pub fn fail(&mut self, message: &str) {
        self.busy = false;
        self.error = Some(message.to_owned());
    }

    pub fn dismiss_alert(&mut self) {
        self.show_alert = false;
    }
}
