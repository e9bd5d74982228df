//! Shared wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Request bodies borrow from form drafts so submitting never clones field
//! values. Response types are lenient: unknown fields are ignored and `null`
//! text fields decode as empty strings.
//!
//! `ProjectId` is numeric because the API assigns integer ids. A record with
//! any other id fails the whole list decode, which the page treats as an
//! unexpected shape and shows as an empty list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::state::session::Role;

/// Server-assigned project identifier.
pub type ProjectId = u64;

/// A project record as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Editable project fields, used both as the form draft and the request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
}

impl ProjectDraft {
    /// Both fields are required by the editor form.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self { name: project.name.clone(), description: project.description.clone() }
    }
}

/// `{ "project": { ... } }` body for create and update calls.
#[derive(Debug, Serialize)]
pub struct ProjectEnvelope<'a> {
    pub project: &'a ProjectDraft,
}

/// Accepted shapes of `GET /projects`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProjectList {
    Bare(Vec<Project>),
    Wrapped { projects: Vec<Project> },
}

impl ProjectList {
    pub fn into_items(self) -> Vec<Project> {
        match self {
            Self::Bare(items) | Self::Wrapped { projects: items } => items,
        }
    }
}

/// `{ "user": { ... } }` body for signup and login calls.
#[derive(Debug, Serialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

#[derive(Debug, Serialize)]
pub struct SignupUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginUser<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a successful signup or login. The credential itself arrives in
/// the `Authorization` response header.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub user: AuthUser,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Parse a `/projects/:id` route segment.
pub fn parse_project_id(raw: &str) -> Option<ProjectId> {
    raw.trim().parse().ok()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
