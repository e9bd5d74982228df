//! Project CRUD calls and the list/editor synchronization flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Endpoint helpers (`list_projects`, `create_project`, ...) map one-to-one to
//! REST calls and never hold page state across an await. The projects page
//! applies each outcome in place through the `ProjectsState::apply_*`
//! methods: add/edit re-fetch the full list after the mutation succeeds,
//! delete prunes the local list and does not re-fetch.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here logs. Errors come back as `ApiError` and the page decides.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::{Method, Transport};
use super::types::{Project, ProjectDraft, ProjectEnvelope, ProjectId, ProjectList};
use crate::state::projects::EditorMode;
use crate::state::session::SessionStorage;

pub const PROJECTS_PATH: &str = "/projects";

pub fn project_path(id: ProjectId) -> String {
    format!("{PROJECTS_PATH}/{id}")
}

/// Decode a list body that is either a bare array or `{ "projects": [...] }`.
///
/// # Errors
///
/// `ApiError::Decode` if the body is not JSON, `ApiError::UnexpectedShape`
/// if it is JSON of any other shape.
pub fn parse_project_list(body: &str) -> Result<Vec<Project>, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_value::<ProjectList>(value)
        .map(ProjectList::into_items)
        .map_err(|_| ApiError::unexpected_shape(body))
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// `GET /projects`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body has neither
/// accepted shape.
pub async fn list_projects<T: Transport, S: SessionStorage>(
    client: &ApiClient<T, S>,
) -> Result<Vec<Project>, ApiError> {
    let response = client.send(client.request(Method::Get, PROJECTS_PATH)).await?;
    parse_project_list(&response.body)
}

/// `POST /projects`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn create_project<T: Transport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    draft: &ProjectDraft,
) -> Result<(), ApiError> {
    let request = client
        .request(Method::Post, PROJECTS_PATH)
        .with_json(&ProjectEnvelope { project: draft })?;
    client.send(request).await?;
    Ok(())
}

/// `PUT /projects/:id`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn update_project<T: Transport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    id: ProjectId,
    draft: &ProjectDraft,
) -> Result<(), ApiError> {
    let request = client
        .request(Method::Put, &project_path(id))
        .with_json(&ProjectEnvelope { project: draft })?;
    client.send(request).await?;
    Ok(())
}

/// `DELETE /projects/:id`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn delete_project<T: Transport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    id: ProjectId,
) -> Result<(), ApiError> {
    client.send(client.request(Method::Delete, &project_path(id))).await?;
    Ok(())
}

// =============================================================================
// EDITOR
// =============================================================================

/// Send the editor draft as a create (`Add`) or update (`Edit(id)`).
///
/// Nothing here touches `ProjectsState`; the page applies the outcome with
/// `ProjectsState::apply_saved` and then re-fetches the list.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn save_draft<T: Transport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    mode: EditorMode,
    draft: &ProjectDraft,
) -> Result<(), ApiError> {
    match mode {
        EditorMode::Add => create_project(client, draft).await,
        EditorMode::Edit(id) => update_project(client, id, draft).await,
    }
}
