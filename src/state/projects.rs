//! Project list and editor-modal state.
//!
//! DESIGN
//! ======
//! The modal is a single flag that is either closed or open in add/edit mode,
//! so the editor can never be "open" without knowing which record it targets.
//! The list mirrors the last server response; only delete edits it locally.
//! Request outcomes are applied in place with the `apply_*` methods once the
//! request has finished, so overlapping requests never overwrite each other.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::error::ApiError;
use crate::net::types::{Project, ProjectDraft, ProjectId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Edit(ProjectId),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(EditorMode),
}

impl ModalState {
    pub fn mode(self) -> Option<EditorMode> {
        match self {
            Self::Closed => None,
            Self::Open(mode) => Some(mode),
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    /// True until the first list response (or failure) arrives.
    pub loading: bool,
    pub modal: ModalState,
    pub draft: ProjectDraft,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, modal: ModalState::Closed, draft: ProjectDraft::default() }
    }
}

impl ProjectsState {
    pub fn open_add(&mut self) {
        self.modal = ModalState::Open(EditorMode::Add);
        self.draft = ProjectDraft::default();
    }

    /// Open the editor pre-filled from `project`.
    pub fn open_edit(&mut self, project: &Project) {
        self.modal = ModalState::Open(EditorMode::Edit(project.id));
        self.draft = ProjectDraft::from(project);
    }

    /// Close the modal and discard the draft. Used for both cancel and submit.
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.draft = ProjectDraft::default();
    }

    /// Apply a list response.
    ///
    /// A usable list replaces the items. A body of the wrong shape empties
    /// the list; a failed request leaves it as it was.
    ///
    /// # Errors
    ///
    /// Hands the error back so the caller can log it.
    pub fn apply_list(&mut self, result: Result<Vec<Project>, ApiError>) -> Result<(), ApiError> {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(e) => {
                if e.is_shape_error() {
                    self.items.clear();
                }
                Err(e)
            }
        }
    }

    /// Apply the outcome of a create/update sent from `mode`.
    ///
    /// Success closes the modal, but only if it is still open on the same
    /// target; a modal the user cancelled or reopened meanwhile is left as is.
    /// Failure changes nothing, so an open modal keeps its draft for a retry.
    ///
    /// # Errors
    ///
    /// Hands the save error back so the caller can log it.
    pub fn apply_saved(&mut self, mode: EditorMode, result: Result<(), ApiError>) -> Result<(), ApiError> {
        result?;
        if self.modal.mode() == Some(mode) {
            self.close_modal();
        }
        Ok(())
    }

    /// Apply the outcome of `DELETE /projects/:id`: prune on success only.
    ///
    /// # Errors
    ///
    /// Hands the delete error back with the list untouched.
    pub fn apply_delete(&mut self, id: ProjectId, result: Result<(), ApiError>) -> Result<(), ApiError> {
        result?;
        self.remove(id);
        Ok(())
    }

    pub fn remove(&mut self, id: ProjectId) {
        self.items.retain(|project| project.id != id);
    }

    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.items.iter().find(|project| project.id == id)
    }

    pub fn modal_title(&self) -> &'static str {
        match self.modal.mode() {
            Some(EditorMode::Edit(_)) => "Edit Project",
            _ => "Add New Project",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.modal.mode() {
            Some(EditorMode::Edit(_)) => "Update",
            _ => "Add",
        }
    }
}
