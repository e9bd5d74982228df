use super::*;

fn project(id: ProjectId, name: &str) -> Project {
    Project { id, name: name.to_owned(), description: format!("{name} description") }
}

// =============================================================
// Modal transitions
// =============================================================

#[test]
fn default_is_loading_with_modal_closed() {
    let state = ProjectsState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.modal, ModalState::Closed);
}

#[test]
fn open_add_starts_from_empty_draft() {
    let mut state = ProjectsState::default();
    state.draft.name = "leftover".to_owned();
    state.open_add();
    assert_eq!(state.modal.mode(), Some(EditorMode::Add));
    assert_eq!(state.draft, ProjectDraft::default());
    assert_eq!(state.modal_title(), "Add New Project");
    assert_eq!(state.submit_label(), "Add");
}

#[test]
fn open_edit_prefills_draft_from_record() {
    let mut state = ProjectsState::default();
    state.open_edit(&project(7, "Alpha"));
    assert_eq!(state.modal, ModalState::Open(EditorMode::Edit(7)));
    assert_eq!(state.draft.name, "Alpha");
    assert_eq!(state.draft.description, "Alpha description");
    assert_eq!(state.modal_title(), "Edit Project");
    assert_eq!(state.submit_label(), "Update");
}

#[test]
fn close_modal_discards_draft() {
    let mut state = ProjectsState::default();
    state.open_edit(&project(7, "Alpha"));
    state.close_modal();
    assert!(!state.modal.is_open());
    assert_eq!(state.draft, ProjectDraft::default());
}

// =============================================================
// List reconciliation
// =============================================================

#[test]
fn apply_list_replaces_items_and_stops_loading() {
    let mut state = ProjectsState::default();
    state.apply_list(Ok(vec![project(1, "A"), project(2, "B")])).unwrap();
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn apply_list_shape_error_empties_list() {
    let mut state = ProjectsState::default();
    state.apply_list(Ok(vec![project(1, "A")])).unwrap();
    let err = state.apply_list(Err(ApiError::unexpected_shape("{}"))).unwrap_err();
    assert!(err.is_shape_error());
    assert!(state.items.is_empty());
}

#[test]
fn apply_list_network_error_keeps_items() {
    let mut state = ProjectsState::default();
    state.apply_list(Ok(vec![project(1, "A")])).unwrap();
    let result = state.apply_list(Err(ApiError::Network("offline".to_owned())));
    assert!(result.is_err());
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
}

#[test]
fn remove_drops_only_matching_id() {
    let mut state = ProjectsState::default();
    state.apply_list(Ok(vec![project(6, "A"), project(7, "B"), project(8, "C")])).unwrap();
    state.remove(7);
    let ids: Vec<ProjectId> = state.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, [6, 8]);
}

#[test]
fn find_looks_up_by_id() {
    let mut state = ProjectsState::default();
    state.apply_list(Ok(vec![project(6, "A")])).unwrap();
    assert_eq!(state.find(6).map(|p| p.name.as_str()), Some("A"));
    assert!(state.find(99).is_none());
}

// =============================================================
// Request outcomes
// =============================================================

#[test]
fn apply_saved_closes_matching_modal() {
    let mut state = ProjectsState::default();
    state.open_edit(&project(7, "Alpha"));
    state.apply_saved(EditorMode::Edit(7), Ok(())).unwrap();
    assert_eq!(state.modal, ModalState::Closed);
    assert_eq!(state.draft, ProjectDraft::default());
}

#[test]
fn apply_saved_leaves_modal_reopened_for_another_record() {
    let mut state = ProjectsState::default();
    state.open_edit(&project(8, "Beta"));
    state.apply_saved(EditorMode::Edit(7), Ok(())).unwrap();
    assert_eq!(state.modal, ModalState::Open(EditorMode::Edit(8)));
    assert_eq!(state.draft.name, "Beta");
}

#[test]
fn failed_save_does_not_reopen_cancelled_modal() {
    let mut state = ProjectsState::default();
    state.apply_list(Ok(vec![project(1, "A"), project(2, "B")])).unwrap();
    state.open_add();
    state.close_modal();
    state.remove(2);

    let result = state.apply_saved(EditorMode::Add, Err(ApiError::Network("offline".to_owned())));

    assert!(result.is_err());
    assert_eq!(state.modal, ModalState::Closed);
    assert_eq!(state.items, vec![project(1, "A")]);
}

#[test]
fn deletes_applied_in_any_order_both_hold() {
    let mut state = ProjectsState::default();
    state.apply_list(Ok(vec![project(1, "A"), project(7, "B"), project(8, "C")])).unwrap();

    state.apply_delete(8, Ok(())).unwrap();
    state.apply_delete(7, Ok(())).unwrap();

    assert_eq!(state.items, vec![project(1, "A")]);
}

#[test]
fn failed_delete_keeps_row() {
    let mut state = ProjectsState::default();
    state.apply_list(Ok(vec![project(7, "B")])).unwrap();
    let result = state.apply_delete(7, Err(ApiError::Status { status: 500, body: String::new() }));
    assert!(result.is_err());
    assert_eq!(state.items.len(), 1);
}
