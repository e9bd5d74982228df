use super::*;

// =============================================================
// Project
// =============================================================

#[test]
fn project_ignores_extra_fields() {
    let project: Project = serde_json::from_str(
        r#"{"id":3,"name":"Alpha","description":"d","created_at":"2024-01-01T00:00:00Z","user_id":9}"#,
    )
    .unwrap();
    assert_eq!(project, Project { id: 3, name: "Alpha".to_owned(), description: "d".to_owned() });
}

#[test]
fn project_null_description_decodes_empty() {
    let project: Project = serde_json::from_str(r#"{"id":1,"name":"Alpha","description":null}"#).unwrap();
    assert_eq!(project.description, "");
}

#[test]
fn project_missing_description_decodes_empty() {
    let project: Project = serde_json::from_str(r#"{"id":1,"name":"Alpha"}"#).unwrap();
    assert_eq!(project.description, "");
}

// =============================================================
// ProjectList
// =============================================================

#[test]
fn project_list_accepts_bare_array() {
    let list: ProjectList = serde_json::from_str(r#"[{"id":1,"name":"A","description":""}]"#).unwrap();
    assert_eq!(list.into_items().len(), 1);
}

#[test]
fn project_list_accepts_wrapped_object() {
    let list: ProjectList = serde_json::from_str(r#"{"projects":[{"id":1,"name":"A","description":""}]}"#).unwrap();
    assert_eq!(list.into_items()[0].id, 1);
}

#[test]
fn project_list_rejects_other_objects() {
    assert!(serde_json::from_str::<ProjectList>(r#"{"data":[]}"#).is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn project_envelope_wraps_draft() {
    let draft = ProjectDraft { name: "Alpha".to_owned(), description: "d".to_owned() };
    let body = serde_json::to_value(ProjectEnvelope { project: &draft }).unwrap();
    assert_eq!(body, serde_json::json!({ "project": { "name": "Alpha", "description": "d" } }));
}

#[test]
fn login_body_has_no_name_or_role() {
    let body = serde_json::to_value(UserEnvelope { user: LoginUser { email: "a@b.com", password: "pw" } }).unwrap();
    assert_eq!(body, serde_json::json!({ "user": { "email": "a@b.com", "password": "pw" } }));
}

#[test]
fn auth_response_reads_role() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"user":{"id":4,"name":"Ann","email":"a@b.com","role":"QA"}}"#).unwrap();
    assert_eq!(resp.user.role, Some(Role::Qa));
    assert_eq!(resp.user.name.as_deref(), Some("Ann"));
}

// =============================================================
// Drafts and ids
// =============================================================

#[test]
fn draft_from_project_copies_fields() {
    let project = Project { id: 7, name: "Alpha".to_owned(), description: "d".to_owned() };
    let draft = ProjectDraft::from(&project);
    assert_eq!(draft.name, "Alpha");
    assert_eq!(draft.description, "d");
}

#[test]
fn draft_requires_both_fields() {
    assert!(!ProjectDraft::default().is_complete());
    assert!(!ProjectDraft { name: "Alpha".to_owned(), description: "  ".to_owned() }.is_complete());
    assert!(ProjectDraft { name: "Alpha".to_owned(), description: "d".to_owned() }.is_complete());
}

#[test]
fn parse_project_id_handles_numeric_segments_only() {
    assert_eq!(parse_project_id("42"), Some(42));
    assert_eq!(parse_project_id("abc"), None);
    assert_eq!(parse_project_id("-1"), None);
}
