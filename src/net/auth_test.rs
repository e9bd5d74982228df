use super::*;
use crate::net::testing::test_client;
use crate::net::transport::ApiResponse;
use crate::state::session::Role;

fn login_draft() -> LoginDraft {
    LoginDraft { email: "ann@example.com".to_owned(), password: "secret".to_owned() }
}

fn auth_ok(token: &str, role: &str) -> ApiResponse {
    ApiResponse::new(200, serde_json::json!({ "user": { "id": 1, "role": role } }).to_string())
        .with_header("authorization", token)
}

#[tokio::test]
async fn login_posts_credentials_without_authorization() {
    let (client, transport, _) = test_client();
    transport.push(auth_ok("Bearer T", "manager"));

    login(&client, &login_draft()).await.unwrap();

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "http://api.test/login");
    assert_eq!(sent[0].header(AUTHORIZATION), None);
    let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "user": { "email": "ann@example.com", "password": "secret" } }));
}

#[tokio::test]
async fn login_persists_token_and_role_and_authorizes_next_request() {
    let (client, transport, _) = test_client();
    transport.push(auth_ok("Bearer T", "QA"));

    let session = login(&client, &login_draft()).await.unwrap();
    assert_eq!(session, Session { token: "T".to_owned(), role: Some(Role::Qa) });
    assert_eq!(client.session().get(), Some(session));

    client.send(client.request(Method::Get, "/projects")).await.unwrap();
    let sent = transport.requests();
    assert_eq!(sent[1].header(AUTHORIZATION), Some("Bearer T"));
}

#[tokio::test]
async fn signup_posts_full_user_to_signup_path() {
    let (client, transport, _) = test_client();
    transport.push(auth_ok("tok", "developer"));
    let draft = SignupDraft {
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        password: "secret".to_owned(),
        role: "developer".to_owned(),
    };

    let session = signup(&client, &draft).await.unwrap();

    assert_eq!(session.token, "tok");
    assert_eq!(session.role, Some(Role::Developer));
    let sent = transport.requests();
    assert_eq!(sent[0].url, "http://api.test/signup");
    let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["user"]["role"], "developer");
    assert_eq!(body["user"]["name"], "Ann");
}

#[tokio::test]
async fn missing_credential_header_is_an_error_and_stores_nothing() {
    let (client, transport, _) = test_client();
    transport.push_json(200, &serde_json::json!({ "user": { "role": "manager" } }));

    let err = login(&client, &login_draft()).await.unwrap_err();

    assert_eq!(err, ApiError::MissingCredential);
    assert_eq!(client.session().get(), None);
}

#[tokio::test]
async fn rejected_login_leaves_session_empty() {
    let (client, transport, _) = test_client();
    transport.push(ApiResponse::new(401, "Invalid Email or password."));

    let err = login(&client, &login_draft()).await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 401, .. }));
    assert_eq!(client.session().get(), None);
}

#[tokio::test]
async fn response_without_role_stores_token_only() {
    let (client, transport, _) = test_client();
    transport.push(ApiResponse::new(200, r#"{"user":{"id":1}}"#).with_header("Authorization", "Bearer T"));

    let session = login(&client, &login_draft()).await.unwrap();

    assert_eq!(session.role, None);
    assert_eq!(client.session().token().as_deref(), Some("T"));
}

#[tokio::test]
async fn login_over_stale_session_sends_no_authorization() {
    let (client, transport, _) = test_client();
    client.session().set("old", Some(&Role::Developer));
    transport.push(auth_ok("Bearer fresh", "manager"));

    let session = login(&client, &login_draft()).await.unwrap();

    assert_eq!(transport.requests()[0].header(AUTHORIZATION), None);
    assert_eq!(session.token, "fresh");
    assert_eq!(client.session().token().as_deref(), Some("fresh"));
}
