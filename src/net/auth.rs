//! Signup and login calls.
//!
//! Both endpoints answer with the credential in the `Authorization` response
//! header and the user (including role) in the body. On success the session
//! is persisted before returning, so the very next request is authorized.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::{AUTHORIZATION, Method, Transport};
use super::types::AuthResponse;
use crate::state::auth_form::{LoginDraft, SignupDraft};
use crate::state::session::{Session, SessionStorage, normalize_token};

pub const SIGNUP_PATH: &str = "/signup";
pub const LOGIN_PATH: &str = "/login";

/// Register a new user via `POST /signup`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the response has no
/// credential, or the body cannot be decoded.
pub async fn signup<T: Transport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    draft: &SignupDraft,
) -> Result<Session, ApiError> {
    authenticate(client, SIGNUP_PATH, &draft.to_request()).await
}

/// Create a session via `POST /login`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the response has no
/// credential, or the body cannot be decoded.
pub async fn login<T: Transport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    draft: &LoginDraft,
) -> Result<Session, ApiError> {
    authenticate(client, LOGIN_PATH, &draft.to_request()).await
}

async fn authenticate<T, S, B>(client: &ApiClient<T, S>, path: &str, body: &B) -> Result<Session, ApiError>
where
    T: Transport,
    S: SessionStorage,
    B: Serialize,
{
    let request = client.request(Method::Post, path).with_json(body)?;
    let response = client.send_unauthenticated(request).await?;

    let token = response
        .header(AUTHORIZATION)
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingCredential)?
        .to_owned();
    let payload: AuthResponse = response.json()?;

    client.session().set(&token, payload.user.role.as_ref());
    Ok(Session { token, role: payload.user.role })
}
