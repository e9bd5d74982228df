//! Pre-configured API client that authorizes outgoing requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Project calls go through `ApiClient::send`, the single place the stored
//! token becomes an `Authorization: Bearer <token>` header. Signup and login
//! use `send_unauthenticated`. Both turn non-2xx statuses into errors.
//!
//! ERROR HANDLING
//! ==============
//! No retries, no backoff, no timeout. Failures are returned to the caller,
//! which decides whether the user sees them.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use super::error::ApiError;
use super::transport::{AUTHORIZATION, ApiRequest, ApiResponse, Method, Transport};
use crate::state::session::{SessionStorage, SessionStore};

#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    session: SessionStore<S>,
}

impl<T: Transport, S: SessionStorage> ApiClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, session: SessionStore<S>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport, session }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Absolute URL for an API path such as `/projects`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Start a request against `path`.
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.endpoint(path))
    }

    /// Attach the stored token, if any. Requests without one go out as-is.
    pub fn authorize(&self, request: ApiRequest) -> ApiRequest {
        match self.session.token() {
            Some(token) => request.with_header(AUTHORIZATION, &bearer(&token)),
            None => request,
        }
    }

    /// Authorize and send `request`, rejecting non-2xx responses.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` on transport failure and
    /// `ApiError::Status` for any non-2xx response.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.dispatch(self.authorize(request)).await
    }

    /// Send `request` without the stored credential. Used by signup and
    /// login, which must not carry a leftover token from an older session.
    ///
    /// # Errors
    ///
    /// Same as `send`.
    pub async fn send_unauthenticated(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self.transport.send(request).await?;
        if !response.ok() {
            return Err(ApiError::Status { status: response.status, body: response.body });
        }
        Ok(response)
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
