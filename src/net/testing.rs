//! Recording transport for exercising the HTTP layer without a network.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::state::session::{MemoryStorage, SessionStore};

/// Replays scripted responses in order and records every request it sees.
/// Once the script runs out it answers `204 No Content`.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
}

impl RecordingTransport {
    pub fn push(&self, response: ApiResponse) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    pub fn push_json(&self, status: u16, body: &serde_json::Value) {
        self.push(ApiResponse::new(status, body.to_string()));
    }

    pub fn push_error(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(204, "")))
    }
}

pub type TestClient = ApiClient<RecordingTransport, MemoryStorage>;

/// Client over a fresh transport and empty storage, both returned for inspection.
pub fn test_client() -> (TestClient, RecordingTransport, MemoryStorage) {
    let transport = RecordingTransport::default();
    let storage = MemoryStorage::default();
    let client = ApiClient::new("http://api.test", transport.clone(), SessionStore::new(storage.clone()));
    (client, transport, storage)
}
