//! Error taxonomy for remote API calls.

const PREVIEW_CHARS: usize = 120;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("unexpected response format: {0}")]
    UnexpectedShape(String),
    #[error("response carried no authorization credential")]
    MissingCredential,
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build an `UnexpectedShape` error carrying a bounded preview of the body.
    pub fn unexpected_shape(body: &str) -> Self {
        Self::UnexpectedShape(body.chars().take(PREVIEW_CHARS).collect())
    }

    /// The server answered 2xx but the body was not usable.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::UnexpectedShape(_))
    }
}
