//! Error taxonomy for calls through the API client.

/// Errors produced by API client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a readable response body.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body was not a JSON envelope.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The envelope carried a non-zero `code`.
    #[error("{0}")]
    RequestFailed(String),

    /// The envelope succeeded but `data` did not match the expected record.
    #[error("unexpected payload: {0}")]
    Payload(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// `true` for failures reported by the backend itself, as opposed to
    /// transport or decoding problems on this side.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }
}
