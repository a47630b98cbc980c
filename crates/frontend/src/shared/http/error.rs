use thiserror::Error;

/// Failure of a call to the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Login rejected
    #[error("{message}")]
    Authentication {
        status: u16,
        status_text: String,
        message: String,
    },

    /// The token of an authenticated call was rejected; the session has been cleared
    #[error("{detail}")]
    Unauthorized { detail: String },

    #[error("Response is not JSON")]
    ResponseFormat,

    #[error("Unexpected response: {status} {status_text}")]
    UnexpectedStatus { status: u16, status_text: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Whether the user has to log in again
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
