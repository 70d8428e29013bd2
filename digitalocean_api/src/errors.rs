//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required argument was missing or empty. Raised before any network call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The provider rejected the request with a 4xx/5xx status and an error body.
    #[error("HTTP Status Code: {status}, Error Id: {id}, Error Message: {message}")]
    Api {
        status: u16,
        id: String,
        message: String,
    },
    /// The request could not be completed (network error, unreadable or
    /// unexpected response). The outcome on the provider side is unknown.
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// A successful response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// HTTP status reported by the provider, if this is a provider error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
