//! Error types for delivery API operations.
//!
//! The `Display` form of every variant is the message a person should see;
//! the pipeline hands exactly that string to the [`Notifier`](crate::Notifier).

use crate::types::ApiResponse;
use std::io;
use thiserror::Error;

/// Result type for delivery API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the delivery backend.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend answered with an envelope whose code is not 200.
    #[error("{message}")]
    Envelope { code: i64, message: String },

    /// The backend answered with a non-2xx HTTP status.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        response: ApiResponse,
    },

    /// No response arrived: connection failure or the request deadline elapsed.
    #[error("network connection failed")]
    Network { timed_out: bool, detail: String },

    /// A 2xx body that is not a response envelope.
    #[error("request failed")]
    Malformed(String),

    /// A successful envelope whose `data` does not have the expected shape.
    #[error("request failed")]
    Decode(String),

    /// A login envelope that carried no token.
    #[error("{0}")]
    MissingToken(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ApiError {
    /// HTTP status of the failed response, if one arrived.
    #[inline]
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw response behind a status failure.
    #[must_use]
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ApiError::Status { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Check if the backend refused the credential (401 or 403).
    #[inline]
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        self.status()
            .is_some_and(crate::client::is_access_denied_status)
    }

    /// Check if the call failed before any response arrived.
    #[inline]
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    /// Envelope code of a business-level rejection.
    #[must_use]
    pub fn envelope_code(&self) -> Option<i64> {
        match self {
            ApiError::Envelope { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
