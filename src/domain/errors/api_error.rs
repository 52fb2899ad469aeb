//! API error types.

use std::fmt;

use thiserror::Error;

/// Fallback shown when the server gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Transport failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorKind {
    /// Request exceeded the client timeout.
    Timeout,
    /// Connection could not be established.
    Connect,
    /// Any other transport failure.
    Other,
}

impl fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::Connect => write!(f, "connect"),
            Self::Other => write!(f, "transport"),
        }
    }
}

/// Errors raised while talking to the pantry API.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("{field} is required")]
    Validation { field: String },

    #[error("network error ({kind}): {message}")]
    Network {
        kind: NetworkErrorKind,
        message: String,
    },

    #[error("server returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("session expired, please log in again")]
    AuthExpired,

    #[error("token not received from server")]
    MissingToken,

    #[error("failed to decode server response: {message}")]
    Decode { message: String },

    #[error("token storage error: {0}")]
    Storage(#[from] super::StorageError),

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Creates validation error for a missing field.
    #[must_use]
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(kind: NetworkErrorKind, message: impl Into<String>) -> Self {
        Self::Network {
            kind,
            message: message.into(),
        }
    }

    /// Creates timeout error.
    #[must_use]
    pub fn timeout() -> Self {
        Self::network(NetworkErrorKind::Timeout, "request timed out")
    }

    /// Creates HTTP status error, falling back to the generic message.
    #[must_use]
    pub fn http(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Self::Http { status, message }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Returns whether error came from a rejected session.
    #[must_use]
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }

    /// Returns whether repeating the same request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Http { .. })
    }

    /// Message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            Self::Unexpected { .. } | Self::Decode { .. } => GENERIC_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
