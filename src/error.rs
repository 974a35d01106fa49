//! Client Errors
//!
//! Every failure a user action can hit, from local validation to a
//! rejected fetch.

use thiserror::Error;

/// Server `detail` phrases that mean the bearer token is missing or invalid
const AUTH_FAILURE_PHRASES: &[&str] = &["Could not validate credentials", "Not authenticated"];

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected locally, never sent
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response; `message` is the server's `detail` or a fallback
    #[error("{message}")]
    Request { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True when the server rejected the session token. Callers force a logout.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::Request { message, .. } => AUTH_FAILURE_PHRASES
                .iter()
                .any(|phrase| message.contains(phrase)),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
