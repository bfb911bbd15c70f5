//! Failure taxonomy surfaced to the user by pages and toasts.
//!
//! ERROR HANDLING
//! ==============
//! `Display` of every [`ClientError`] is the exact message shown to the
//! user, so pages never format errors themselves. None of these is retried;
//! each is terminal for the call that produced it.

use crate::util::storage::StorageError;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const VALIDATION_MESSAGE: &str = "Please check the email and password you entered.";
pub const DEMO_CREDENTIALS_HINT: &str =
    "For a test sign-in use:\nEmail: eve.holt@reqres.in\nPassword: cityslicka";
pub const AUTH_CONNECTIVITY_MESSAGE: &str = "Could not connect to the server.";
pub const NO_TOKEN_MESSAGE: &str = "No token in the server response.";
pub const TIMEOUT_MESSAGE: &str = "The request timed out.";
pub const OFFLINE_MESSAGE: &str = "No connection to the server.";
pub const WEATHER_FAILED_MESSAGE: &str = "Failed to load weather data.";
pub const STORAGE_MESSAGE: &str = "Could not save the session in this browser.";

/// Transport-level failure: the request never produced an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("no response received: {0}")]
    Offline(String),
    #[error("request could not be built: {0}")]
    Build(String),
    #[error("HTTP is not available outside the browser")]
    Unavailable,
}

/// User-facing error returned by the session and weather clients.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// HTTP 400 from the auth service.
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,
    /// HTTP 401 from the auth service.
    #[error("{}", DEMO_CREDENTIALS_HINT)]
    InvalidCredentials,
    /// HTTP 401 from the weather service.
    #[error("Invalid weather API key.")]
    InvalidApiKey,
    /// A well-formed response missing something required.
    #[error("{0}")]
    Protocol(String),
    /// A structured error message reported by the remote service.
    #[error("{0}")]
    Remote(String),
    #[error("{0}")]
    Connectivity(String),
    #[error("Request limit exceeded. Try again later.")]
    RateLimit,
    #[error("Upstream proxy error. Try again later.")]
    Upstream,
    /// The token was issued but could not be persisted.
    #[error("{}", STORAGE_MESSAGE)]
    Storage(#[from] StorageError),
    /// A sign-in completed after a newer session change had started.
    #[error("Sign-in was superseded by a newer session change.")]
    Superseded,
}

impl ClientError {
    /// Connectivity failure for the weather service, split by cause.
    pub fn from_weather_transport(err: &TransportError) -> Self {
        match err {
            TransportError::Timeout => Self::Connectivity(TIMEOUT_MESSAGE.to_owned()),
            TransportError::Offline(_) | TransportError::Unavailable => {
                Self::Connectivity(OFFLINE_MESSAGE.to_owned())
            }
            TransportError::Build(_) => Self::Remote(WEATHER_FAILED_MESSAGE.to_owned()),
        }
    }

    /// Connectivity failure for the auth service; the cause is not exposed.
    pub fn from_auth_transport(_err: &TransportError) -> Self {
        Self::Connectivity(AUTH_CONNECTIVITY_MESSAGE.to_owned())
    }
}
