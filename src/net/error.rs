//! Error taxonomy for remote API calls.
//!
//! Every async operation in the crate returns one of these instead of
//! failing silently, so the view layer always has an observable outcome
//! to display.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// What went wrong talking to the remote API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("could not reach the server: {0}")]
    Network(String),

    /// Login was rejected: bad credentials.
    #[error("invalid email or password")]
    Authentication,

    /// Signup was rejected, e.g. a duplicate email.
    #[error("signup failed: {0}")]
    Registration(String),

    /// An authenticated call was rejected: the token is stale or revoked.
    #[error("your session is no longer valid")]
    Unauthorized,

    /// The server answered with an unexpected status.
    #[error("server error (status {0})")]
    Server(u16),

    /// The response body did not match the expected shape.
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success status from `POST /login`.
    pub fn from_login_status(status: u16) -> Self {
        match status {
            400 | 401 | 403 => Self::Authentication,
            status => Self::Server(status),
        }
    }

    /// Classify a non-success status from `POST /signup`, preferring the
    /// server's own message when the body carries one.
    pub fn from_signup_status(status: u16, body: &str) -> Self {
        if (400..500).contains(&status) {
            let message = server_message(body).unwrap_or_else(|| match status {
                409 => "an account with this email already exists".to_owned(),
                status => format!("rejected with status {status}"),
            });
            Self::Registration(message)
        } else {
            Self::Server(status)
        }
    }

    /// Classify a non-success status from a bearer-authenticated call.
    pub fn from_authed_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            status => Self::Server(status),
        }
    }
}

/// Extract a human-readable message from an error response body.
///
/// Prefers a `message` field, falls back to `error`.
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .or_else(|| value.get("error").and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}
