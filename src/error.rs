//! Error types for the money API client.
//!
//! Every fallible function in this crate returns [`Result<T>`]. The variants
//! separate failures that happen before anything is sent (validation), failures
//! of the wire payload (decode), and failures of the collaborators (transport,
//! host resolution).
//!
//! # Error Categories
//!
//! - **Validation Errors** ([`Error::Validation`]): a request builder rejected its input
//! - **Decode Errors** ([`Error::Decode`]): the server payload is not the expected JSON shape
//! - **Transport Errors** ([`Error::Http`], [`Error::UnexpectedStatus`]): HTTP communication
//!   failures, propagated unchanged
//! - **Process Errors** ([`Error::InvalidState`], [`Error::Cancelled`]): misuse of a multi-step
//!   process or a cancelled asynchronous step
//!
//! Server-reported failures (`"error": "not_enough_funds"` and friends) are **not** errors in
//! this sense. The envelope decoded fine, so they are delivered as
//! [`ErrorCode`](crate::model::ErrorCode) values inside the response.
//!
//! # Examples
//!
//! ```
//! use money_api_client::error::{Error, Result};
//!
//! fn require_client_id(client_id: &str) -> Result<&str> {
//!     if client_id.is_empty() {
//!         return Err(Error::Validation("client_id is empty".to_owned()));
//!     }
//!     Ok(client_id)
//! }
//!
//! assert!(require_client_id("").is_err());
//! ```

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, sending or decoding API calls.
///
/// # Error Recovery
///
/// - **Validation errors**: fix the input; nothing was sent
/// - **Decode errors**: the server answered with something unexpected; not retryable as-is
/// - **Transport errors**: the caller decides whether to retry, the client never does
/// - **Invalid state**: the process is finished or has nothing to repeat
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum Error {
    /// A request builder rejected missing or inconsistent parameters.
    ///
    /// Raised synchronously by `build()`/`new()` before any network attempt.
    ///
    /// # Examples
    ///
    /// ```
    /// use money_api_client::error::Error;
    ///
    /// let err = Error::Validation("'from' must not be after 'till'".to_owned());
    /// assert!(err.to_string().contains("Invalid request"));
    /// ```
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The response payload is structurally invalid.
    ///
    /// Common causes include:
    /// - Body is not JSON, or not a JSON object
    /// - An array or object where a scalar was expected
    /// - Malformed decimal or timestamp text
    /// - A mandatory field (e.g. balance `total`) is missing
    #[error("Malformed response: {0}")]
    Decode(String),

    /// HTTP request failed in the transport layer.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// A service name could not be resolved to a base URL.
    #[error("Cannot resolve host: {0}")]
    HostResolution(String),

    /// Client configuration is invalid or could not be read.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A process operation was invoked in a state that does not allow it.
    #[error("Invalid process state: {0}")]
    InvalidState(String),

    /// An asynchronous step was cancelled before it completed.
    #[error("Operation cancelled")]
    Cancelled,

    /// No codec is registered for the requested type.
    ///
    /// This indicates a defect in the caller, not a bad payload.
    #[error("No type adapter registered for {0}")]
    Unregistered(&'static str),
}

impl Error {
    /// Shorthand for a [`Error::Decode`] with a formatted message.
    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Shorthand for a [`Error::Validation`] with a formatted message.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
