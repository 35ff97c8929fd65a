//! Turns raw response bodies into typed responses.

use serde_json::Value;

use crate::{
    codec::{Registry, registry},
    error::{Error, Result},
    model::{ErrorCode, Status},
};

/// Common outcome accessors of method responses.
///
/// A server-reported error is data, not an [`Error`]: always check
/// [`is_success`](Self::is_success) before trusting the other fields, since
/// refused responses may still carry defaults in them.
pub trait MethodResponse {
    /// Server-reported error, if any.
    fn error(&self) -> Option<&ErrorCode>;

    /// Reported status, for responses that carry one.
    fn status(&self) -> Option<Status> {
        None
    }

    /// Whether the call succeeded: no error and, when present, a `success` status.
    fn is_success(&self) -> bool {
        self.error().is_none() && self.status().is_none_or(|status| status == Status::Success)
    }
}

/// Decodes `body` into a `T` using the process-wide registry.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the body is not a JSON object or does not
/// match `T`'s shape, and [`Error::Unregistered`] if `T` has no adapter.
///
/// # Examples
///
/// ```
/// use money_api_client::{
///     methods::instance_id::InstanceId,
///     net::response::{MethodResponse, assemble},
/// };
///
/// let body = br#"{"status":"refused","error":"illegal_param_client_id"}"#;
/// let response: InstanceId = assemble(body)?;
/// assert!(!response.is_success());
///
/// assert!(assemble::<InstanceId>(b"[1, 2]").is_err());
/// # Ok::<(), money_api_client::error::Error>(())
/// ```
pub fn assemble<T: 'static>(body: &[u8]) -> Result<T> {
    assemble_with(registry(), body)
}

/// Same as [`assemble`] with an explicit registry.
///
/// # Errors
///
/// See [`assemble`].
pub fn assemble_with<T: 'static>(registry: &Registry, body: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| Error::decode(format!("response body is not valid JSON: {e}")))?;
    if !value.is_object() {
        return Err(Error::decode("response body is not a JSON object"));
    }
    registry.decode(&value)
}
