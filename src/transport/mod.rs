//! Transport abstraction: sends an encoded request, returns the raw body.
//!
//! The client submits every request exactly once and never retries. Retry,
//! backoff and TLS policy belong to the [`Transport`] implementation.
//!
//! # Examples
//!
//! A transport that answers every call with a canned body:
//!
//! ```
//! use money_api_client::{
//!     error::Result,
//!     transport::{EncodedRequest, Transport},
//! };
//!
//! struct Canned(&'static str);
//!
//! impl Transport for Canned {
//!     async fn submit<'a>(&'a self, _request: &'a EncodedRequest) -> Result<Vec<u8>> {
//!         Ok(self.0.as_bytes().to_vec())
//!     }
//! }
//! ```

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;

use url::Url;

use crate::{error::Result, methods::Parameters};

pub mod config;
pub mod http;

pub use config::HttpConfig;
pub use http::HttpTransport;

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    /// HTTP method; always `POST` for this API.
    pub method: &'static str,
    /// Full endpoint URL.
    pub url: Url,
    /// Form parameters, sent as `application/x-www-form-urlencoded`.
    pub params: Parameters,
}

impl EncodedRequest {
    /// Creates a `POST` request.
    #[must_use]
    pub fn post(url: Url, params: Parameters) -> Self {
        Self { method: "POST", url, params }
    }
}

/// Sends encoded requests.
///
/// Implementations must be shareable between concurrent calls.
pub trait Transport: Send + Sync {
    /// Submits `request` once and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns the transport's own error unchanged; the client does not
    /// interpret or retry it.
    fn submit<'a>(
        &'a self,
        request: &'a EncodedRequest,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send + 'a;

    /// Returns the protocol name for logging.
    fn protocol_name(&self) -> &'static str {
        "http"
    }
}
