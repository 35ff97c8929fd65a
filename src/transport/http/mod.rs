//! HTTP transport implementation using reqwest.

use reqwest::Client;
use tracing::{debug, instrument};

use super::{EncodedRequest, Transport, config::HttpConfig};
use crate::error::{Error, Result};

/// Form-POST transport using reqwest.
///
/// Sends the parameters as an `application/x-www-form-urlencoded` body and
/// returns the body of any 2xx response. Other statuses become
/// [`Error::UnexpectedStatus`].
///
/// # Examples
///
/// ```
/// use money_api_client::transport::{HttpConfig, HttpTransport};
///
/// let config = HttpConfig { timeout_secs: 60, ..HttpConfig::default() };
/// let transport = HttpTransport::with_config(&config)?;
/// # Ok::<(), money_api_client::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    /// Creates a transport with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` is out of bounds, or
    /// [`Error::Http`] if the HTTP client cannot be created.
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = request.method, url = %request.url, parameter_count = request.params.len()))]
    async fn submit<'a>(&'a self, request: &'a EncodedRequest) -> Result<Vec<u8>> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|_| {
                Error::validation(format!("unsupported HTTP method: {}", request.method))
            })?;

        let response = self
            .client
            .request(method, request.url.clone())
            .form(&request.params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?.to_vec();
        debug!(status = status.as_u16(), body_len = body.len(), "response received");
        Ok(body)
    }
}
