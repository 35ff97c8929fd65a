//! Request execution.

use tracing::{debug, instrument};
use url::Url;

use super::{
    hosts::{DefaultHostsProvider, HostsProvider},
    response::assemble,
};
use crate::{
    config::ClientConfig,
    error::{Error, Result},
    methods::ApiRequest,
    transport::{EncodedRequest, HttpTransport, Transport},
};

/// Executes API requests over a [`Transport`].
///
/// Each [`execute`](Self::execute) resolves the endpoint, submits the request
/// once and decodes the body with the registered adapter for the request's
/// response type.
///
/// # Examples
///
/// ```no_run
/// use money_api_client::{
///     config::ClientConfig,
///     methods::instance_id::InstanceIdRequest,
///     net::{ApiClient, response::MethodResponse},
/// };
///
/// # async fn example() -> money_api_client::error::Result<()> {
/// let client = ApiClient::from_config(&ClientConfig::default())?;
/// let response = client.execute(&InstanceIdRequest::new("my-client-id")?).await?;
/// if response.is_success() {
///     println!("instance id: {:?}", response.instance_id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<T, H = DefaultHostsProvider> {
    transport: T,
    hosts: H,
}

impl ApiClient<HttpTransport, DefaultHostsProvider> {
    /// Creates an HTTP client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::with_config(&config.http)?;
        let hosts = DefaultHostsProvider::from_config(&config.hosts)?;
        Ok(Self::new(transport, hosts))
    }
}

impl<T: Transport, H: HostsProvider> ApiClient<T, H> {
    /// Creates a client from its collaborators.
    #[must_use]
    pub fn new(transport: T, hosts: H) -> Self {
        Self { transport, hosts }
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encodes `request` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HostResolution`] if the request's service is unknown.
    pub fn encode<R: ApiRequest>(&self, request: &R) -> Result<EncodedRequest> {
        let base = self.hosts.resolve_base_url(request.service())?;
        let url = endpoint_url(&base, request.method_path())?;
        Ok(EncodedRequest::post(url, request.parameters()))
    }

    /// Sends `request` once and decodes the response.
    ///
    /// A server-reported error is returned inside the response, not as `Err`.
    ///
    /// # Errors
    ///
    /// Returns transport errors unchanged, and [`Error::Decode`] if the body
    /// is not a valid response.
    #[instrument(skip_all, fields(method = request.method_path()))]
    pub async fn execute<R>(&self, request: &R) -> Result<R::Response>
    where
        R: ApiRequest + Sync,
    {
        let encoded = self.encode(request)?;
        debug!(
            url = %encoded.url,
            protocol = self.transport.protocol_name(),
            parameter_count = encoded.params.len(),
            "submitting request"
        );
        let body = self.transport.submit(&encoded).await?;
        assemble(&body)
    }
}

fn endpoint_url(base: &Url, path: &str) -> Result<Url> {
    let joined = format!("{}/{path}", base.as_str().trim_end_matches('/'));
    Url::parse(&joined)
        .map_err(|e| Error::HostResolution(format!("invalid endpoint URL '{joined}': {e}")))
}
