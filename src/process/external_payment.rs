//! Card payment through `request-external-payment` and `process-external-payment`.

use tracing::{info, warn};

use super::{Process, ProcessState};
use crate::{
    error::{Error, Result},
    methods::{
        process_external_payment::{ProcessExternalPayment, ProcessExternalPaymentRequest},
        request_external_payment::{RequestExternalPayment, RequestExternalPaymentRequest},
    },
    model::Status,
    net::{ApiClient, HostsProvider, response::MethodResponse},
    transport::Transport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    RequestPayment,
    ProcessPayment,
}

/// Two-step external card payment.
///
/// 1. `proceed` from `NotStarted` requests a payment contract.
/// 2. `proceed` from `InProgress` executes it. The server may answer
///    `in_progress` (wait [`next_retry`](Self::next_retry) and proceed again)
///    or `ext_auth_required` (send the user to [`acs_uri`](Self::acs_uri),
///    then proceed again).
///
/// # Examples
///
/// ```no_run
/// use money_api_client::{
///     config::ClientConfig,
///     methods::{
///         payment_params::PhoneParams, request_external_payment::RequestExternalPaymentRequest,
///     },
///     model::MoneyAmount,
///     net::ApiClient,
///     process::{ExternalPaymentProcess, Process},
/// };
///
/// # async fn example() -> money_api_client::error::Result<()> {
/// let client = ApiClient::from_config(&ClientConfig::default())?;
/// let phone = PhoneParams::new("79001234567", "100.00".parse::<MoneyAmount>()?)?;
/// let request = RequestExternalPaymentRequest::from_payment_params("instance-id", &phone)?;
///
/// let mut process = ExternalPaymentProcess::new(
///     &client,
///     request,
///     "https://shop.example.com/ok",
///     "https://shop.example.com/fail",
/// )?;
/// while !process.proceed().await? {
///     if let Some(uri) = process.acs_uri() {
///         println!("open {uri} to confirm the payment");
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ExternalPaymentProcess<'c, T, H> {
    client: &'c ApiClient<T, H>,
    payment: RequestExternalPaymentRequest,
    ext_auth_success_uri: String,
    ext_auth_fail_uri: String,
    request_token: Option<bool>,
    money_source_token: Option<String>,
    csc: Option<String>,
    state: ProcessState,
    last_step: Option<Step>,
    request_payment: Option<RequestExternalPayment>,
    process_payment: Option<ProcessExternalPayment>,
}

impl<'c, T: Transport, H: HostsProvider> ExternalPaymentProcess<'c, T, H> {
    /// Creates a process that pays `payment` through `client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if either redirect URI is empty.
    pub fn new(
        client: &'c ApiClient<T, H>,
        payment: RequestExternalPaymentRequest,
        ext_auth_success_uri: impl Into<String>,
        ext_auth_fail_uri: impl Into<String>,
    ) -> Result<Self> {
        let ext_auth_success_uri = ext_auth_success_uri.into();
        let ext_auth_fail_uri = ext_auth_fail_uri.into();
        if ext_auth_success_uri.is_empty() || ext_auth_fail_uri.is_empty() {
            return Err(Error::validation("ext_auth redirect URIs must not be empty"));
        }
        Ok(Self {
            client,
            payment,
            ext_auth_success_uri,
            ext_auth_fail_uri,
            request_token: None,
            money_source_token: None,
            csc: None,
            state: ProcessState::NotStarted,
            last_step: None,
            request_payment: None,
            process_payment: None,
        })
    }

    /// Asks the server for a reusable card token.
    #[must_use]
    pub fn with_request_token(mut self, request_token: bool) -> Self {
        self.request_token = Some(request_token);
        self
    }

    /// Pays with a saved card.
    #[must_use]
    pub fn with_money_source(mut self, token: impl Into<String>, csc: impl Into<String>) -> Self {
        self.money_source_token = Some(token.into());
        self.csc = Some(csc.into());
        self
    }

    /// Response of the contract request, once received.
    #[must_use]
    pub fn request_payment(&self) -> Option<&RequestExternalPayment> {
        self.request_payment.as_ref()
    }

    /// Latest response of the execution step, once received.
    #[must_use]
    pub fn process_payment(&self) -> Option<&ProcessExternalPayment> {
        self.process_payment.as_ref()
    }

    /// 3-D Secure page to open, when the last response asked for it.
    #[must_use]
    pub fn acs_uri(&self) -> Option<&str> {
        self.process_payment.as_ref().and_then(|response| response.acs_uri.as_deref())
    }

    /// Suggested wait in milliseconds before proceeding again.
    #[must_use]
    pub fn next_retry(&self) -> Option<u64> {
        self.process_payment.as_ref().and_then(|response| response.next_retry)
    }

    fn process_request(&self) -> Result<ProcessExternalPaymentRequest> {
        let request_id = self
            .request_payment
            .as_ref()
            .and_then(|response| response.request_id.as_deref())
            .ok_or_else(|| {
                Error::InvalidState("no payment contract has been requested".to_owned())
            })?;
        let mut builder = ProcessExternalPaymentRequest::builder()
            .request_id(request_id)
            .instance_id(self.payment.instance_id())
            .ext_auth_success_uri(&self.ext_auth_success_uri)
            .ext_auth_fail_uri(&self.ext_auth_fail_uri);
        if let Some(request_token) = self.request_token {
            builder = builder.request_token(request_token);
        }
        if let Some(token) = &self.money_source_token {
            builder = builder.money_source_token(token);
        }
        if let Some(csc) = &self.csc {
            builder = builder.csc(csc);
        }
        builder.build()
    }

    async fn run(&mut self, step: Step) -> Result<bool> {
        match step {
            Step::RequestPayment => {
                let response = self.client.execute(&self.payment).await?;
                if response.is_success() && response.request_id.is_none() {
                    return Err(Error::decode("successful contract response carries no request_id"));
                }
                let next = if response.is_success() {
                    ProcessState::InProgress
                } else if response.status == Status::Refused || response.error.is_some() {
                    ProcessState::Failed
                } else {
                    self.state
                };
                self.finish_step(step, next, response.error.as_ref().map(ToString::to_string));
                self.request_payment = Some(response);
            }
            Step::ProcessPayment => {
                let request = self.process_request()?;
                let response = self.client.execute(&request).await?;
                let next = match response.status {
                    Status::Success if response.error.is_none() => ProcessState::Completed,
                    Status::InProgress | Status::ExtAuthRequired => ProcessState::InProgress,
                    _ if response.status == Status::Refused || response.error.is_some() => {
                        ProcessState::Failed
                    }
                    _ => ProcessState::InProgress,
                };
                self.finish_step(step, next, response.error.as_ref().map(ToString::to_string));
                self.process_payment = Some(response);
            }
        }
        Ok(self.state == ProcessState::Completed)
    }

    fn finish_step(&mut self, step: Step, next: ProcessState, error: Option<String>) {
        if next == ProcessState::Failed {
            warn!(step = ?step, error = error.as_deref().unwrap_or("none"), "payment step refused");
        } else {
            info!(step = ?step, from = %self.state, to = %next, "payment step finished");
        }
        self.state = next;
    }

    fn ensure_active(&self) -> Result<()> {
        if self.state.is_terminal() {
            return Err(Error::InvalidState(format!("process is {}", self.state)));
        }
        Ok(())
    }
}

impl<T: Transport, H: HostsProvider> Process for ExternalPaymentProcess<'_, T, H> {
    fn state(&self) -> ProcessState {
        self.state
    }

    async fn proceed(&mut self) -> Result<bool> {
        self.ensure_active()?;
        let step = match self.state {
            ProcessState::NotStarted => Step::RequestPayment,
            _ => Step::ProcessPayment,
        };
        self.last_step = Some(step);
        self.run(step).await
    }

    async fn repeat(&mut self) -> Result<bool> {
        self.ensure_active()?;
        let step =
            self.last_step.ok_or_else(|| Error::InvalidState("no step to repeat".to_owned()))?;
        self.run(step).await
    }
}
