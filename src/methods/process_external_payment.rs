//! `process-external-payment`: executes a previously requested contract.

use std::collections::BTreeMap;

use serde_json::Value;

use super::{ApiRequest, Parameters, read_error, read_status, require_non_empty, write_outcome};
use crate::{
    codec::{
        TypeAdapter,
        card::MoneySourceAdapter,
        scalar::{Object, as_object, get_object, get_string, get_u64, put_opt, put_opt_string},
    },
    error::{Error, Result},
    model::{ErrorCode, MoneySource, Status},
    net::response::MethodResponse,
};

/// Request to execute a payment contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessExternalPaymentRequest {
    request_id: String,
    instance_id: String,
    ext_auth_success_uri: String,
    ext_auth_fail_uri: String,
    request_token: Option<bool>,
    money_source_token: Option<String>,
    csc: Option<String>,
}

impl ProcessExternalPaymentRequest {
    /// Starts a builder.
    #[must_use]
    pub fn builder() -> ProcessExternalPaymentRequestBuilder {
        ProcessExternalPaymentRequestBuilder::default()
    }

    /// Contract id.
    #[must_use]
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl ApiRequest for ProcessExternalPaymentRequest {
    type Response = ProcessExternalPayment;

    fn method_path(&self) -> &'static str {
        "process-external-payment"
    }

    fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("request_id", &self.request_id)
            .with("instance_id", &self.instance_id)
            .with("ext_auth_success_uri", &self.ext_auth_success_uri)
            .with("ext_auth_fail_uri", &self.ext_auth_fail_uri)
            .with("request_token", self.request_token)
            .with("money_source_token", self.money_source_token.as_ref())
            .with("csc", self.csc.as_ref())
    }
}

/// Builder for [`ProcessExternalPaymentRequest`].
#[derive(Debug, Clone, Default)]
pub struct ProcessExternalPaymentRequestBuilder {
    request_id: Option<String>,
    instance_id: Option<String>,
    ext_auth_success_uri: Option<String>,
    ext_auth_fail_uri: Option<String>,
    request_token: Option<bool>,
    money_source_token: Option<String>,
    csc: Option<String>,
}

impl ProcessExternalPaymentRequestBuilder {
    /// Contract id from `request-external-payment`.
    #[must_use]
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Application instance id.
    #[must_use]
    pub fn instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    /// Where the card issuer redirects after successful authentication.
    #[must_use]
    pub fn ext_auth_success_uri(mut self, uri: impl Into<String>) -> Self {
        self.ext_auth_success_uri = Some(uri.into());
        self
    }

    /// Where the card issuer redirects after failed authentication.
    #[must_use]
    pub fn ext_auth_fail_uri(mut self, uri: impl Into<String>) -> Self {
        self.ext_auth_fail_uri = Some(uri.into());
        self
    }

    /// Asks the server to return a reusable money source token.
    #[must_use]
    pub fn request_token(mut self, request_token: bool) -> Self {
        self.request_token = Some(request_token);
        self
    }

    /// Pays with a previously saved card.
    #[must_use]
    pub fn money_source_token(mut self, token: impl Into<String>) -> Self {
        self.money_source_token = Some(token.into());
        self
    }

    /// Card security code, for saved cards.
    #[must_use]
    pub fn csc(mut self, csc: impl Into<String>) -> Self {
        self.csc = Some(csc.into());
        self
    }

    /// Validates and builds the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if any of `request_id`, `instance_id`,
    /// `ext_auth_success_uri` or `ext_auth_fail_uri` is missing or empty.
    pub fn build(self) -> Result<ProcessExternalPaymentRequest> {
        Ok(ProcessExternalPaymentRequest {
            request_id: required(self.request_id, "request_id")?,
            instance_id: required(self.instance_id, "instance_id")?,
            ext_auth_success_uri: required(self.ext_auth_success_uri, "ext_auth_success_uri")?,
            ext_auth_fail_uri: required(self.ext_auth_fail_uri, "ext_auth_fail_uri")?,
            request_token: self.request_token,
            money_source_token: self.money_source_token,
            csc: self.csc,
        })
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    let value = value.ok_or_else(|| Error::validation(format!("{name} is required")))?;
    require_non_empty(&value, name)?;
    Ok(value)
}

/// Response of `process-external-payment`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessExternalPayment {
    /// Call outcome.
    pub status: Status,
    /// Server error, if refused.
    pub error: Option<ErrorCode>,
    /// Id of the completed payment.
    pub invoice_id: Option<String>,
    /// 3-D Secure page to open when status is `ext_auth_required`.
    pub acs_uri: Option<String>,
    /// Form fields to post to `acs_uri`.
    pub acs_params: BTreeMap<String, String>,
    /// Suggested delay in milliseconds before repeating an `in_progress` call.
    pub next_retry: Option<u64>,
    /// Saved money source, when a token was requested.
    pub money_source: Option<MoneySource>,
}

impl MethodResponse for ProcessExternalPayment {
    fn status(&self) -> Option<Status> {
        Some(self.status)
    }

    fn error(&self) -> Option<&ErrorCode> {
        self.error.as_ref()
    }
}

/// Adapter for [`ProcessExternalPayment`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExternalPaymentAdapter;

impl TypeAdapter for ProcessExternalPaymentAdapter {
    type Entity = ProcessExternalPayment;

    fn type_name(&self) -> &'static str {
        "ProcessExternalPayment"
    }

    fn to_json(&self, entity: &ProcessExternalPayment) -> Result<Value> {
        let mut object = Object::new();
        write_outcome(&mut object, entity.status, entity.error.as_ref());
        put_opt_string(&mut object, "invoice_id", entity.invoice_id.as_deref());
        put_opt_string(&mut object, "acs_uri", entity.acs_uri.as_deref());
        if !entity.acs_params.is_empty() {
            let params: Object = entity
                .acs_params
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            object.insert("acs_params".to_owned(), Value::Object(params));
        }
        put_opt(&mut object, "next_retry", entity.next_retry.map(Value::from));
        if let Some(source) = &entity.money_source {
            object.insert("money_source".to_owned(), MoneySourceAdapter.to_json(source)?);
        }
        Ok(Value::Object(object))
    }

    fn from_json(&self, value: &Value) -> Result<ProcessExternalPayment> {
        let object = as_object(value, self.type_name())?;
        let mut acs_params = BTreeMap::new();
        if let Some(params) = get_object(object, "acs_params")? {
            for key in params.keys() {
                if let Some(value) = get_string(params, key)? {
                    acs_params.insert(key.clone(), value);
                }
            }
        }
        let money_source = match object.get("money_source") {
            None | Some(Value::Null) => None,
            Some(source) => Some(MoneySourceAdapter.from_json(source)?),
        };
        Ok(ProcessExternalPayment {
            status: read_status(object)?,
            error: read_error(object)?,
            invoice_id: get_string(object, "invoice_id")?,
            acs_uri: get_string(object, "acs_uri")?,
            acs_params,
            next_retry: get_u64(object, "next_retry")?,
            money_source,
        })
    }
}
