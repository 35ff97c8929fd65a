//! `request-external-payment`: creates a payment contract paid from a card.

use serde_json::Value;

use super::{
    ApiRequest, Parameters, payment_params::PaymentParams, read_error, read_status,
    require_non_empty, write_outcome,
};
use crate::{
    codec::{
        TypeAdapter,
        scalar::{
            Object, as_object, decimal_to_json, get_decimal, get_string, put_opt, put_opt_string,
        },
    },
    error::{Error, Result},
    model::{ErrorCode, MoneyAmount, Status},
    net::response::MethodResponse,
};

/// Request for a new payment contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestExternalPaymentRequest {
    instance_id: String,
    pattern_id: String,
    params: Parameters,
}

impl RequestExternalPaymentRequest {
    /// Creates the request for `pattern_id` with its payment `params`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `instance_id` or `pattern_id` is empty,
    /// or if `params` is empty.
    pub fn new(
        instance_id: impl Into<String>,
        pattern_id: impl Into<String>,
        params: Parameters,
    ) -> Result<Self> {
        let instance_id = instance_id.into();
        let pattern_id = pattern_id.into();
        require_non_empty(&instance_id, "instance_id")?;
        require_non_empty(&pattern_id, "pattern_id")?;
        if params.is_empty() {
            return Err(Error::validation("payment params must not be empty"));
        }
        Ok(Self { instance_id, pattern_id, params })
    }

    /// Creates the request from a ready-made parameter set.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_payment_params(
        instance_id: impl Into<String>,
        params: &impl PaymentParams,
    ) -> Result<Self> {
        Self::new(instance_id, params.pattern_id(), params.make_params())
    }

    /// Instance id the contract is requested for.
    #[must_use]
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Payment pattern id.
    #[must_use]
    pub fn pattern_id(&self) -> &str {
        &self.pattern_id
    }
}

impl ApiRequest for RequestExternalPaymentRequest {
    type Response = RequestExternalPayment;

    fn method_path(&self) -> &'static str {
        "request-external-payment"
    }

    fn parameters(&self) -> Parameters {
        let mut params = Parameters::new()
            .with("instance_id", &self.instance_id)
            .with("pattern_id", &self.pattern_id);
        params.extend(self.params.clone());
        params
    }
}

/// Response of `request-external-payment`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestExternalPayment {
    /// Call outcome.
    pub status: Status,
    /// Server error, if refused.
    pub error: Option<ErrorCode>,
    /// Contract id to pass to `process-external-payment`.
    pub request_id: Option<String>,
    /// Amount to be charged, fees included.
    pub contract_amount: Option<MoneyAmount>,
    /// Payee title.
    pub title: Option<String>,
}

impl MethodResponse for RequestExternalPayment {
    fn status(&self) -> Option<Status> {
        Some(self.status)
    }

    fn error(&self) -> Option<&ErrorCode> {
        self.error.as_ref()
    }
}

/// Adapter for [`RequestExternalPayment`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestExternalPaymentAdapter;

impl TypeAdapter for RequestExternalPaymentAdapter {
    type Entity = RequestExternalPayment;

    fn type_name(&self) -> &'static str {
        "RequestExternalPayment"
    }

    fn to_json(&self, entity: &RequestExternalPayment) -> Result<Value> {
        let mut object = Object::new();
        write_outcome(&mut object, entity.status, entity.error.as_ref());
        put_opt_string(&mut object, "request_id", entity.request_id.as_deref());
        put_opt(
            &mut object,
            "contract_amount",
            entity.contract_amount.map(|a| decimal_to_json(a.value())),
        );
        put_opt_string(&mut object, "title", entity.title.as_deref());
        Ok(Value::Object(object))
    }

    fn from_json(&self, value: &Value) -> Result<RequestExternalPayment> {
        let object = as_object(value, self.type_name())?;
        let contract_amount = get_decimal(object, "contract_amount")?
            .map(MoneyAmount::new)
            .transpose()
            .map_err(|e| Error::decode(format!("field 'contract_amount': {e}")))?;
        Ok(RequestExternalPayment {
            status: read_status(object)?,
            error: read_error(object)?,
            request_id: get_string(object, "request_id")?,
            contract_amount,
            title: get_string(object, "title")?,
        })
    }
}
