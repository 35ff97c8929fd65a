//! API methods: request builders and their response types.
//!
//! Each method is a request value implementing [`ApiRequest`] plus the response
//! entity it decodes to. Requests are validated once, when they are built, and
//! are immutable afterwards.
//!
//! # Examples
//!
//! ```
//! use money_api_client::methods::{ApiRequest, instance_id::InstanceIdRequest};
//!
//! let request = InstanceIdRequest::new("my-client-id")?;
//! assert_eq!(request.method_path(), "instance-id");
//! assert_eq!(request.parameters().get("client_id"), Some("my-client-id"));
//!
//! assert!(InstanceIdRequest::new("").is_err());
//! # Ok::<(), money_api_client::error::Error>(())
//! ```

pub mod account_info;
pub mod instance_id;
pub mod operation_history;
pub mod payment_params;
pub mod process_external_payment;
pub mod request_external_payment;

use std::slice;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    codec::scalar::{Object, datetime_to_wire, get_string},
    error::{Error, Result},
    model::{ErrorCode, MoneyAmount, Status},
    net::MONEY_API_SERVICE,
};

/// A single API call: where it goes and what it sends.
pub trait ApiRequest {
    /// Entity the response body decodes to.
    type Response: 'static;

    /// Path of the method relative to the service base URL, without a leading `/`.
    fn method_path(&self) -> &'static str;

    /// Name of the service hosting the method.
    fn service(&self) -> &'static str {
        MONEY_API_SERVICE
    }

    /// Form parameters, in the order they are sent.
    fn parameters(&self) -> Parameters;
}

/// Conversion of a parameter value to its canonical string form.
///
/// `None` means the parameter is omitted entirely.
pub trait ParamValue {
    /// Canonical string form, or `None` to omit the parameter.
    fn to_param(&self) -> Option<String>;
}

impl ParamValue for &str {
    fn to_param(&self) -> Option<String> {
        Some((*self).to_owned())
    }
}

impl ParamValue for String {
    fn to_param(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl ParamValue for &String {
    fn to_param(&self) -> Option<String> {
        Some((*self).clone())
    }
}

impl ParamValue for bool {
    fn to_param(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ParamValue for u32 {
    fn to_param(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ParamValue for u64 {
    fn to_param(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ParamValue for Decimal {
    fn to_param(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ParamValue for MoneyAmount {
    fn to_param(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ParamValue for DateTime<FixedOffset> {
    fn to_param(&self) -> Option<String> {
        Some(datetime_to_wire(self))
    }
}

impl<T: ParamValue> ParamValue for Option<T> {
    fn to_param(&self) -> Option<String> {
        self.as_ref().and_then(ParamValue::to_param)
    }
}

/// Ordered form parameters of a request.
///
/// Keys may repeat; insertion order is the wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters(Vec<(String, String)>);

impl Parameters {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `key` with the canonical form of `value`; `None` values are skipped.
    pub fn add<V: ParamValue>(&mut self, key: &str, value: V) -> &mut Self {
        if let Some(value) = value.to_param() {
            self.0.push((key.to_owned(), value));
        }
        self
    }

    /// Builder-style [`add`](Self::add).
    #[must_use]
    pub fn with<V: ParamValue>(mut self, key: &str, value: V) -> Self {
        self.add(key, value);
        self
    }

    /// Appends every pair of `other`.
    pub fn extend(&mut self, other: Parameters) {
        self.0.extend(other.0);
    }

    /// First value sent under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the pairs in wire order.
    pub fn iter(&self) -> slice::Iter<'_, (String, String)> {
        self.0.iter()
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a (String, String);
    type IntoIter = slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Fails with a validation error if `value` is empty.
pub(crate) fn require_non_empty(value: &str, name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Reads the `error` field shared by method responses.
pub(crate) fn read_error(object: &Object) -> Result<Option<ErrorCode>> {
    Ok(get_string(object, "error")?.as_deref().map(ErrorCode::parse))
}

/// Reads the `status` field shared by method responses.
pub(crate) fn read_status(object: &Object) -> Result<Status> {
    Ok(Status::parse(get_string(object, "status")?.as_deref()))
}

/// Writes the `status` and `error` fields shared by method responses.
pub(crate) fn write_outcome(object: &mut Object, status: Status, error: Option<&ErrorCode>) {
    if status != Status::Unknown {
        object.insert("status".to_owned(), status.code().into());
    }
    if let Some(error) = error {
        object.insert("error".to_owned(), error.code().into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_values_are_omitted() {
        let params = Parameters::new().with("label", None::<String>).with("records", Some(10_u32));
        assert_eq!(params.len(), 1);
        assert!(!params.contains("label"));
        assert_eq!(params.get("records"), Some("10"));
    }

    #[test]
    fn test_empty_string_is_sent() {
        let params = Parameters::new().with("type", "");
        assert_eq!(params.get("type"), Some(""));
    }

    #[test]
    fn test_canonical_forms() {
        let params = Parameters::new()
            .with("details", true)
            .with("amount", Decimal::new(1050, 2))
            .with("big", Decimal::new(1, 0) * Decimal::new(1_000_000_000, 0));
        assert_eq!(params.get("details"), Some("true"));
        assert_eq!(params.get("amount"), Some("10.50"));
        assert_eq!(params.get("big"), Some("1000000000"));
    }

    #[test]
    fn test_order_is_preserved() {
        let params: Parameters = [("b", "1"), ("a", "2"), ("b", "3")].into_iter().collect();
        let keys: Vec<_> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["b", "a", "b"]);
        assert_eq!(params.get("b"), Some("1"));
    }

    #[test]
    fn test_serializes_as_pairs() {
        let params = Parameters::new().with("a", "1");
        assert_eq!(serde_json::to_value(&params).unwrap(), serde_json::json!([["a", "1"]]));
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("x", "client_id").is_ok());
        let err = require_non_empty("", "client_id").unwrap_err();
        assert!(err.to_string().contains("client_id"));
    }
}
