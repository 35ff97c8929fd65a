//! Scalar field readers and writers for JSON objects.
//!
//! Readers treat an absent key and an explicit `null` the same way: both yield
//! `None`, and the caller decides what default applies. A value of the wrong
//! JSON kind (an array where a string is expected, malformed decimal text) is a
//! decode error, never silently coerced.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};

/// JSON object as decoded by `serde_json`.
pub type Object = Map<String, Value>;

const DATETIME_FALLBACK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Borrows `value` as an object, failing with a decode error naming `type_name`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `value` is not a JSON object.
pub fn as_object<'a>(value: &'a Value, type_name: &str) -> Result<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| {
            Error::decode(format!("{type_name}: expected JSON object, got {}", kind(value)))
        })
}

/// Reads a string field.
///
/// Numbers and booleans are accepted and returned in their textual form.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the field holds an array or an object.
///
/// # Examples
///
/// ```
/// use money_api_client::codec::scalar::get_string;
/// use serde_json::json;
///
/// let value = json!({"title": "Coffee", "empty": null});
/// let object = value.as_object().unwrap();
///
/// assert_eq!(get_string(object, "title")?.as_deref(), Some("Coffee"));
/// assert_eq!(get_string(object, "empty")?, None);
/// assert_eq!(get_string(object, "missing")?, None);
/// # Ok::<(), money_api_client::error::Error>(())
/// ```
pub fn get_string(object: &Object, key: &str) -> Result<Option<String>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(unexpected(key, "string", other)),
    }
}

/// Reads an exact decimal from either a JSON number or a numeric string.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed numeric text, on text that does not
/// fit a [`Decimal`] without losing precision, and on non-numeric JSON kinds.
///
/// # Examples
///
/// ```
/// use money_api_client::codec::scalar::get_decimal;
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// let value = json!({"amount": "100.50", "bad": "1,5"});
/// let object = value.as_object().unwrap();
///
/// assert_eq!(get_decimal(object, "amount")?, Some(Decimal::new(10050, 2)));
/// assert!(get_decimal(object, "bad").is_err());
/// # Ok::<(), money_api_client::error::Error>(())
/// ```
pub fn get_decimal(object: &Object, key: &str) -> Result<Option<Decimal>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => parse_decimal(key, s).map(Some),
        Some(Value::Number(n)) => parse_decimal(key, &n.to_string()).map(Some),
        Some(other) => Err(unexpected(key, "decimal", other)),
    }
}

/// Reads a decimal field that must be present.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the field is absent, null or malformed.
pub fn require_decimal(object: &Object, key: &str) -> Result<Decimal> {
    get_decimal(object, key)?
        .ok_or_else(|| Error::decode(format!("missing required field '{key}'")))
}

/// Reads a boolean from a JSON bool or the strings `"true"`/`"false"`.
///
/// # Errors
///
/// Returns [`Error::Decode`] for any other value.
pub fn get_bool(object: &Object, key: &str) -> Result<Option<bool>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::String(s)) if s == "true" => Ok(Some(true)),
        Some(Value::String(s)) if s == "false" => Ok(Some(false)),
        Some(other) => Err(unexpected(key, "boolean", other)),
    }
}

/// Reads a non-negative integer from a JSON number or numeric string.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the value is not a non-negative integer.
pub fn get_u64(object: &Object, key: &str) -> Result<Option<u64>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_u64().map(Some).ok_or_else(|| {
            Error::decode(format!("field '{key}': expected unsigned integer, got {n}"))
        }),
        Some(Value::String(s)) => s.parse().map(Some).map_err(|_| {
            Error::decode(format!("field '{key}': expected unsigned integer, got '{s}'"))
        }),
        Some(other) => Err(unexpected(key, "unsigned integer", other)),
    }
}

/// Reads an ISO-8601 timestamp with an explicit offset.
///
/// RFC 3339 is tried first; offsets without a colon (`+0300`) are accepted too.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the text is not a timestamp or the value is not a string.
pub fn get_datetime(object: &Object, key: &str) -> Result<Option<DateTime<FixedOffset>>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .or_else(|_| DateTime::parse_from_str(s, DATETIME_FALLBACK_FORMAT))
            .map(Some)
            .map_err(|e| Error::decode(format!("field '{key}': invalid timestamp '{s}': {e}"))),
        Some(other) => Err(unexpected(key, "timestamp", other)),
    }
}

/// Reads an array field. Absent or null yields an empty slice.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the field holds anything other than an array.
pub fn get_array<'a>(object: &'a Object, key: &str) -> Result<&'a [Value]> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(unexpected(key, "array", other)),
    }
}

/// Reads a nested object field.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the field holds anything other than an object.
pub fn get_object<'a>(object: &'a Object, key: &str) -> Result<Option<&'a Object>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(nested)) => Ok(Some(nested)),
        Some(other) => Err(unexpected(key, "object", other)),
    }
}

/// Encodes a decimal as a JSON number carrying its exact text.
#[must_use]
pub fn decimal_to_json(value: Decimal) -> Value {
    let text = value.to_string();
    serde_json::from_str::<Number>(&text).map_or(Value::String(text), Value::Number)
}

/// Canonical wire form of a timestamp.
#[must_use]
pub fn datetime_to_wire(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Inserts `value` under `key` unless it is `None`.
pub fn put_opt(object: &mut Object, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        object.insert(key.to_owned(), value);
    }
}

/// Inserts a string under `key` unless it is `None`.
pub fn put_opt_string(object: &mut Object, key: &str, value: Option<&str>) {
    put_opt(object, key, value.map(|s| Value::String(s.to_owned())));
}

fn parse_decimal(key: &str, text: &str) -> Result<Decimal> {
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str_exact(text)
    };
    parsed.map_err(|e| Error::decode(format!("field '{key}': invalid decimal '{text}': {e}")))
}

fn unexpected(key: &str, expected: &str, found: &Value) -> Error {
    Error::decode(format!("field '{key}': expected {expected}, got {}", kind(found)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_get_string_accepts_scalars() {
        let obj = object(json!({"n": 42, "b": true, "s": "x"}));
        assert_eq!(get_string(&obj, "n").unwrap().as_deref(), Some("42"));
        assert_eq!(get_string(&obj, "b").unwrap().as_deref(), Some("true"));
        assert_eq!(get_string(&obj, "s").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_get_string_rejects_array() {
        let obj = object(json!({"title": ["a"]}));
        assert!(matches!(get_string(&obj, "title"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_get_decimal_keeps_precision() {
        let obj = object(json!({"rate": "0.0000000000000000000000000001"}));
        let rate = get_decimal(&obj, "rate").unwrap().unwrap();
        assert_eq!(rate.scale(), 28);
    }

    #[test]
    fn test_get_decimal_from_number() {
        let obj: Object = serde_json::from_str(r#"{"amount": 12.340}"#).unwrap();
        let amount = get_decimal(&obj, "amount").unwrap().unwrap();
        assert_eq!(amount, Decimal::new(1234, 2));
    }

    #[test]
    fn test_get_decimal_scientific() {
        let obj = object(json!({"amount": "1.5e2"}));
        assert_eq!(get_decimal(&obj, "amount").unwrap(), Some(Decimal::new(150, 0)));
    }

    #[test]
    fn test_get_decimal_rejects_garbage() {
        let obj = object(json!({"a": "abc", "b": "", "c": true}));
        assert!(get_decimal(&obj, "a").is_err());
        assert!(get_decimal(&obj, "b").is_err());
        assert!(get_decimal(&obj, "c").is_err());
    }

    #[test]
    fn test_get_decimal_rejects_excess_precision() {
        let obj = object(json!({"a": "0.00000000000000000000000000001"}));
        assert!(get_decimal(&obj, "a").is_err());
    }

    #[test]
    fn test_require_decimal_missing() {
        let obj = object(json!({"total": null}));
        assert!(require_decimal(&obj, "total").is_err());
    }

    #[test]
    fn test_get_bool_forms() {
        let obj = object(json!({"a": true, "b": "false", "c": "yes"}));
        assert_eq!(get_bool(&obj, "a").unwrap(), Some(true));
        assert_eq!(get_bool(&obj, "b").unwrap(), Some(false));
        assert!(get_bool(&obj, "c").is_err());
    }

    #[test]
    fn test_get_u64_forms() {
        let obj = object(json!({"a": 30, "b": "45", "c": -1}));
        assert_eq!(get_u64(&obj, "a").unwrap(), Some(30));
        assert_eq!(get_u64(&obj, "b").unwrap(), Some(45));
        assert!(get_u64(&obj, "c").is_err());
    }

    #[test]
    fn test_get_datetime_offsets() {
        let obj = object(json!({
            "a": "2024-03-01T10:15:30.123+03:00",
            "b": "2024-03-01T10:15:30.123+0300",
        }));
        let a = get_datetime(&obj, "a").unwrap().unwrap();
        let b = get_datetime(&obj, "b").unwrap().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.offset().local_minus_utc(), 3 * 3600);
    }

    #[test]
    fn test_get_datetime_rejects_garbage() {
        let obj = object(json!({"a": "yesterday"}));
        assert!(get_datetime(&obj, "a").is_err());
    }

    #[test]
    fn test_get_array_absent_is_empty() {
        let obj = object(json!({"other": 1}));
        assert!(get_array(&obj, "operations").unwrap().is_empty());
        let obj = object(json!({"operations": {}}));
        assert!(get_array(&obj, "operations").is_err());
    }

    #[test]
    fn test_decimal_to_json_is_number() {
        assert_eq!(decimal_to_json(Decimal::ZERO), json!(0));
        assert!(decimal_to_json(Decimal::new(105, 1)).is_number());
    }

    #[test]
    fn test_datetime_wire_round_trip() {
        let dt = DateTime::parse_from_rfc3339("2024-03-01T10:15:30.5+03:00").unwrap();
        let wire = datetime_to_wire(&dt);
        assert_eq!(DateTime::parse_from_rfc3339(&wire).unwrap(), dt);
    }

    #[test]
    fn test_as_object_rejects_array() {
        let err = as_object(&json!([1, 2]), "Fee").unwrap_err();
        assert!(err.to_string().contains("Fee"));
    }
}
