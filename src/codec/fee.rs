//! Fee codec.
//!
//! `{"type": "custom"}` is the custom fee. Every other object, including one
//! with an unrecognised or missing `type`, decodes as a standard fee with
//! coefficients `a`, `b`, `c` defaulting to zero and `d` left absent.

use rust_decimal::Decimal;
use serde_json::Value;

use super::{
    TypeAdapter,
    scalar::{Object, as_object, decimal_to_json, get_decimal, get_string, put_opt},
};
use crate::{
    error::Result,
    model::{AmountType, Fee, StdFee},
};

const CUSTOM_TYPE: &str = "custom";
const STANDARD_TYPE: &str = "std";

/// Adapter for [`Fee`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeAdapter;

impl TypeAdapter for FeeAdapter {
    type Entity = Fee;

    fn type_name(&self) -> &'static str {
        "Fee"
    }

    fn to_json(&self, entity: &Fee) -> Result<Value> {
        let mut object = Object::new();
        match entity {
            Fee::Custom => {
                object.insert("type".to_owned(), Value::String(CUSTOM_TYPE.to_owned()));
            }
            Fee::Standard(fee) => {
                object.insert("type".to_owned(), Value::String(STANDARD_TYPE.to_owned()));
                object.insert("a".to_owned(), decimal_to_json(fee.a));
                object.insert("b".to_owned(), decimal_to_json(fee.b));
                object.insert("c".to_owned(), decimal_to_json(fee.c));
                put_opt(&mut object, "d", fee.d.map(decimal_to_json));
                object.insert(
                    "amountType".to_owned(),
                    Value::String(fee.amount_type.code().to_owned()),
                );
            }
        }
        Ok(Value::Object(object))
    }

    fn from_json(&self, value: &Value) -> Result<Fee> {
        let object = as_object(value, self.type_name())?;
        if get_string(object, "type")?.as_deref() == Some(CUSTOM_TYPE) {
            return Ok(Fee::Custom);
        }
        Ok(Fee::Standard(StdFee {
            a: get_decimal(object, "a")?.unwrap_or(Decimal::ZERO),
            b: get_decimal(object, "b")?.unwrap_or(Decimal::ZERO),
            c: get_decimal(object, "c")?.unwrap_or(Decimal::ZERO),
            d: get_decimal(object, "d")?,
            amount_type: AmountType::parse(get_string(object, "amountType")?.as_deref()),
        }))
    }
}
