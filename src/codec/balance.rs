//! Balance snapshot codec.

use serde_json::Value;

use super::{
    TypeAdapter,
    scalar::{Object, as_object, decimal_to_json, get_decimal, put_opt, require_decimal},
};
use crate::{error::Result, model::BalanceDetails};

/// Adapter for [`BalanceDetails`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceDetailsAdapter;

impl TypeAdapter for BalanceDetailsAdapter {
    type Entity = BalanceDetails;

    fn type_name(&self) -> &'static str {
        "BalanceDetails"
    }

    fn to_json(&self, entity: &BalanceDetails) -> Result<Value> {
        let mut object = Object::new();
        object.insert("total".to_owned(), decimal_to_json(entity.total));
        object.insert("available".to_owned(), decimal_to_json(entity.available));
        put_opt(&mut object, "deposition_pending", entity.deposition_pending.map(decimal_to_json));
        put_opt(&mut object, "blocked", entity.blocked.map(decimal_to_json));
        put_opt(&mut object, "debt", entity.debt.map(decimal_to_json));
        put_opt(&mut object, "hold", entity.hold.map(decimal_to_json));
        Ok(Value::Object(object))
    }

    fn from_json(&self, value: &Value) -> Result<BalanceDetails> {
        let object = as_object(value, self.type_name())?;
        Ok(BalanceDetails {
            total: require_decimal(object, "total")?,
            available: require_decimal(object, "available")?,
            deposition_pending: get_decimal(object, "deposition_pending")?,
            blocked: get_decimal(object, "blocked")?,
            debt: get_decimal(object, "debt")?,
            hold: get_decimal(object, "hold")?,
        })
    }
}
