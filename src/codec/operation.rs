//! Operation-history record codec.

use serde_json::Value;

use super::{
    TypeAdapter,
    scalar::{
        Object, as_object, datetime_to_wire, decimal_to_json, get_datetime, get_decimal,
        get_string, put_opt, put_opt_string,
    },
};
use crate::{
    error::{Error, Result},
    model::{Direction, MoneyAmount, Operation, OperationStatus, OperationType},
};

/// Adapter for [`Operation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationAdapter;

impl TypeAdapter for OperationAdapter {
    type Entity = Operation;

    fn type_name(&self) -> &'static str {
        "Operation"
    }

    fn to_json(&self, entity: &Operation) -> Result<Value> {
        let mut object = Object::new();
        put_opt_string(&mut object, "operation_id", entity.operation_id.as_deref());
        put_opt_string(
            &mut object,
            "status",
            known(entity.status.code(), entity.status == OperationStatus::Unknown),
        );
        put_opt(
            &mut object,
            "datetime",
            entity.datetime.as_ref().map(|dt| Value::String(datetime_to_wire(dt))),
        );
        put_opt_string(&mut object, "title", entity.title.as_deref());
        put_opt_string(&mut object, "pattern_id", entity.pattern_id.as_deref());
        put_opt_string(
            &mut object,
            "direction",
            known(entity.direction.code(), entity.direction == Direction::Unknown),
        );
        put_opt(&mut object, "amount", entity.amount.map(|amount| decimal_to_json(amount.value())));
        put_opt_string(&mut object, "label", entity.label.as_deref());
        put_opt_string(
            &mut object,
            "type",
            known(entity.operation_type.code(), entity.operation_type == OperationType::Unknown),
        );
        Ok(Value::Object(object))
    }

    fn from_json(&self, value: &Value) -> Result<Operation> {
        let object = as_object(value, self.type_name())?;
        let amount = get_decimal(object, "amount")?
            .map(MoneyAmount::new)
            .transpose()
            .map_err(|e| Error::decode(format!("field 'amount': {e}")))?;
        Ok(Operation {
            operation_id: get_string(object, "operation_id")?,
            status: OperationStatus::parse(get_string(object, "status")?.as_deref()),
            datetime: get_datetime(object, "datetime")?,
            title: get_string(object, "title")?,
            pattern_id: get_string(object, "pattern_id")?,
            direction: Direction::parse(get_string(object, "direction")?.as_deref()),
            amount,
            label: get_string(object, "label")?,
            operation_type: OperationType::parse(get_string(object, "type")?.as_deref()),
        })
    }
}

// Unknown enum values are omitted so they decode back to Unknown.
fn known(code: &'static str, is_unknown: bool) -> Option<&'static str> {
    (!is_unknown).then_some(code)
}
