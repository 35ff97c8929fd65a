//! Card and money-source codecs.
//!
//! A money source is discriminated by `type`: `"wallet"` is the wallet, any
//! other value is a card whose brand is that same `type` string. Unknown brands
//! decode to [`CardType::Unknown`] instead of failing.

use serde_json::Value;

use super::{
    TypeAdapter,
    scalar::{Object, as_object, get_string, put_opt_string},
};
use crate::{
    error::Result,
    model::{Card, CardType, MoneySource, Wallet},
};

const WALLET_TYPE: &str = "wallet";

/// Adapter for [`Card`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CardAdapter;

impl TypeAdapter for CardAdapter {
    type Entity = Card;

    fn type_name(&self) -> &'static str {
        "Card"
    }

    fn to_json(&self, entity: &Card) -> Result<Value> {
        let mut object = Object::new();
        put_opt_string(&mut object, "id", entity.id.as_deref());
        put_opt_string(&mut object, "pan_fragment", entity.pan_fragment.as_deref());
        object.insert("type".to_owned(), Value::String(entity.card_type.name().to_owned()));
        Ok(Value::Object(object))
    }

    fn from_json(&self, value: &Value) -> Result<Card> {
        let object = as_object(value, self.type_name())?;
        card_from_object(object)
    }
}

/// Adapter for [`MoneySource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneySourceAdapter;

impl TypeAdapter for MoneySourceAdapter {
    type Entity = MoneySource;

    fn type_name(&self) -> &'static str {
        "MoneySource"
    }

    fn to_json(&self, entity: &MoneySource) -> Result<Value> {
        match entity {
            MoneySource::Wallet(wallet) => {
                let mut object = Object::new();
                object.insert("type".to_owned(), Value::String(WALLET_TYPE.to_owned()));
                put_opt_string(&mut object, "id", wallet.id.as_deref());
                Ok(Value::Object(object))
            }
            MoneySource::Card(card) => CardAdapter.to_json(card),
        }
    }

    fn from_json(&self, value: &Value) -> Result<MoneySource> {
        let object = as_object(value, self.type_name())?;
        match get_string(object, "type")?.as_deref() {
            Some(WALLET_TYPE) => Ok(MoneySource::Wallet(Wallet { id: get_string(object, "id")? })),
            _ => card_from_object(object).map(MoneySource::Card),
        }
    }
}

fn card_from_object(object: &Object) -> Result<Card> {
    Ok(Card {
        id: get_string(object, "id")?,
        pan_fragment: get_string(object, "pan_fragment")?,
        card_type: CardType::parse(get_string(object, "type")?.as_deref()),
    })
}
