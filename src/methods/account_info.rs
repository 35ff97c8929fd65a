//! `account-info`: account number, balance and linked cards.

use rust_decimal::Decimal;
use serde_json::Value;

use super::{ApiRequest, Parameters};
use crate::{
    codec::{
        TypeAdapter,
        balance::BalanceDetailsAdapter,
        card::CardAdapter,
        scalar::{
            Object, as_object, decimal_to_json, get_array, get_decimal, get_string, put_opt,
            put_opt_string,
        },
    },
    error::Result,
    model::{BalanceDetails, Card},
};

/// Request for the account summary. Takes no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountInfoRequest;

impl ApiRequest for AccountInfoRequest {
    type Response = AccountInfo;

    fn method_path(&self) -> &'static str {
        "account-info"
    }

    fn parameters(&self) -> Parameters {
        Parameters::new()
    }
}

/// Response of `account-info`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountInfo {
    /// Account number.
    pub account: Option<String>,
    /// Current balance.
    pub balance: Option<Decimal>,
    /// Account currency code (ISO 4217 numeric).
    pub currency: Option<String>,
    /// Detailed balance breakdown, when requested.
    pub balance_details: Option<BalanceDetails>,
    /// Bank cards linked to the account; empty when none are reported.
    pub cards_linked: Vec<Card>,
}

/// Adapter for [`AccountInfo`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountInfoAdapter;

impl TypeAdapter for AccountInfoAdapter {
    type Entity = AccountInfo;

    fn type_name(&self) -> &'static str {
        "AccountInfo"
    }

    fn to_json(&self, entity: &AccountInfo) -> Result<Value> {
        let mut object = Object::new();
        put_opt_string(&mut object, "account", entity.account.as_deref());
        put_opt(&mut object, "balance", entity.balance.map(decimal_to_json));
        put_opt_string(&mut object, "currency", entity.currency.as_deref());
        if let Some(details) = &entity.balance_details {
            object.insert("balance_details".to_owned(), BalanceDetailsAdapter.to_json(details)?);
        }
        if !entity.cards_linked.is_empty() {
            let cards = entity
                .cards_linked
                .iter()
                .map(|card| CardAdapter.to_json(card))
                .collect::<Result<_>>()?;
            object.insert("cards_linked".to_owned(), Value::Array(cards));
        }
        Ok(Value::Object(object))
    }

    fn from_json(&self, value: &Value) -> Result<AccountInfo> {
        let object = as_object(value, self.type_name())?;
        let balance_details = match object.get("balance_details") {
            None | Some(Value::Null) => None,
            Some(details) => Some(BalanceDetailsAdapter.from_json(details)?),
        };
        Ok(AccountInfo {
            account: get_string(object, "account")?,
            balance: get_decimal(object, "balance")?,
            currency: get_string(object, "currency")?,
            balance_details,
            cards_linked: get_array(object, "cards_linked")?
                .iter()
                .map(|card| CardAdapter.from_json(card))
                .collect::<Result<_>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::CardType;

    #[test]
    fn test_no_parameters() {
        assert!(AccountInfoRequest.parameters().is_empty());
    }

    #[test]
    fn test_decode() {
        let info = AccountInfoAdapter
            .from_json(&json!({
                "account": "4100175017397",
                "balance": "1000.00",
                "currency": "643",
                "balance_details": {"total": "1000.00", "available": "1000.00"},
                "cards_linked": [{"pan_fragment": "510000******0001", "type": "MasterCard"}]
            }))
            .unwrap();
        assert_eq!(info.account.as_deref(), Some("4100175017397"));
        assert_eq!(info.balance_details.map(|b| b.total), Some(Decimal::new(100_000, 2)));
        assert_eq!(info.cards_linked.len(), 1);
        assert_eq!(info.cards_linked[0].card_type, CardType::MasterCard);
    }

    #[test]
    fn test_decode_without_cards() {
        let info = AccountInfoAdapter.from_json(&json!({"account": "1"})).unwrap();
        assert!(info.cards_linked.is_empty());
        assert!(info.balance_details.is_none());
    }

    #[test]
    fn test_incomplete_balance_details_fails() {
        let result = AccountInfoAdapter.from_json(&json!({"balance_details": {"total": "1"}}));
        assert!(result.is_err());
    }
}
