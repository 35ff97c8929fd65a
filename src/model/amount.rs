//! Non-negative money amounts.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// An exact, non-negative amount of money.
///
/// Used wherever the API expects a plain amount: payment parameters, operation
/// amounts, contract amounts. Balances and debts are signed and use
/// [`Decimal`] directly.
///
/// # Examples
///
/// ```
/// use money_api_client::model::MoneyAmount;
/// use rust_decimal::Decimal;
///
/// let amount = MoneyAmount::new(Decimal::new(10050, 2))?;
/// assert_eq!(amount.to_string(), "100.50");
///
/// assert!(MoneyAmount::new(Decimal::new(-1, 0)).is_err());
/// # Ok::<(), money_api_client::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoneyAmount(Decimal);

impl MoneyAmount {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount after checking it is not negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `value` is below zero.
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(Error::validation(format!("amount must not be negative, got {value}")));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for MoneyAmount {
    // Decimal's Display is already the plain, non-scientific form the API expects.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for MoneyAmount {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for MoneyAmount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str_exact(s)
            .map_err(|e| Error::validation(format!("invalid amount '{s}': {e}")))?;
        Self::new(value)
    }
}

impl From<MoneyAmount> for Decimal {
    fn from(amount: MoneyAmount) -> Self {
        amount.0
    }
}
