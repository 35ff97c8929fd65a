//! Fee schedules attached to payment contracts.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// Which side of the payment the fee's base amount refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AmountType {
    /// Amount is what the payer is charged.
    #[default]
    Payer,
    /// Amount is what the payee receives.
    Payee,
}

impl AmountType {
    /// Wire code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Payer => "payer",
            Self::Payee => "payee",
        }
    }

    /// Parses a wire code; absent or unknown codes mean [`AmountType::Payer`].
    #[must_use]
    pub fn parse(code: Option<&str>) -> Self {
        match code {
            Some("payee") => Self::Payee,
            _ => Self::Payer,
        }
    }
}

impl fmt::Display for AmountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Standard fee: `a + amount * b`, at least `c`, at most `d`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StdFee {
    /// Fixed part.
    pub a: Decimal,
    /// Proportional rate.
    pub b: Decimal,
    /// Minimum fee.
    pub c: Decimal,
    /// Maximum fee, if capped.
    pub d: Option<Decimal>,
    /// What the base amount refers to.
    pub amount_type: AmountType,
}

impl StdFee {
    /// Computes the fee for `amount`, rounded half-up to kopecks.
    ///
    /// # Examples
    ///
    /// ```
    /// use money_api_client::model::StdFee;
    /// use rust_decimal::Decimal;
    ///
    /// // 1.00 fixed + 2% of 100.00, minimum 5.00
    /// let fee = StdFee {
    ///     a: Decimal::new(100, 2),
    ///     b: Decimal::new(2, 2),
    ///     c: Decimal::new(500, 2),
    ///     ..StdFee::default()
    /// };
    /// assert_eq!(fee.compute(Decimal::new(10000, 2)), Decimal::new(500, 2));
    /// ```
    #[must_use]
    pub fn compute(&self, amount: Decimal) -> Decimal {
        let mut fee = (self.a + amount * self.b).max(self.c);
        if let Some(max) = self.d {
            fee = fee.min(max);
        }
        fee.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Fee attached to a payment contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fee {
    /// The fee is computed by the payee and is not known in advance.
    Custom,
    /// Standard fee schedule.
    Standard(StdFee),
}

impl Fee {
    /// Computes the fee for `amount`; `None` for a custom fee.
    #[must_use]
    pub fn compute(&self, amount: Decimal) -> Option<Decimal> {
        match self {
            Self::Custom => None,
            Self::Standard(fee) => Some(fee.compute(amount)),
        }
    }
}

impl From<StdFee> for Fee {
    fn from(fee: StdFee) -> Self {
        Self::Standard(fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_amount_type_defaults_to_payer() {
        assert_eq!(AmountType::parse(None), AmountType::Payer);
        assert_eq!(AmountType::parse(Some("other")), AmountType::Payer);
        assert_eq!(AmountType::parse(Some("payee")), AmountType::Payee);
    }

    #[test]
    fn test_compute_proportional() {
        let fee = StdFee { b: dec("0.005"), ..StdFee::default() };
        assert_eq!(fee.compute(dec("1000")), dec("5.00"));
    }

    #[test]
    fn test_compute_respects_cap() {
        let fee = StdFee { a: dec("10"), b: dec("0.1"), d: Some(dec("15")), ..StdFee::default() };
        assert_eq!(fee.compute(dec("1000")), dec("15"));
    }

    #[test]
    fn test_compute_rounds_half_up() {
        let fee = StdFee { b: dec("0.01"), ..StdFee::default() };
        assert_eq!(fee.compute(dec("0.5")), dec("0.01"));
    }

    #[test]
    fn test_custom_fee_has_no_value() {
        assert_eq!(Fee::Custom.compute(dec("100")), None);
        assert_eq!(Fee::from(StdFee::default()).compute(dec("100")), Some(Decimal::ZERO));
    }
}
