//! Detailed account balance.

use rust_decimal::Decimal;

/// Balance snapshot returned by a balance query.
///
/// `total` and `available` are mandatory: a payload without them fails to decode
/// instead of producing a half-filled snapshot. All amounts are signed, an
/// overdrawn account reports negative balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceDetails {
    /// Total balance.
    pub total: Decimal,
    /// Balance available for spending.
    pub available: Decimal,
    /// Deposits that are not yet credited.
    pub deposition_pending: Option<Decimal>,
    /// Money blocked by the service.
    pub blocked: Option<Decimal>,
    /// Account debt.
    pub debt: Option<Decimal>,
    /// Money on hold.
    pub hold: Option<Decimal>,
}

impl BalanceDetails {
    /// Creates a snapshot with only the mandatory amounts set.
    #[must_use]
    pub fn new(total: Decimal, available: Decimal) -> Self {
        Self { total, available, deposition_pending: None, blocked: None, debt: None, hold: None }
    }
}
