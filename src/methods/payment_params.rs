//! Ready-made parameter sets for common payment patterns.

use super::{Parameters, require_non_empty};
use crate::{error::Result, model::MoneyAmount};

/// A payment pattern together with the parameters it needs.
pub trait PaymentParams {
    /// Identifier of the payment pattern.
    fn pattern_id(&self) -> &str;

    /// Pattern-specific form parameters.
    fn make_params(&self) -> Parameters;
}

/// Mobile phone top-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneParams {
    number: String,
    amount: MoneyAmount,
}

impl PhoneParams {
    /// Pattern id of phone top-ups.
    pub const PATTERN_ID: &'static str = "phone-topup";

    /// Tops up `number` by `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::error::Error::Validation) if `number` is empty.
    pub fn new(number: impl Into<String>, amount: MoneyAmount) -> Result<Self> {
        let number = number.into();
        require_non_empty(&number, "phone number")?;
        Ok(Self { number, amount })
    }
}

impl PaymentParams for PhoneParams {
    fn pattern_id(&self) -> &str {
        Self::PATTERN_ID
    }

    fn make_params(&self) -> Parameters {
        Parameters::new().with("phone-number", &self.number).with("amount", self.amount)
    }
}

/// Transfer to another account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct P2pTransferParams {
    to: String,
    amount: MoneyAmount,
    comment: Option<String>,
    message: Option<String>,
    label: Option<String>,
}

impl P2pTransferParams {
    /// Pattern id of account-to-account transfers.
    pub const PATTERN_ID: &'static str = "p2p";

    /// Transfers `amount` to the account, phone or e-mail `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::error::Error::Validation) if `to` is empty.
    pub fn new(to: impl Into<String>, amount: MoneyAmount) -> Result<Self> {
        let to = to.into();
        require_non_empty(&to, "to")?;
        Ok(Self { to, amount, comment: None, message: None, label: None })
    }

    /// Comment shown to the payer.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Message shown to the payee.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Label for finding the operation in the history.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl PaymentParams for P2pTransferParams {
    fn pattern_id(&self) -> &str {
        Self::PATTERN_ID
    }

    fn make_params(&self) -> Parameters {
        Parameters::new()
            .with("to", &self.to)
            .with("amount", self.amount)
            .with("comment", self.comment.as_ref())
            .with("message", self.message.as_ref())
            .with("label", self.label.as_ref())
    }
}
