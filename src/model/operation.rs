//! Operation-history records.

use chrono::{DateTime, FixedOffset};

use super::MoneyAmount;

/// Processing status of a history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperationStatus {
    /// Completed.
    Success,
    /// Refused or returned to the payer.
    Refused,
    /// Not completed yet.
    InProgress,
    /// Absent or unrecognised.
    #[default]
    Unknown,
}

impl OperationStatus {
    const KNOWN: [Self; 3] = [Self::Success, Self::Refused, Self::InProgress];

    /// Wire code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Refused => "refused",
            Self::InProgress => "in_progress",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a wire code leniently.
    #[must_use]
    pub fn parse(code: Option<&str>) -> Self {
        code.and_then(|code| Self::KNOWN.into_iter().find(|s| s.code() == code))
            .unwrap_or(Self::Unknown)
    }
}

/// Direction of the money flow relative to the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Money came in.
    Incoming,
    /// Money went out.
    Outgoing,
    /// Absent or unrecognised.
    #[default]
    Unknown,
}

impl Direction {
    /// Wire code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Incoming => "in",
            Self::Outgoing => "out",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a wire code leniently.
    #[must_use]
    pub fn parse(code: Option<&str>) -> Self {
        match code {
            Some("in") => Self::Incoming,
            Some("out") => Self::Outgoing,
            _ => Self::Unknown,
        }
    }
}

/// Kind of a history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperationType {
    /// Payment to a shop.
    PaymentShop,
    /// Transfer to another account.
    OutgoingTransfer,
    /// Deposit.
    Deposition,
    /// Incoming transfer.
    IncomingTransfer,
    /// Incoming transfer protected by a code.
    IncomingTransferProtected,
    /// Absent or unrecognised.
    #[default]
    Unknown,
}

impl OperationType {
    const KNOWN: [Self; 5] = [
        Self::PaymentShop,
        Self::OutgoingTransfer,
        Self::Deposition,
        Self::IncomingTransfer,
        Self::IncomingTransferProtected,
    ];

    /// Wire code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::PaymentShop => "payment-shop",
            Self::OutgoingTransfer => "outgoing-transfer",
            Self::Deposition => "deposition",
            Self::IncomingTransfer => "incoming-transfer",
            Self::IncomingTransferProtected => "incoming-transfer-protected",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a wire code leniently.
    #[must_use]
    pub fn parse(code: Option<&str>) -> Self {
        code.and_then(|code| Self::KNOWN.into_iter().find(|t| t.code() == code))
            .unwrap_or(Self::Unknown)
    }
}

/// One record of the operation history.
///
/// Every field is optional on the wire; absent enums decode to their
/// `Unknown` variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Operation {
    /// Operation identifier.
    pub operation_id: Option<String>,
    /// Processing status.
    pub status: OperationStatus,
    /// When the operation happened.
    pub datetime: Option<DateTime<FixedOffset>>,
    /// Human-readable description.
    pub title: Option<String>,
    /// Payment pattern used, if any.
    pub pattern_id: Option<String>,
    /// Money flow direction.
    pub direction: Direction,
    /// Operation amount.
    pub amount: Option<MoneyAmount>,
    /// Caller-assigned label.
    pub label: Option<String>,
    /// Record kind.
    pub operation_type: OperationType,
}

impl Operation {
    /// Whether money came into the account.
    #[must_use]
    pub fn is_incoming(&self) -> bool {
        self.direction == Direction::Incoming
    }
}
