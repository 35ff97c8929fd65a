//! Response status shared by all method responses.

use std::fmt;

/// Outcome of an API call as reported in the response `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Call succeeded.
    Success,
    /// Call was refused; see the response error code.
    Refused,
    /// Processing is not finished; repeat the call later.
    InProgress,
    /// The card issuer requires 3-D Secure authentication.
    ExtAuthRequired,
    /// The transfer is held until the payee accepts it.
    HoldForPickup,
    /// Absent or unrecognised status.
    #[default]
    Unknown,
}

impl Status {
    const KNOWN: [Self; 5] = [
        Self::Success,
        Self::Refused,
        Self::InProgress,
        Self::ExtAuthRequired,
        Self::HoldForPickup,
    ];

    /// Wire code of this status.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Refused => "refused",
            Self::InProgress => "in_progress",
            Self::ExtAuthRequired => "ext_auth_required",
            Self::HoldForPickup => "hold_for_pickup",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a wire code; anything unrecognised is [`Status::Unknown`].
    #[must_use]
    pub fn parse(code: Option<&str>) -> Self {
        code.and_then(|code| Self::KNOWN.into_iter().find(|s| s.code() == code))
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
