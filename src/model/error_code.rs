//! Server-reported error codes.

use std::fmt;

/// Error code carried in a response's `error` field.
///
/// The set is closed for the codes this client reacts to; anything else is kept
/// verbatim in [`ErrorCode::Unknown`] so it survives a re-encode. An
/// [`UnknownCode`] can only be obtained from [`ErrorCode::parse`], so it never
/// holds a code that has its own variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Required request parameters are missing or malformed.
    IllegalParams,
    /// `client_id` is unknown or blocked.
    IllegalParamClientId,
    /// `instance_id` is unknown.
    IllegalParamInstanceId,
    /// Operation-history `type` filter is invalid.
    IllegalParamType,
    /// `start_record` is invalid.
    IllegalParamStartRecord,
    /// `records` is invalid.
    IllegalParamRecords,
    /// `label` is invalid.
    IllegalParamLabel,
    /// `from` is invalid.
    IllegalParamFrom,
    /// `till` is invalid.
    IllegalParamTill,
    /// Payee identifier is invalid.
    IllegalParamTo,
    /// Amount is invalid.
    IllegalParamAmount,
    /// Security code is invalid.
    IllegalParamCsc,
    /// Success redirect URI is invalid.
    IllegalParamExtAuthSuccessUri,
    /// Failure redirect URI is invalid.
    IllegalParamExtAuthFailUri,
    /// Money source token is invalid or revoked.
    IllegalParamMoneySourceToken,
    /// The request is not well-formed.
    InvalidRequest,
    /// The access token is invalid or expired.
    InvalidToken,
    /// The token lacks the permission for this call.
    InsufficientScope,
    /// The payment request id is unknown or expired.
    ContractNotFound,
    /// Not enough money in the chosen source.
    NotEnoughFunds,
    /// The payment was refused.
    PaymentRefused,
    /// The operation was rejected, e.g. by a card issuer.
    AuthorizationReject,
    /// The account is blocked.
    AccountBlocked,
    /// Payment limit exceeded.
    LimitExceeded,
    /// The chosen money source cannot be used for this payment.
    MoneySourceNotAvailable,
    /// Payee account does not exist.
    PayeeNotFound,
    /// The phone number's operator is not served.
    PhoneUnknown,
    /// Temporary server failure.
    TechnicalError,
    /// Any other code, kept as received.
    Unknown(UnknownCode),
}

/// A wire error code with no dedicated [`ErrorCode`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownCode(String);

impl UnknownCode {
    /// The code as received.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ErrorCode {
    const KNOWN: [Self; 28] = [
        Self::IllegalParams,
        Self::IllegalParamClientId,
        Self::IllegalParamInstanceId,
        Self::IllegalParamType,
        Self::IllegalParamStartRecord,
        Self::IllegalParamRecords,
        Self::IllegalParamLabel,
        Self::IllegalParamFrom,
        Self::IllegalParamTill,
        Self::IllegalParamTo,
        Self::IllegalParamAmount,
        Self::IllegalParamCsc,
        Self::IllegalParamExtAuthSuccessUri,
        Self::IllegalParamExtAuthFailUri,
        Self::IllegalParamMoneySourceToken,
        Self::InvalidRequest,
        Self::InvalidToken,
        Self::InsufficientScope,
        Self::ContractNotFound,
        Self::NotEnoughFunds,
        Self::PaymentRefused,
        Self::AuthorizationReject,
        Self::AccountBlocked,
        Self::LimitExceeded,
        Self::MoneySourceNotAvailable,
        Self::PayeeNotFound,
        Self::PhoneUnknown,
        Self::TechnicalError,
    ];

    /// Wire code of this error.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::IllegalParams => "illegal_params",
            Self::IllegalParamClientId => "illegal_param_client_id",
            Self::IllegalParamInstanceId => "illegal_param_instance_id",
            Self::IllegalParamType => "illegal_param_type",
            Self::IllegalParamStartRecord => "illegal_param_start_record",
            Self::IllegalParamRecords => "illegal_param_records",
            Self::IllegalParamLabel => "illegal_param_label",
            Self::IllegalParamFrom => "illegal_param_from",
            Self::IllegalParamTill => "illegal_param_till",
            Self::IllegalParamTo => "illegal_param_to",
            Self::IllegalParamAmount => "illegal_param_amount",
            Self::IllegalParamCsc => "illegal_param_csc",
            Self::IllegalParamExtAuthSuccessUri => "illegal_param_ext_auth_success_uri",
            Self::IllegalParamExtAuthFailUri => "illegal_param_ext_auth_fail_uri",
            Self::IllegalParamMoneySourceToken => "illegal_param_money_source_token",
            Self::InvalidRequest => "invalid_request",
            Self::InvalidToken => "invalid_token",
            Self::InsufficientScope => "insufficient_scope",
            Self::ContractNotFound => "contract_not_found",
            Self::NotEnoughFunds => "not_enough_funds",
            Self::PaymentRefused => "payment_refused",
            Self::AuthorizationReject => "authorization_reject",
            Self::AccountBlocked => "account_blocked",
            Self::LimitExceeded => "limit_exceeded",
            Self::MoneySourceNotAvailable => "money_source_not_available",
            Self::PayeeNotFound => "payee_not_found",
            Self::PhoneUnknown => "phone_unknown",
            Self::TechnicalError => "technical_error",
            Self::Unknown(code) => code.as_str(),
        }
    }

    /// Parses a wire code. Never fails: unknown codes are preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use money_api_client::model::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::parse("not_enough_funds"), ErrorCode::NotEnoughFunds);
    ///
    /// let unknown = ErrorCode::parse("brand_new");
    /// assert!(matches!(&unknown, ErrorCode::Unknown(code) if code.as_str() == "brand_new"));
    /// ```
    #[must_use]
    pub fn parse(code: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.code() == code)
            .unwrap_or_else(|| Self::Unknown(UnknownCode(code.to_owned())))
    }

    /// Whether repeating the same call later may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TechnicalError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
