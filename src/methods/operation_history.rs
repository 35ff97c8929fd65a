//! `operation-history`: paged list of past operations.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::{ApiRequest, Parameters, read_error};
use crate::{
    codec::{
        TypeAdapter,
        operation::OperationAdapter,
        scalar::{Object, as_object, get_array, get_string, put_opt_string},
    },
    error::{Error, Result},
    model::{ErrorCode, Operation},
    net::response::MethodResponse,
};

/// Smallest page size the server accepts.
pub const MIN_RECORDS: u32 = 1;
/// Largest page size the server accepts.
pub const MAX_RECORDS: u32 = 100;

/// Kind of operations to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterType {
    /// Deposits into the account.
    Deposition,
    /// Outgoing payments.
    Payment,
    /// Incoming transfers waiting to be accepted.
    IncomingTransfersUnaccepted,
}

impl FilterType {
    /// Wire token.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Deposition => "deposition",
            Self::Payment => "payment",
            Self::IncomingTransfersUnaccepted => "incoming-transfers-unaccepted",
        }
    }
}

/// Validated history query. Build with [`OperationHistoryRequest::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationHistoryRequest {
    types: BTreeSet<FilterType>,
    label: Option<String>,
    from: Option<DateTime<FixedOffset>>,
    till: Option<DateTime<FixedOffset>>,
    start_record: Option<String>,
    records: Option<u32>,
    details: Option<bool>,
}

impl OperationHistoryRequest {
    /// Starts a new query with no filters.
    #[must_use]
    pub fn builder() -> OperationHistoryRequestBuilder {
        OperationHistoryRequestBuilder::default()
    }

    /// Requested operation kinds; empty means all.
    #[must_use]
    pub fn types(&self) -> &BTreeSet<FilterType> {
        &self.types
    }

    /// Page size after clamping.
    #[must_use]
    pub fn records(&self) -> Option<u32> {
        self.records
    }

    /// Paging token from a previous response.
    #[must_use]
    pub fn start_record(&self) -> Option<&str> {
        self.start_record.as_deref()
    }
}

impl ApiRequest for OperationHistoryRequest {
    type Response = OperationHistory;

    fn method_path(&self) -> &'static str {
        "operation-history"
    }

    fn parameters(&self) -> Parameters {
        let types = self.types.iter().map(|t| t.code()).collect::<Vec<_>>().join(" ");
        Parameters::new()
            .with("type", types)
            .with("label", self.label.as_ref())
            .with("from", self.from)
            .with("till", self.till)
            .with("start_record", self.start_record.as_ref())
            .with("records", self.records)
            .with("details", self.details)
    }
}

/// Collects history query settings; validated once by [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct OperationHistoryRequestBuilder {
    types: BTreeSet<FilterType>,
    label: Option<String>,
    from: Option<DateTime<FixedOffset>>,
    till: Option<DateTime<FixedOffset>>,
    start_record: Option<String>,
    records: Option<i64>,
    details: Option<bool>,
}

impl OperationHistoryRequestBuilder {
    /// Adds an operation kind to the filter.
    #[must_use]
    pub fn filter_type(mut self, filter: FilterType) -> Self {
        self.types.insert(filter);
        self
    }

    /// Adds several operation kinds to the filter.
    #[must_use]
    pub fn filter_types(mut self, filters: impl IntoIterator<Item = FilterType>) -> Self {
        self.types.extend(filters);
        self
    }

    /// Lists only operations with this label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Lists operations at or after `from`.
    #[must_use]
    pub fn from(mut self, from: DateTime<FixedOffset>) -> Self {
        self.from = Some(from);
        self
    }

    /// Lists operations before `till`.
    #[must_use]
    pub fn till(mut self, till: DateTime<FixedOffset>) -> Self {
        self.till = Some(till);
        self
    }

    /// Continues from the `next_record` token of a previous page.
    #[must_use]
    pub fn start_record(mut self, start_record: impl Into<String>) -> Self {
        self.start_record = Some(start_record.into());
        self
    }

    /// Page size; clamped to `1..=100` on build.
    #[must_use]
    pub fn records(mut self, records: i64) -> Self {
        self.records = Some(records);
        self
    }

    /// Asks for detailed records.
    #[must_use]
    pub fn details(mut self, details: bool) -> Self {
        self.details = Some(details);
        self
    }

    /// Validates the settings and produces the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `from` is after `till`.
    ///
    /// # Examples
    ///
    /// ```
    /// use money_api_client::methods::operation_history::OperationHistoryRequest;
    ///
    /// let request = OperationHistoryRequest::builder().records(150).build()?;
    /// assert_eq!(request.records(), Some(100));
    /// # Ok::<(), money_api_client::error::Error>(())
    /// ```
    pub fn build(self) -> Result<OperationHistoryRequest> {
        if let (Some(from), Some(till)) = (self.from, self.till)
            && from > till
        {
            return Err(Error::validation(format!(
                "'from' ({from}) must not be after 'till' ({till})"
            )));
        }
        let records = self.records.map(|records| {
            // The clamp keeps the value inside u32 range.
            u32::try_from(records.clamp(i64::from(MIN_RECORDS), i64::from(MAX_RECORDS)))
                .unwrap_or(MAX_RECORDS)
        });
        Ok(OperationHistoryRequest {
            types: self.types,
            label: self.label,
            from: self.from,
            till: self.till,
            start_record: self.start_record,
            records,
            details: self.details,
        })
    }
}

/// Response of `operation-history`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationHistory {
    /// Server error, if the query was refused.
    pub error: Option<ErrorCode>,
    /// Token of the next page; absent on the last page.
    pub next_record: Option<String>,
    /// Operations in server order. Never absent, possibly empty.
    pub operations: Vec<Operation>,
}

impl OperationHistory {
    /// Whether another page can be requested.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_record.is_some()
    }
}

impl MethodResponse for OperationHistory {
    fn error(&self) -> Option<&ErrorCode> {
        self.error.as_ref()
    }
}

/// Adapter for [`OperationHistory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationHistoryAdapter;

impl TypeAdapter for OperationHistoryAdapter {
    type Entity = OperationHistory;

    fn type_name(&self) -> &'static str {
        "OperationHistory"
    }

    fn to_json(&self, entity: &OperationHistory) -> Result<Value> {
        let mut object = Object::new();
        put_opt_string(&mut object, "error", entity.error.as_ref().map(ErrorCode::code));
        put_opt_string(&mut object, "next_record", entity.next_record.as_deref());
        let operations = entity
            .operations
            .iter()
            .map(|operation| OperationAdapter.to_json(operation))
            .collect::<Result<_>>()?;
        object.insert("operations".to_owned(), Value::Array(operations));
        Ok(Value::Object(object))
    }

    fn from_json(&self, value: &Value) -> Result<OperationHistory> {
        let object = as_object(value, self.type_name())?;
        Ok(OperationHistory {
            error: read_error(object)?,
            next_record: get_string(object, "next_record")?,
            operations: get_array(object, "operations")?
                .iter()
                .map(|operation| OperationAdapter.from_json(operation))
                .collect::<Result<_>>()?,
        })
    }
}
