//! `instance-id`: registers an application instance.

use serde_json::Value;

use super::{ApiRequest, Parameters, read_error, read_status, require_non_empty, write_outcome};
use crate::{
    codec::{
        TypeAdapter,
        scalar::{Object, as_object, get_string, put_opt_string},
    },
    error::Result,
    model::{ErrorCode, Status},
    net::response::MethodResponse,
};

/// Request for a new instance id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceIdRequest {
    client_id: String,
}

impl InstanceIdRequest {
    /// Creates the request for the application `client_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::error::Error::Validation) if `client_id` is empty.
    pub fn new(client_id: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        require_non_empty(&client_id, "client_id")?;
        Ok(Self { client_id })
    }

    /// Application client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl ApiRequest for InstanceIdRequest {
    type Response = InstanceId;

    fn method_path(&self) -> &'static str {
        "instance-id"
    }

    fn parameters(&self) -> Parameters {
        Parameters::new().with("client_id", &self.client_id)
    }
}

/// Response of `instance-id`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstanceId {
    /// Call outcome.
    pub status: Status,
    /// Server error, if refused.
    pub error: Option<ErrorCode>,
    /// Issued instance id.
    pub instance_id: Option<String>,
}

impl MethodResponse for InstanceId {
    fn status(&self) -> Option<Status> {
        Some(self.status)
    }

    fn error(&self) -> Option<&ErrorCode> {
        self.error.as_ref()
    }
}

/// Adapter for [`InstanceId`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InstanceIdAdapter;

impl TypeAdapter for InstanceIdAdapter {
    type Entity = InstanceId;

    fn type_name(&self) -> &'static str {
        "InstanceId"
    }

    fn to_json(&self, entity: &InstanceId) -> Result<Value> {
        let mut object = Object::new();
        write_outcome(&mut object, entity.status, entity.error.as_ref());
        put_opt_string(&mut object, "instance_id", entity.instance_id.as_deref());
        Ok(Value::Object(object))
    }

    fn from_json(&self, value: &Value) -> Result<InstanceId> {
        let object = as_object(value, self.type_name())?;
        Ok(InstanceId {
            status: read_status(object)?,
            error: read_error(object)?,
            instance_id: get_string(object, "instance_id")?,
        })
    }
}
