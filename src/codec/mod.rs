//! Conversion between wire JSON and typed entities.
//!
//! Every entity that crosses the wire has a [`TypeAdapter`]. Adapters are
//! registered once in the process-wide [`Registry`] and looked up by the Rust
//! type they produce:
//!
//! ```
//! use money_api_client::{codec::registry, model::Fee};
//! use serde_json::json;
//!
//! let fee: Fee = registry().decode(&json!({"type": "custom"}))?;
//! assert_eq!(fee, Fee::Custom);
//! assert_eq!(registry().encode(&fee)?, json!({"type": "custom"}));
//! # Ok::<(), money_api_client::error::Error>(())
//! ```
//!
//! Sum types (fees, money sources) are decoded by reading the `type`
//! discriminator first and dispatching to the matching variant.

pub mod balance;
pub mod card;
pub mod fee;
pub mod operation;
pub mod registry;
pub mod scalar;

use serde_json::Value;

pub use self::registry::{Registry, registry};
use crate::error::Result;

/// Codec between one entity type and its JSON representation.
///
/// Implementations hold no state and are shared by concurrent decodes.
pub trait TypeAdapter: Send + Sync {
    /// Entity produced and consumed by this adapter.
    type Entity: 'static;

    /// Stable identifier of the entity type.
    fn type_name(&self) -> &'static str;

    /// Encodes `entity` into its wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity cannot be represented on the wire.
    fn to_json(&self, entity: &Self::Entity) -> Result<Value>;

    /// Decodes an entity from its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::error::Error::Decode) if `value` is
    /// structurally invalid for this type.
    fn from_json(&self, value: &Value) -> Result<Self::Entity>;
}
