//! Process-wide table of type adapters.

use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    fmt,
    sync::LazyLock,
};

use serde_json::Value;

use super::{
    TypeAdapter, balance::BalanceDetailsAdapter, card::CardAdapter, card::MoneySourceAdapter,
    fee::FeeAdapter, operation::OperationAdapter,
};
use crate::{
    error::{Error, Result},
    methods::{
        account_info::AccountInfoAdapter, instance_id::InstanceIdAdapter,
        operation_history::OperationHistoryAdapter,
        process_external_payment::ProcessExternalPaymentAdapter,
        request_external_payment::RequestExternalPaymentAdapter,
    },
};

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::with_defaults);

/// Returns the process-wide registry holding every adapter this crate ships.
///
/// The registry is built on first use and never mutated afterwards.
#[must_use]
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Mapping from entity type to its adapter.
///
/// Lookups are keyed by [`TypeId`]; each adapter is also indexed by its
/// stable [`TypeAdapter::type_name`].
pub struct Registry {
    adapters: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    names: HashMap<&'static str, TypeId>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { adapters: HashMap::new(), names: HashMap::new() }
    }

    /// Creates a registry with all entity and response adapters registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(&BalanceDetailsAdapter);
        registry.register(&CardAdapter);
        registry.register(&MoneySourceAdapter);
        registry.register(&FeeAdapter);
        registry.register(&OperationAdapter);
        registry.register(&InstanceIdAdapter);
        registry.register(&AccountInfoAdapter);
        registry.register(&OperationHistoryAdapter);
        registry.register(&RequestExternalPaymentAdapter);
        registry.register(&ProcessExternalPaymentAdapter);
        registry
    }

    /// Registers `adapter` for its entity type, replacing any previous one.
    pub fn register<A: TypeAdapter + 'static>(&mut self, adapter: &'static A) {
        let id = TypeId::of::<A::Entity>();
        let erased: &'static dyn TypeAdapter<Entity = A::Entity> = adapter;
        self.adapters.insert(id, Box::new(erased));
        self.names.insert(adapter.type_name(), id);
    }

    /// Looks up the adapter for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unregistered`] if no adapter produces `T`.
    pub fn adapter<T: 'static>(&self) -> Result<&'static dyn TypeAdapter<Entity = T>> {
        self.adapters
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<&'static dyn TypeAdapter<Entity = T>>())
            .copied()
            .ok_or(Error::Unregistered(type_name::<T>()))
    }

    /// Encodes `entity` with its registered adapter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unregistered`] if `T` has no adapter, or the adapter's error.
    pub fn encode<T: 'static>(&self, entity: &T) -> Result<Value> {
        self.adapter::<T>()?.to_json(entity)
    }

    /// Decodes a `T` from `value` with its registered adapter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unregistered`] if `T` has no adapter, or
    /// [`Error::Decode`] if `value` does not have the expected shape.
    pub fn decode<T: 'static>(&self, value: &Value) -> Result<T> {
        self.adapter::<T>()?.from_json(value)
    }

    /// Whether an adapter is registered under the stable `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names.keys().collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("adapters", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{BalanceDetails, Fee};

    #[test]
    fn test_defaults_cover_entities_and_responses() {
        let registry = registry();
        assert_eq!(registry.len(), 10);
        let names =
            ["Fee", "MoneySource", "Card", "BalanceDetails", "Operation", "OperationHistory"];
        for name in names {
            assert!(registry.contains_name(name), "missing adapter {name}");
        }
    }

    #[test]
    fn test_unregistered_type() {
        let err = registry().decode::<String>(&json!("x")).unwrap_err();
        assert!(matches!(err, Error::Unregistered(name) if name.contains("String")));
    }

    #[test]
    fn test_empty_registry_knows_nothing() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.adapter::<Fee>().is_err());
    }

    #[test]
    fn test_register_then_decode() {
        let mut registry = Registry::new();
        registry.register(&BalanceDetailsAdapter);
        let balance: BalanceDetails =
            registry.decode(&json!({"total": "5", "available": "4"})).unwrap();
        assert_eq!(balance.total, rust_decimal::Decimal::new(5, 0));
    }

    #[test]
    fn test_concurrent_decodes_share_registry() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    registry()
                        .decode::<Fee>(&json!({"type": "std", "a": i}))
                        .map(|fee| fee.compute(rust_decimal::Decimal::ONE))
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().unwrap().is_some());
        }
    }

    #[test]
    fn test_debug_lists_names() {
        let debug = format!("{:?}", registry());
        assert!(debug.contains("Fee"));
    }
}
