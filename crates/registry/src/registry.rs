//! In-memory binding registry keyed by named-database markers.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use namedb_core::{NamedDatabase, NamedDatabaseMarker};

use crate::config::{DatabaseConfig, RegistryConfig};
use crate::error::{RegistryError, RegistryResult};

/// Explicit mapping from database names to caller-supplied resources.
///
/// Two keys with the same identifier address the same binding, no matter
/// which implementer of [`NamedDatabase`] produced them. The registry never
/// opens or owns connections; `T` is whatever the caller binds.
///
/// - No IO / no async
/// - Coarse single lock (bind/resolve are not hot paths)
/// - Double-binding a name is an error, never a silent overwrite
#[derive(Debug)]
pub struct BindingRegistry<T> {
    bindings: Mutex<HashMap<NamedDatabaseMarker, T>>,
}

impl<T> BindingRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers of all bound databases, sorted.
    pub fn names(&self) -> RegistryResult<Vec<String>> {
        let bindings = self.lock()?;
        let mut names: Vec<String> = bindings.keys().map(|k| k.value().to_string()).collect();
        names.sort();
        Ok(names)
    }

    pub fn len(&self) -> RegistryResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> RegistryResult<std::sync::MutexGuard<'_, HashMap<NamedDatabaseMarker, T>>> {
        self.bindings.lock().map_err(|_| RegistryError::Poisoned)
    }
}

impl<T: Clone> BindingRegistry<T> {
    /// Bind `resource` under `key`.
    ///
    /// Fails with [`RegistryError::AlreadyBound`] when the name is taken.
    pub fn bind(&self, key: NamedDatabaseMarker, resource: T) -> RegistryResult<()> {
        let mut bindings = self.lock()?;
        if bindings.contains_key(&key) {
            return Err(RegistryError::AlreadyBound(key.value().to_string()));
        }
        debug!(database = key.value(), "bound database resource");
        bindings.insert(key, resource);
        Ok(())
    }

    /// Resolve the resource bound under `name`.
    pub fn resolve(&self, name: &str) -> RegistryResult<T> {
        let bindings = self.lock()?;
        let resource = bindings
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        debug!(database = name, "resolved database resource");
        Ok(resource)
    }

    /// Resolve by any implementer of the capability contract.
    pub fn resolve_key(&self, key: &(impl NamedDatabase + ?Sized)) -> RegistryResult<T> {
        self.resolve(key.value())
    }
}

impl<T> Default for BindingRegistry<T> {
    fn default() -> Self {
        Self {
            bindings: Mutex::new(HashMap::new()),
        }
    }
}

impl BindingRegistry<DatabaseConfig> {
    /// Build a registry holding every configured database.
    ///
    /// Names are unique by construction (map input), so binding cannot
    /// collide; the fallible signature is kept for lock consistency.
    pub fn from_config(config: RegistryConfig) -> RegistryResult<Self> {
        let registry = Self::new();
        for (name, db) in config.databases {
            registry.bind(NamedDatabaseMarker::new(name), db)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A key type the registry has never heard of; only the contract matters.
    struct ForeignKey(&'static str);

    impl NamedDatabase for ForeignKey {
        fn value(&self) -> &str {
            self.0
        }
    }

    fn test_config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            driver: None,
            username: None,
            password: None,
        }
    }

    #[test]
    fn bind_then_resolve_returns_resource() {
        let registry = BindingRegistry::new();
        registry
            .bind(NamedDatabaseMarker::new("orders"), 42u32)
            .unwrap();

        assert_eq!(registry.resolve("orders").unwrap(), 42);
        assert_eq!(
            registry
                .resolve_key(&NamedDatabaseMarker::new("orders"))
                .unwrap(),
            42
        );
    }

    #[test]
    fn double_bind_is_rejected() {
        let registry = BindingRegistry::new();
        registry
            .bind(NamedDatabaseMarker::new("default"), 1u8)
            .unwrap();

        let err = registry
            .bind(NamedDatabaseMarker::new("default"), 2u8)
            .unwrap_err();
        assert_eq!(err, RegistryError::AlreadyBound("default".to_string()));

        // The original binding is untouched.
        assert_eq!(registry.resolve("default").unwrap(), 1);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry: BindingRegistry<u8> = BindingRegistry::new();
        let err = registry.resolve("nowhere").unwrap_err();
        assert_eq!(err, RegistryError::NotFound("nowhere".to_string()));
    }

    #[test]
    fn foreign_contract_implementer_resolves() {
        let registry = BindingRegistry::new();
        registry
            .bind(NamedDatabaseMarker::new("reporting"), "ro-replica")
            .unwrap();

        let resolved = registry.resolve_key(&ForeignKey("reporting")).unwrap();
        assert_eq!(resolved, "ro-replica");
    }

    #[test]
    fn from_config_binds_every_database() {
        let mut config = RegistryConfig::default();
        config
            .databases
            .insert("default".to_string(), test_config("jdbc:h2:mem:play"));
        config
            .databases
            .insert("orders".to_string(), test_config("postgres://db/orders"));

        let registry = BindingRegistry::from_config(config).unwrap();
        assert_eq!(registry.len().unwrap(), 2);
        assert_eq!(
            registry.names().unwrap(),
            vec!["default".to_string(), "orders".to_string()]
        );
        assert_eq!(
            registry.resolve("orders").unwrap().url,
            "postgres://db/orders"
        );
    }

    #[test]
    fn empty_registry_reports_empty() {
        let registry: BindingRegistry<()> = BindingRegistry::default();
        assert!(registry.is_empty().unwrap());
        assert_eq!(registry.names().unwrap(), Vec::<String>::new());
    }
}
