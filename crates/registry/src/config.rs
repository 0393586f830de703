//! Declarative configuration for named databases.
//!
//! Shape only: deserializing a config never opens a connection. The map key
//! is the database name, mirroring the classic `db.<name>` layout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use namedb_core::NamedDatabaseMarker;

/// Connection settings for one named database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL, passed through verbatim.
    pub url: String,
    /// Driver identifier, when the pool cannot infer it from the URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// The set of configured databases, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Named database declarations.
    #[serde(default)]
    pub databases: BTreeMap<String, DatabaseConfig>,
    /// Name of the database to treat as the default, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl RegistryConfig {
    /// Marker for the configured default database, if one is declared.
    ///
    /// Declaring a default that has no matching entry in `databases` is not
    /// rejected here; it surfaces as `NotFound` at resolution time.
    pub fn default_marker(&self) -> Option<NamedDatabaseMarker> {
        self.default.as_deref().map(NamedDatabaseMarker::new)
    }
}
