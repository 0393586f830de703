//! The explicit named-database marker value object.

use core::hash::{Hash, Hasher};
use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::contract::{NamedDatabase, canonical_string};

/// Immutable key naming a database binding.
///
/// Defined entirely by its identifier: two markers with equal identifiers
/// are equal, and a marker is equal to **any** other [`NamedDatabase`]
/// implementer with the same identifier. The identifier is stored verbatim
/// at construction and never validated; the empty string is an acceptable,
/// fully functional key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedDatabaseMarker {
    value: String,
}

impl NamedDatabaseMarker {
    /// Create a marker for the database named `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Consume the marker, returning the identifier.
    pub fn into_value(self) -> String {
        self.value
    }
}

impl NamedDatabase for NamedDatabaseMarker {
    fn value(&self) -> &str {
        &self.value
    }
}

/// Cross-implementation equality: a marker equals any contract implementer
/// carrying the same identifier. Both sides reduce to `str` comparison, so
/// the relation is symmetric by construction.
impl<T: NamedDatabase + ?Sized> PartialEq<T> for NamedDatabaseMarker {
    fn eq(&self, other: &T) -> bool {
        self.value == other.value()
    }
}

impl Eq for NamedDatabaseMarker {}

/// Hashes the identifier only, keeping hash/equality consistency for map
/// keys and allowing `&str` lookups through [`Borrow`].
impl Hash for NamedDatabaseMarker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Borrow<str> for NamedDatabaseMarker {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl core::fmt::Display for NamedDatabaseMarker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&canonical_string(self))
    }
}

impl From<String> for NamedDatabaseMarker {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl From<&str> for NamedDatabaseMarker {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
