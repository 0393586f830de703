//! Registry error model.

use thiserror::Error;

/// Result type used across the registry.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Binding/resolution failure.
///
/// Keys themselves are infallible values; errors only arise once bindings
/// are registered and looked up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No resource is bound for the requested database name.
    #[error("no database bound for '{0}'")]
    NotFound(String),

    /// A resource is already bound for this database name.
    #[error("database '{0}' is already bound")]
    AlreadyBound(String),

    /// Internal lock poisoning.
    #[error("registry lock poisoned")]
    Poisoned,
}
