//! `namedb-registry` — explicit resolution of named-database bindings.
//!
//! Where an annotation-driven framework would scan for qualifiers, this
//! crate resolves through an ordinary in-memory map keyed by
//! [`namedb_core::NamedDatabaseMarker`].

pub mod config;
pub mod error;
pub mod registry;

pub use config::{DatabaseConfig, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use registry::BindingRegistry;
