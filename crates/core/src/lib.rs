//! `namedb-core` — named-database binding keys.
//!
//! This crate contains **pure value types** (no infrastructure concerns):
//! the [`NamedDatabase`] capability contract and its explicit, programmatically
//! constructible implementer, [`NamedDatabaseMarker`].

pub mod contract;
pub mod marker;

pub use contract::{CONTRACT_NAME, NamedDatabase, canonical_string, java_string_hash};
pub use marker::NamedDatabaseMarker;
