//! The named-database capability contract.
//!
//! Anything usable as a named-database key implements [`NamedDatabase`].
//! Implementers are interchangeable: equality, hashing, and the canonical
//! display form depend only on the identifier, never on the concrete type.

/// Fully-qualified name of the contract, used in the canonical display form.
pub const CONTRACT_NAME: &str = "namedb_core::NamedDatabase";

/// Capability contract for named-database keys.
///
/// A key exposes a single identifier. Two keys with the same identifier
/// address the same database binding regardless of which implementer
/// produced them, so frameworks may mix explicitly constructed keys with
/// keys derived elsewhere (e.g. from configuration scanning).
pub trait NamedDatabase {
    /// The database identifier this key names.
    fn value(&self) -> &str;

    /// Hash of this key under the annotation convention:
    /// `127 * h("value") XOR h(identifier)`.
    ///
    /// Every implementer inherits this default, so keys with equal
    /// identifiers hash identically across implementations. Required for
    /// interchangeable use as lookup keys.
    fn binding_hash(&self) -> i32 {
        127i32.wrapping_mul(java_string_hash("value")) ^ java_string_hash(self.value())
    }
}

/// 31-multiplier string hash over UTF-16 code units.
///
/// The annotation hash convention is defined against this exact function;
/// changing it would break agreement with independently produced keys.
pub fn java_string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Canonical display form of a key: `@<contract>(value=<identifier>)`.
///
/// Cosmetic only (debugging, logging); plays no part in equality or hashing.
pub fn canonical_string(db: &(impl NamedDatabase + ?Sized)) -> String {
    format!("@{CONTRACT_NAME}(value={})", db.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_hash_matches_known_vector() {
        // "value".hashCode() in the reference convention.
        assert_eq!(java_string_hash("value"), 111_972_721);
    }

    #[test]
    fn string_hash_of_empty_string_is_zero() {
        assert_eq!(java_string_hash(""), 0);
    }

    #[test]
    fn string_hash_wraps_instead_of_overflowing() {
        // Long inputs exceed i32 range many times over; must not panic.
        let long = "x".repeat(10_000);
        let _ = java_string_hash(&long);
    }
}
