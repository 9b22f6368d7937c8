//! Lookup key derivation
//!
//! Keys have the form `error-<identity>-<field>`, where the identity is the
//! error's [`Keyed`](crate::types::Keyed) key or, failing that, its short
//! type name. Generic keys drop the identity (`error-<field>`) and hold one
//! default string per field for every error type.

use crate::types::{FieldKind, Presentable};

const KEY_PREFIX: &str = "error-";

/// Identity of an error within lookup keys
pub fn error_identity(error: &dyn Presentable) -> String {
    match error.as_keyed() {
        Some(keyed) => keyed.error_key(),
        None => error.type_identity().to_string(),
    }
}

/// Lookup key for one field of one error
pub fn derive_key(error: &dyn Presentable, kind: FieldKind) -> String {
    format!("{}{}-{}", KEY_PREFIX, error_identity(error), kind.suffix())
}

/// Lookup key for a field, shared by every error
pub fn generic_key(kind: FieldKind) -> String {
    format!("{}{}", KEY_PREFIX, kind.suffix())
}

/// Specific lookup key for every field of `error`
pub fn field_keys(error: &dyn Presentable) -> Vec<(FieldKind, String)> {
    FieldKind::ALL
        .iter()
        .map(|kind| (*kind, derive_key(error, *kind)))
        .collect()
}
