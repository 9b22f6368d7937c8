//! Localization
//!
//! Lookup key derivation, the resolver that turns a key into a string
//! through an injected lookup service, and an in-memory string table
//! implementation of that service.

pub mod keys;
pub mod resolver;
pub mod tables;

pub use keys::{derive_key, error_identity, field_keys, generic_key};
pub use resolver::{LocalizationResolver, LookupScope, LookupService};
pub use tables::{DEFAULT_BUNDLE, DEFAULT_TABLE, StringTables};
