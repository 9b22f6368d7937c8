//! Error capabilities
//!
//! An error taking part in presentation implements [`Presentable`]. Every
//! other behavior is an independent, optional capability the pipeline asks
//! for at resolution time through the `as_*` accessors:
//!
//! - [`Keyed`]: a stable key used to build lookup keys
//! - [`Described`]: user-facing strings supplied directly by the error
//! - [`Underlying`]: a wrapped error, forming a cause chain
//!
//! # Examples
//!
//! ```rust
//! use error_presenter::types::{Described, Keyed, Presentable};
//!
//! #[derive(Debug)]
//! enum SyncError {
//!     Offline,
//! }
//!
//! impl std::fmt::Display for SyncError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "sync failed")
//!     }
//! }
//!
//! impl std::error::Error for SyncError {}
//!
//! impl Keyed for SyncError {
//!     fn error_key(&self) -> String {
//!         "SyncError.offline".to_string()
//!     }
//! }
//!
//! impl Presentable for SyncError {
//!     fn as_keyed(&self) -> Option<&dyn Keyed> {
//!         Some(self)
//!     }
//! }
//!
//! let error = SyncError::Offline;
//! assert_eq!(error.as_keyed().unwrap().error_key(), "SyncError.offline");
//! assert!(error.as_described().is_none());
//! ```

/// An error value that can be handed to the error manager.
///
/// All methods have defaults, so `impl Presentable for MyError {}` is enough
/// for an error that exposes no capabilities.
pub trait Presentable: std::error::Error + Send + Sync + 'static {
    /// Fully qualified name of the concrete type.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Structural identity used when the error is not [`Keyed`].
    fn type_identity(&self) -> &'static str {
        short_type_name(self.type_name())
    }

    fn as_keyed(&self) -> Option<&dyn Keyed> {
        None
    }

    fn as_described(&self) -> Option<&dyn Described> {
        None
    }

    fn as_underlying(&self) -> Option<&dyn Underlying> {
        None
    }
}

/// Supplies a stable key that replaces the type identity in lookup keys.
pub trait Keyed {
    fn error_key(&self) -> String;
}

/// Supplies user-facing message parts directly, bypassing table lookup.
///
/// Titles never come from this capability.
pub trait Described {
    fn localized_description(&self) -> Option<String> {
        None
    }

    fn failure_reason(&self) -> Option<String> {
        None
    }

    fn recovery_suggestion(&self) -> Option<String> {
        None
    }
}

/// Exposes the error this error wraps, if any.
pub trait Underlying {
    fn underlying_error(&self) -> Option<&dyn Presentable>;
}

/// Strip module paths and generic arguments from a type name.
///
/// `my_app::sync::SyncError` becomes `SyncError` and
/// `my_app::Wrapper<std::io::Error>` becomes `Wrapper`.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl Presentable for std::io::Error {}
