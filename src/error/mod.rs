//! Error handling
//!
//! The crate error type, formatting helpers, and the underlying-error chain
//! utilities used to find the root cause of a wrapped error.

pub mod formatting;
pub mod types;
pub mod underlying;

pub use formatting::{format_error, format_error_for_logging};
pub use types::{Error, Result};
pub use underlying::{
    UnderlyingChain, recursive_underlying_error, recursive_underlying_error_or_self,
    underlying_chain,
};
