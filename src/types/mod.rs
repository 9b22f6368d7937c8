//! Core data types
//!
//! Capability traits an error may implement, the field kinds the pipeline
//! resolves, and the resolved alert content handed to a surface.

pub mod alert;
pub mod capability;

pub use alert::{AlertContent, FieldKind};
pub use capability::{Described, Keyed, Presentable, Underlying, short_type_name};
