//! Error Presenter
//!
//! Turns error values into user-facing alerts and presents them one at a
//! time.
//!
//! # Features
//!
//! - **Capability-based errors**: errors opt into keys, their own strings or
//!   a wrapped cause through [`Presentable`]
//! - **Layered resolution**: delegate override, error-supplied strings,
//!   specific lookup key, generic lookup key, built-in default
//! - **Pluggable lookups**: any [`LookupService`](localization::LookupService);
//!   [`StringTables`] loads TOML tables from disk
//! - **Single presentation**: a manager shows at most one alert and drops
//!   errors that arrive meanwhile
//! - **UI thread forwarding**: presentation always runs on one thread, and
//!   callers elsewhere block until it has happened
//!
//! # Architecture
//!
//! - [`types`]: capability traits and alert content
//! - [`localization`]: key derivation, resolver, string tables
//! - [`manager`]: resolution chain, delegate hooks, presentation latch
//! - [`surface`]: where alerts are shown
//! - [`dispatch`]: the UI thread
//! - [`error`]: crate errors and underlying-error chains
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use error_presenter::{ConsoleSurface, ErrorManager};
//!
//! # fn main() -> error_presenter::Result<()> {
//! let manager = ErrorManager::builder()
//!     .with_surface(Arc::new(ConsoleSurface::stdout()))
//!     .build()?;
//!
//! manager.present(Arc::new(std::io::Error::other("disk unplugged")));
//! assert!(!manager.is_showing_error());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod localization;
pub mod manager;
pub mod surface;
pub mod types;

pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use localization::{LookupScope, StringTables};
pub use manager::{DismissHandle, ErrorDelegate, ErrorManager, ErrorManagerBuilder};
pub use surface::{ConsoleSurface, PresentationSurface, SurfaceLocator};
pub use types::{AlertContent, Described, Keyed, Presentable, Underlying};
