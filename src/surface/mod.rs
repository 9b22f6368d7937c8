//! Presentation surfaces
//!
//! A surface is whatever shows an alert to the user. The error manager finds
//! one through a [`SurfaceLocator`] each time it presents, and quietly does
//! nothing when there is none.

pub mod console;
pub mod hierarchy;

pub use console::ConsoleSurface;
pub use hierarchy::{SurfaceNode, SurfaceRoot};

use std::sync::Arc;

use crate::manager::DismissHandle;
use crate::types::AlertContent;

/// Something that can show an alert
pub trait PresentationSurface: Send + Sync {
    /// Show `alert`; call `on_dismiss.dismiss()` once the user dismisses it.
    ///
    /// Called on the UI thread. Must not fail; a surface that cannot show
    /// anything should dismiss straight away.
    fn show(&self, alert: AlertContent, on_dismiss: DismissHandle);
}

/// Finds the surface to present on right now
pub trait SurfaceLocator: Send + Sync {
    fn locate(&self) -> Option<Arc<dyn PresentationSurface>>;
}
