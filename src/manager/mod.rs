//! # Error Manager
//!
//! [`ErrorManager`] turns an error into the title, message and button text
//! shown to the user, and presents it on a surface.
//!
//! ## Resolution
//!
//! Each field is resolved independently; the first tier that produces a
//! value wins:
//!
//! 1. The attached [`ErrorDelegate`], whose answer is final
//! 2. The error's [`Described`](crate::types::Described) strings (message only)
//! 3. The error-specific lookup key, e.g. `error-SyncError-localizedTitle`
//! 4. The generic lookup key, e.g. `error-localizedTitle`
//! 5. `"Whoops!"` for titles, `"OK"` for buttons, no message
//!
//! ## Presentation
//!
//! At most one error is on screen per manager. [`ErrorManager::present`]
//! runs on the manager's UI thread (calls from other threads block until the
//! surface has been asked to show the alert) and drops errors that arrive
//! while another one is still showing.
//!
//! ## Examples
//!
//! ```rust
//! use error_presenter::{ErrorManager, StringTables};
//! use error_presenter::localization::{DEFAULT_BUNDLE, DEFAULT_TABLE};
//!
//! # fn main() -> error_presenter::Result<()> {
//! let tables = StringTables::new().with_entry(
//!     DEFAULT_BUNDLE,
//!     DEFAULT_TABLE,
//!     "error-localizedTitle",
//!     "Something went wrong",
//! );
//! let manager = ErrorManager::builder().with_string_tables(tables).build()?;
//!
//! let error = std::io::Error::other("disk unplugged");
//! assert_eq!(manager.title_for(&error), "Something went wrong");
//! assert_eq!(manager.button_text_for(&error), "OK");
//! assert_eq!(manager.message_for(&error), None);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod delegate;
pub mod presentation;
pub mod resolution;

pub use builder::{ErrorManagerBuilder, ManagerConfig};
pub use delegate::ErrorDelegate;
pub use presentation::DismissHandle;
pub use resolution::{DEFAULT_BUTTON_TEXT, DEFAULT_TITLE, compose_message};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::dispatch::UiThread;
use crate::localization::LocalizationResolver;
use crate::surface::SurfaceLocator;

/// Resolves and presents errors; clones share the same state
#[derive(Clone)]
pub struct ErrorManager {
    inner: Arc<ManagerInner>,
}

pub(crate) struct ManagerInner {
    config: ManagerConfig,
    resolver: LocalizationResolver,
    /// Non-owning; the application controls the delegate's lifetime
    delegate: RwLock<Option<Weak<dyn ErrorDelegate>>>,
    locator: Option<Arc<dyn SurfaceLocator>>,
    ui: UiThread,
    /// Set while an alert is on screen; only changed on the UI thread
    showing_error: AtomicBool,
}

impl std::fmt::Debug for ErrorManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorManager")
            .field("config", &self.inner.config)
            .field("resolver", &self.inner.resolver)
            .field("has_delegate", &self.delegate().is_some())
            .field("has_surface_locator", &self.inner.locator.is_some())
            .field("ui", &self.inner.ui)
            .field("showing_error", &self.is_showing_error())
            .finish()
    }
}

impl ErrorManager {
    /// Start building a manager
    pub fn builder() -> ErrorManagerBuilder {
        ErrorManagerBuilder::new()
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.inner.config
    }

    /// Attach a delegate without taking ownership of it.
    ///
    /// Once the caller drops its last `Arc`, the manager behaves as if no
    /// delegate were attached.
    pub fn set_delegate<D: ErrorDelegate + 'static>(&self, delegate: &Arc<D>) {
        let weak: Weak<D> = Arc::downgrade(delegate);
        let weak: Weak<dyn ErrorDelegate> = weak;
        *self.inner.delegate.write() = Some(weak);
    }

    pub fn clear_delegate(&self) {
        *self.inner.delegate.write() = None;
    }

    /// The attached delegate, if it is still alive
    pub fn delegate(&self) -> Option<Arc<dyn ErrorDelegate>> {
        self.inner.delegate.read().as_ref().and_then(Weak::upgrade)
    }

    pub fn ui_thread(&self) -> &UiThread {
        &self.inner.ui
    }

    /// Whether an alert is currently on screen
    pub fn is_showing_error(&self) -> bool {
        self.inner.showing_error.load(Ordering::Acquire)
    }

    pub(crate) fn downgrade(&self) -> Weak<ManagerInner> {
        Arc::downgrade(&self.inner)
    }
}

impl ManagerInner {
    pub(crate) fn ui(&self) -> &UiThread {
        &self.ui
    }

    /// Enter the presenting state; false when already presenting
    pub(crate) fn try_latch(&self) -> bool {
        self.showing_error
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn release_latch(&self) {
        self.showing_error.store(false, Ordering::Release);
    }
}
