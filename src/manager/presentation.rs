//! Presentation state machine
//!
//! A manager is either idle or presenting. Moving to presenting requires the
//! delegate's approval and an idle latch; a request that finds the latch set
//! is dropped, not queued. The surface gets a [`DismissHandle`] and the latch
//! stays set until that handle is used. A surface that panics in `show`
//! leaves the manager idle.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Weak};

use tracing::{debug, info, warn};

use super::{ErrorManager, ManagerInner};
use crate::error::{format_error, format_error_for_logging};
use crate::localization::error_identity;
use crate::surface::PresentationSurface;
use crate::types::Presentable;

/// Result of one presentation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PresentOutcome {
    Presented,
    Declined,
    Busy,
    NoSurface,
    SurfacePanicked,
}

impl ErrorManager {
    /// Present `error` unless another error is already showing.
    ///
    /// Runs on the UI thread; from any other thread this blocks until the
    /// surface has been asked to show the alert. Nothing is reported back:
    /// [`ErrorDelegate::error_presented`](super::ErrorDelegate::error_presented)
    /// fires only when the error was actually shown.
    pub fn present(&self, error: Arc<dyn Presentable>) {
        let manager = self.clone();
        let result = self
            .inner
            .ui()
            .run_blocking(move || manager.present_on_ui_thread(error.as_ref()));

        match result {
            Ok(outcome) => debug!(?outcome, "Presentation request handled"),
            Err(e) => warn!(
                error = %format_error_for_logging(&e),
                "Dropping error presentation"
            ),
        }
    }

    /// Present each error in order.
    ///
    /// Without a dismissal in between, only the first one is shown.
    pub fn present_all<I>(&self, errors: I)
    where
        I: IntoIterator<Item = Arc<dyn Presentable>>,
    {
        for error in errors {
            self.present(error);
        }
    }

    fn present_on_ui_thread(&self, error: &dyn Presentable) -> PresentOutcome {
        let delegate = self.delegate();

        if let Some(delegate) = &delegate
            && !delegate.should_present(self, error)
        {
            debug!("Delegate declined to present {}", error_identity(error));
            return PresentOutcome::Declined;
        }

        if !self.inner.try_latch() {
            debug!(
                "Already showing an error, dropping {}",
                error_identity(error)
            );
            return PresentOutcome::Busy;
        }

        let Some(surface) = self.locate_surface() else {
            self.inner.release_latch();
            debug!(
                "No presentation surface available for {}",
                error_identity(error)
            );
            return PresentOutcome::NoSurface;
        };

        let alert = self.alert_for(error);
        info!(
            title = %alert.title,
            "Presenting {}",
            error_identity(error)
        );
        let handle = DismissHandle::new(self, error);
        if catch_unwind(AssertUnwindSafe(|| surface.show(alert, handle))).is_err() {
            self.inner.release_latch();
            warn!(
                "Presentation surface panicked while showing {}",
                error_identity(error)
            );
            return PresentOutcome::SurfacePanicked;
        }

        if let Some(delegate) = delegate {
            delegate.error_presented(self, error);
        }

        PresentOutcome::Presented
    }

    fn locate_surface(&self) -> Option<Arc<dyn PresentationSurface>> {
        self.inner.locator.as_ref()?.locate()
    }
}

/// Returns a manager to the idle state when its alert is dismissed.
///
/// Dropping the handle without calling [`dismiss`](Self::dismiss) leaves the
/// manager presenting.
pub struct DismissHandle {
    manager: Weak<ManagerInner>,
    error_identity: String,
}

impl std::fmt::Debug for DismissHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DismissHandle")
            .field("error_identity", &self.error_identity)
            .field("manager_alive", &(self.manager.strong_count() > 0))
            .finish()
    }
}

impl DismissHandle {
    fn new(manager: &ErrorManager, error: &dyn Presentable) -> Self {
        Self {
            manager: manager.downgrade(),
            error_identity: error_identity(error),
        }
    }

    /// Identity of the error whose alert this handle dismisses
    pub fn error_identity(&self) -> &str {
        &self.error_identity
    }

    /// Mark the alert as dismissed.
    ///
    /// The latch is cleared on the UI thread; from other threads the clear
    /// is queued behind work already submitted.
    pub fn dismiss(self) {
        let Some(inner) = self.manager.upgrade() else {
            return;
        };

        debug!("Dismissed {}", self.error_identity);
        if inner.ui().is_current() {
            inner.release_latch();
            return;
        }

        let weak = self.manager.clone();
        let posted = inner.ui().post(move || {
            if let Some(inner) = weak.upgrade() {
                inner.release_latch();
            }
        });
        if let Err(e) = posted {
            warn!("{}; releasing presentation latch directly", format_error(&e));
            inner.release_latch();
        }
    }
}
