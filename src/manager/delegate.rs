//! Error manager delegate
//!
//! An application attaches an [`ErrorDelegate`] to intercept presentation
//! and override resolved strings. Every method has a default, and the
//! defaults for the string methods hand control back to the manager's own
//! resolution chain, so a delegate only implements what it wants to change.
//!
//! The manager holds its delegate weakly; the application owns it.

use crate::manager::ErrorManager;
use crate::types::Presentable;

/// Hooks and overrides consulted by [`ErrorManager`]
pub trait ErrorDelegate: Send + Sync {
    /// Called before an error is presented; returning `false` suppresses it
    fn should_present(&self, _manager: &ErrorManager, _error: &dyn Presentable) -> bool {
        true
    }

    /// Called after a surface accepted an error for presentation
    fn error_presented(&self, _manager: &ErrorManager, _error: &dyn Presentable) {}

    /// Override the localized string for a lookup key
    fn localized_string(&self, manager: &ErrorManager, key: &str) -> Option<String> {
        manager.default_localized_string(key)
    }

    /// Override the title for an error
    fn title_for(&self, manager: &ErrorManager, error: &dyn Presentable) -> String {
        manager.default_title_for(error)
    }

    /// Override the message for an error; `None` means no message
    fn message_for(&self, manager: &ErrorManager, error: &dyn Presentable) -> Option<String> {
        manager.default_message_for(error)
    }

    /// Override the button text for an error
    fn button_text_for(&self, manager: &ErrorManager, error: &dyn Presentable) -> String {
        manager.default_button_text_for(error)
    }
}
