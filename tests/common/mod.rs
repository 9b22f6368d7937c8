//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use error_presenter::{
    AlertContent, Described, DismissHandle, ErrorDelegate, ErrorManager, Keyed, LookupScope,
    Presentable, PresentationSurface, StringTables, Underlying,
};
use parking_lot::Mutex;

/// Path of the fixture string tables
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("strings")
}

/// String tables loaded from the fixtures
pub fn fixture_tables() -> StringTables {
    StringTables::load_dir(fixtures_dir()).unwrap()
}

/// Manager over the fixture tables, optionally scoped to a table of the
/// default bundle
pub fn fixture_manager(table: Option<&str>) -> ErrorManager {
    let mut builder = ErrorManager::builder().with_string_tables(fixture_tables());
    if let Some(table) = table {
        builder = builder.with_lookup_scope(LookupScope::new("main").with_table(table));
    }
    builder.build().unwrap()
}

/// Keyed error with one case per test scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumError {
    FirstEnum,
    Echoed,
}

impl fmt::Display for EnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for EnumError {}

impl Keyed for EnumError {
    fn error_key(&self) -> String {
        let case = match self {
            EnumError::FirstEnum => "firstEnum",
            EnumError::Echoed => "echoed",
        };
        format!("EnumError.{}", case)
    }
}

impl Presentable for EnumError {
    fn as_keyed(&self) -> Option<&dyn Keyed> {
        Some(self)
    }
}

/// Error carrying its own message strings
#[derive(Debug, Clone, Default)]
pub struct TestDescribedError {
    pub description: Option<String>,
    pub failure_reason: Option<String>,
    pub recovery_suggestion: Option<String>,
}

impl TestDescribedError {
    pub fn new(description: &str, failure_reason: &str, recovery_suggestion: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            failure_reason: Some(failure_reason.to_string()),
            recovery_suggestion: Some(recovery_suggestion.to_string()),
        }
    }
}

impl fmt::Display for TestDescribedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "described error")
    }
}

impl std::error::Error for TestDescribedError {}

impl Described for TestDescribedError {
    fn localized_description(&self) -> Option<String> {
        self.description.clone()
    }

    fn failure_reason(&self) -> Option<String> {
        self.failure_reason.clone()
    }

    fn recovery_suggestion(&self) -> Option<String> {
        self.recovery_suggestion.clone()
    }
}

impl Presentable for TestDescribedError {
    fn as_described(&self) -> Option<&dyn Described> {
        Some(self)
    }
}

/// Error without any capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainError;

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plain error")
    }
}

impl std::error::Error for PlainError {}
impl Presentable for PlainError {}

/// Error optionally wrapping another one
#[derive(Debug)]
pub struct WrappingError {
    pub inner: Option<Box<dyn Presentable>>,
}

impl WrappingError {
    pub fn wrapping(inner: impl Presentable) -> Self {
        Self {
            inner: Some(Box::new(inner)),
        }
    }

    pub fn empty() -> Self {
        Self { inner: None }
    }
}

impl fmt::Display for WrappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wrapping error")
    }
}

impl std::error::Error for WrappingError {}

impl Underlying for WrappingError {
    fn underlying_error(&self) -> Option<&dyn Presentable> {
        self.inner.as_deref()
    }
}

impl Presentable for WrappingError {
    fn as_underlying(&self) -> Option<&dyn Underlying> {
        Some(self)
    }
}

/// Surface that records what it was asked to show
#[derive(Default)]
pub struct RecordingSurface {
    shown: Mutex<Vec<AlertContent>>,
    handles: Mutex<Vec<DismissHandle>>,
    threads: Mutex<Vec<Option<String>>>,
}

impl RecordingSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn shown(&self) -> Vec<AlertContent> {
        self.shown.lock().clone()
    }

    pub fn show_count(&self) -> usize {
        self.shown.lock().len()
    }

    /// Names of the threads `show` ran on
    pub fn threads(&self) -> Vec<Option<String>> {
        self.threads.lock().clone()
    }

    /// Dismiss the oldest open alert; false when none is open
    pub fn dismiss_next(&self) -> bool {
        let handle = {
            let mut handles = self.handles.lock();
            if handles.is_empty() {
                return false;
            }
            handles.remove(0)
        };
        handle.dismiss();
        true
    }

    /// Drop the oldest open alert's handle without dismissing
    pub fn forget_next(&self) -> bool {
        let mut handles = self.handles.lock();
        if handles.is_empty() {
            return false;
        }
        drop(handles.remove(0));
        true
    }
}

impl PresentationSurface for RecordingSurface {
    fn show(&self, alert: AlertContent, on_dismiss: DismissHandle) {
        self.threads
            .lock()
            .push(std::thread::current().name().map(str::to_string));
        self.shown.lock().push(alert);
        self.handles.lock().push(on_dismiss);
    }
}

/// Delegate that defers to the manager for every string and records
/// the hooks it receives
#[derive(Default)]
pub struct RecordingDelegate {
    pub allow: bool,
    pub events: Mutex<Vec<String>>,
}

impl RecordingDelegate {
    pub fn allowing() -> Arc<Self> {
        Arc::new(Self {
            allow: true,
            ..Default::default()
        })
    }

    pub fn declining() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }
}

impl ErrorDelegate for RecordingDelegate {
    fn should_present(&self, _manager: &ErrorManager, error: &dyn Presentable) -> bool {
        self.events.lock().push(format!("should_present:{}", error));
        self.allow
    }

    fn error_presented(&self, manager: &ErrorManager, error: &dyn Presentable) {
        self.events.lock().push(format!(
            "presented:{}:showing={}",
            error,
            manager.is_showing_error()
        ));
    }
}

/// Delegate replacing every field
pub struct OverridingDelegate;

impl ErrorDelegate for OverridingDelegate {
    fn title_for(&self, _manager: &ErrorManager, _error: &dyn Presentable) -> String {
        "DELEGATE:TITLE".to_string()
    }

    fn message_for(&self, _manager: &ErrorManager, _error: &dyn Presentable) -> Option<String> {
        None
    }

    fn button_text_for(&self, _manager: &ErrorManager, _error: &dyn Presentable) -> String {
        "DELEGATE:BUTTON".to_string()
    }
}

/// Delegate answering one lookup itself and leaving the rest to the manager
pub struct LookupDelegate;

impl ErrorDelegate for LookupDelegate {
    fn localized_string(&self, manager: &ErrorManager, key: &str) -> Option<String> {
        if key == "error-localizedTitle" {
            Some("DELEGATE:GENERIC_TITLE".to_string())
        } else {
            manager.default_localized_string(key)
        }
    }
}

/// Test utilities
pub struct TestUtils;

impl TestUtils {
    /// Initialize test logging
    pub fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    }
}
