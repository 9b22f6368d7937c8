//! Crate error type
//!
//! The resolution pipeline itself never fails. These errors come from the
//! outer layers: configuration loading, string table loading and the UI
//! thread that presentation is forwarded to.

use thiserror::Error;

use crate::types::{Keyed, Presentable};

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML configuration or string table parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// String table loading errors
    #[error("String table error in {path}: {message}")]
    StringTable {
        /// Path of the table file or directory
        path: String,
        /// Error message describing the issue
        message: String,
    },

    /// UI thread startup or forwarding errors
    #[error("UI thread error: {message}")]
    UiThread {
        /// Error message describing the issue
        message: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a string table error
    pub fn string_table<S: Into<String>>(path: S, message: S) -> Self {
        Self::StringTable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a UI thread error
    pub fn ui_thread<S: Into<String>>(message: S) -> Self {
        Self::UiThread {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Io(..) => "io",
            Error::Toml(..) => "toml",
            Error::Config { .. } => "config",
            Error::StringTable { .. } => "string_table",
            Error::UiThread { .. } => "ui_thread",
        }
    }
}

impl Keyed for Error {
    fn error_key(&self) -> String {
        format!("Error.{}", self.category())
    }
}

impl Presentable for Error {
    fn as_keyed(&self) -> Option<&dyn Keyed> {
        Some(self)
    }
}
