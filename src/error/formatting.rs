//! Error formatting utilities
//!
//! Renders crate errors and their `source()` chains for terminal output and
//! structured logs.

use crate::Error;
use serde_json;
use std::error::Error as StdError;

/// Format error for display
///
/// Appends every nested cause that is not already part of the message.
pub fn format_error(error: &Error) -> String {
    let formatted = match error {
        Error::Config { field, message } => {
            format!("Configuration error in {}: {}", field, message)
        }

        Error::StringTable { path, message } => {
            format!("String table error in '{}': {}", path, message)
        }

        // For wrapped errors, use their Display implementation
        _ => error.to_string(),
    };

    let mut result = formatted;
    let mut source = error.source();

    while let Some(cause) = source {
        if !result.contains(&cause.to_string()) {
            result = format!("{} (caused by {})", result, cause);
        }
        source = cause.source();
    }

    result
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
    });

    match error {
        Error::Config { field, .. } => {
            log_data["field"] = serde_json::Value::String(field.clone());
        }
        Error::StringTable { path, .. } => {
            log_data["path"] = serde_json::Value::String(path.clone());
        }
        _ => {}
    }

    log_data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_formatting() {
        let error = Error::config("logging.level", "Invalid log level: loud");
        let formatted = format_error(&error);

        assert!(formatted.contains("Configuration error in logging.level"));
        assert!(formatted.contains("loud"));
    }

    #[test]
    fn test_nested_error_formatting() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let wrapped_error = Error::Io(io_error);

        let formatted = format_error(&wrapped_error);
        assert!(formatted.contains("File not found"));
        assert!(!formatted.contains("caused by"));
    }

    #[test]
    fn test_ui_thread_error_formatting() {
        let error = Error::ui_thread("UI thread 'main-ui' is not running");
        assert_eq!(
            format_error(&error),
            "UI thread error: UI thread 'main-ui' is not running"
        );
    }

    #[test]
    fn test_logging_error_formatting() {
        let error = Error::string_table("strings/main", "not a directory");
        let log_data = format_error_for_logging(&error);

        assert!(
            log_data["message"]
                .as_str()
                .unwrap()
                .contains("String table error")
        );
        assert_eq!(log_data["category"].as_str().unwrap(), "string_table");
        assert_eq!(log_data["path"].as_str().unwrap(), "strings/main");
    }
}
