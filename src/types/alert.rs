//! Field kinds and resolved alert content

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-facing field the resolution pipeline produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Alert title
    Title,
    /// First message line
    Description,
    /// Second message line
    FailureReason,
    /// Third message line
    RecoverySuggestion,
    /// Label of the dismiss button
    ButtonText,
}

impl FieldKind {
    /// Every field kind, in lookup order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Title,
        FieldKind::Description,
        FieldKind::FailureReason,
        FieldKind::RecoverySuggestion,
        FieldKind::ButtonText,
    ];

    /// Message parts, in composition order
    pub const MESSAGE_PARTS: [FieldKind; 3] = [
        FieldKind::Description,
        FieldKind::FailureReason,
        FieldKind::RecoverySuggestion,
    ];

    /// Fixed token appended to lookup keys for this field
    pub fn suffix(self) -> &'static str {
        match self {
            FieldKind::Title => "localizedTitle",
            FieldKind::Description => "localizedDescription",
            FieldKind::FailureReason => "failureReason",
            FieldKind::RecoverySuggestion => "recoverySuggestion",
            FieldKind::ButtonText => "buttonText",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.suffix())
    }
}

/// Title, message and button text resolved for one error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertContent {
    /// Alert title
    pub title: String,
    /// Composed message; `None` when every part is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Dismiss button label
    #[serde(rename = "buttonText")]
    pub button_text: String,
}

impl AlertContent {
    /// Create alert content
    pub fn new(
        title: impl Into<String>,
        message: Option<String>,
        button_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message,
            button_text: button_text.into(),
        }
    }
}
