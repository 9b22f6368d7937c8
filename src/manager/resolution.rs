//! Title, message and button text resolution
//!
//! Every public resolver has a `default_*` twin that skips the delegate for
//! that field. Delegates call the twins to fall back to the built-in chain.

use tracing::trace;

use super::ErrorManager;
use crate::localization::{derive_key, generic_key};
use crate::types::{AlertContent, FieldKind, Presentable};

/// Title used when nothing else resolves
pub const DEFAULT_TITLE: &str = "Whoops!";

/// Button text used when nothing else resolves
pub const DEFAULT_BUTTON_TEXT: &str = "OK";

impl ErrorManager {
    /// Localized string for a lookup key, consulting the delegate first
    pub fn localized_string(&self, key: &str) -> Option<String> {
        self.resolve_localized_string(key, false)
    }

    /// Localized string for a lookup key from the lookup service alone
    pub fn default_localized_string(&self, key: &str) -> Option<String> {
        self.resolve_localized_string(key, true)
    }

    pub fn title_for(&self, error: &dyn Presentable) -> String {
        self.resolve_title(error, false)
    }

    pub fn default_title_for(&self, error: &dyn Presentable) -> String {
        self.resolve_title(error, true)
    }

    /// Message for an error; `None` when no part resolves
    pub fn message_for(&self, error: &dyn Presentable) -> Option<String> {
        self.resolve_message(error, false)
    }

    pub fn default_message_for(&self, error: &dyn Presentable) -> Option<String> {
        self.resolve_message(error, true)
    }

    pub fn button_text_for(&self, error: &dyn Presentable) -> String {
        self.resolve_button_text(error, false)
    }

    pub fn default_button_text_for(&self, error: &dyn Presentable) -> String {
        self.resolve_button_text(error, true)
    }

    /// Resolve every field of the alert for `error`
    pub fn alert_for(&self, error: &dyn Presentable) -> AlertContent {
        AlertContent {
            title: self.title_for(error),
            message: self.message_for(error),
            button_text: self.button_text_for(error),
        }
    }

    fn resolve_localized_string(&self, key: &str, skip_override: bool) -> Option<String> {
        if !skip_override && let Some(delegate) = self.delegate() {
            return delegate.localized_string(self, key);
        }

        self.inner.resolver.resolve(key)
    }

    fn resolve_title(&self, error: &dyn Presentable, skip_override: bool) -> String {
        if !skip_override && let Some(delegate) = self.delegate() {
            return delegate.title_for(self, error);
        }

        self.lookup_field(error, FieldKind::Title)
            .unwrap_or_else(|| {
                trace!("No title for {}, using default", error.type_identity());
                DEFAULT_TITLE.to_string()
            })
    }

    fn resolve_message(&self, error: &dyn Presentable, skip_override: bool) -> Option<String> {
        if !skip_override && let Some(delegate) = self.delegate() {
            return delegate.message_for(self, error);
        }

        match error.as_described() {
            Some(described) => compose_message([
                described.localized_description(),
                described.failure_reason(),
                described.recovery_suggestion(),
            ]),
            None => compose_message(
                FieldKind::MESSAGE_PARTS.map(|kind| self.lookup_field(error, kind)),
            ),
        }
    }

    fn resolve_button_text(&self, error: &dyn Presentable, skip_override: bool) -> String {
        if !skip_override && let Some(delegate) = self.delegate() {
            return delegate.button_text_for(self, error);
        }

        self.lookup_field(error, FieldKind::ButtonText)
            .unwrap_or_else(|| {
                trace!("No button text for {}, using default", error.type_identity());
                DEFAULT_BUTTON_TEXT.to_string()
            })
    }

    /// Specific key first, then the generic key for the field
    fn lookup_field(&self, error: &dyn Presentable, kind: FieldKind) -> Option<String> {
        self.localized_string(&derive_key(error, kind))
            .or_else(|| self.localized_string(&generic_key(kind)))
    }
}

/// Join the non-empty parts with newlines, in order.
///
/// Returns `None` rather than an empty string when nothing remains.
pub fn compose_message<I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let message = parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    (!message.is_empty()).then_some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parts(d: Option<&str>, f: Option<&str>, r: Option<&str>) -> [Option<String>; 3] {
        [d, f, r].map(|part| part.map(str::to_string))
    }

    #[rstest]
    #[case(parts(Some("D"), Some("F"), Some("R")), Some("D\nF\nR"))]
    #[case(parts(Some("D"), None, Some("R")), Some("D\nR"))]
    #[case(parts(None, Some("F"), None), Some("F"))]
    #[case(parts(None, Some("F"), Some("R")), Some("F\nR"))]
    #[case(parts(Some("D"), Some(""), None), Some("D"))]
    #[case(parts(None, None, None), None)]
    #[case(parts(Some(""), Some(""), Some("")), None)]
    fn test_compose_message(#[case] input: [Option<String>; 3], #[case] expected: Option<&str>) {
        assert_eq!(compose_message(input), expected.map(str::to_string));
    }
}
