//! Localized string resolution
//!
//! [`LocalizationResolver`] asks an injected [`LookupService`] for a key
//! within a configured scope. It performs no fallback chaining; the error
//! manager decides what to try next when a key misses.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Source of localized strings, keyed by table and bundle
pub trait LookupService: Send + Sync {
    /// Look up `key` in `table` of `bundle`.
    ///
    /// `None` for either scope component means the service's default.
    fn lookup(&self, key: &str, table: Option<&str>, bundle: Option<&str>) -> Option<String>;
}

/// Bundle and optional table a resolver looks keys up in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupScope {
    /// Bundle (resource set) identifier
    pub bundle_id: String,
    /// Table identifier within the bundle
    pub table_id: Option<String>,
}

impl LookupScope {
    /// Scope covering the default table of `bundle_id`
    pub fn new(bundle_id: impl Into<String>) -> Self {
        Self {
            bundle_id: bundle_id.into(),
            table_id: None,
        }
    }

    /// Narrow the scope to one table
    pub fn with_table(mut self, table_id: impl Into<String>) -> Self {
        self.table_id = Some(table_id.into());
        self
    }
}

/// Resolves lookup keys to strings
#[derive(Clone)]
pub struct LocalizationResolver {
    service: Arc<dyn LookupService>,
    scope: Option<LookupScope>,
}

impl std::fmt::Debug for LocalizationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationResolver")
            .field("scope", &self.scope)
            .finish()
    }
}

impl LocalizationResolver {
    /// Create a resolver over `service`; without a scope the service's
    /// default bundle and table are used
    pub fn new(service: Arc<dyn LookupService>, scope: Option<LookupScope>) -> Self {
        Self { service, scope }
    }

    pub fn scope(&self) -> Option<&LookupScope> {
        self.scope.as_ref()
    }

    /// Resolve `key`, or `None` when the service has no entry for it
    pub fn resolve(&self, key: &str) -> Option<String> {
        let (table, bundle) = match &self.scope {
            Some(scope) => (scope.table_id.as_deref(), Some(scope.bundle_id.as_str())),
            None => (None, None),
        };

        match self.service.lookup(key, table, bundle) {
            Some(value) if is_echo(key, &value) => {
                trace!("Lookup for '{}' echoed the key back", key);
                None
            }
            Some(value) => Some(value),
            None => {
                trace!("No entry for '{}'", key);
                None
            }
        }
    }
}

/// Services that cannot report a miss return the key itself or the
/// `**key**` placeholder instead.
fn is_echo(key: &str, value: &str) -> bool {
    value == key
        || value
            .strip_prefix("**")
            .and_then(|inner| inner.strip_suffix("**"))
            == Some(key)
}
