//! In-memory string tables
//!
//! [`StringTables`] is the bundled [`LookupService`]: strings grouped into
//! tables, tables grouped into bundles. Tables are flat TOML files mapping
//! lookup keys to strings:
//!
//! ```toml
//! "error-localizedTitle" = "Something went wrong"
//! "error-SyncError.offline-localizedDescription" = "You appear to be offline."
//! ```
//!
//! [`StringTables::load_dir`] reads a resources directory laid out as
//! `<dir>/<bundle>/<table>.toml`; TOML files directly inside `<dir>` belong
//! to the default bundle.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use super::resolver::LookupService;
use crate::{Error, Result};

/// Bundle used when no bundle is named
pub const DEFAULT_BUNDLE: &str = "main";

/// Table used when no table is named
pub const DEFAULT_TABLE: &str = "Localizable";

type Table = HashMap<String, String>;

/// Bundles of string tables
#[derive(Debug, Clone, Default)]
pub struct StringTables {
    bundles: HashMap<String, HashMap<String, Table>>,
}

impl StringTables {
    /// Create empty string tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry, builder style
    pub fn with_entry(
        mut self,
        bundle: impl Into<String>,
        table: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(bundle, table, key, value);
        self
    }

    /// Add one entry
    pub fn insert(
        &mut self,
        bundle: impl Into<String>,
        table: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.bundles
            .entry(bundle.into())
            .or_default()
            .entry(table.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Merge a whole table into a bundle
    pub fn insert_table(&mut self, bundle: impl Into<String>, table: impl Into<String>, entries: Table) {
        self.bundles
            .entry(bundle.into())
            .or_default()
            .entry(table.into())
            .or_default()
            .extend(entries);
    }

    /// Load every table under a resources directory
    pub fn load_dir<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(Error::string_table(
                path.display().to_string(),
                "not a directory".to_string(),
            ));
        }

        let mut tables = Self::new();
        for entry in std::fs::read_dir(path)? {
            let entry_path = entry?.path();
            if entry_path.is_dir() {
                let Some(bundle) = file_stem(&entry_path) else {
                    continue;
                };
                for table_entry in std::fs::read_dir(&entry_path)? {
                    let table_path = table_entry?.path();
                    tables.load_table_file(&bundle, &table_path)?;
                }
            } else {
                tables.load_table_file(DEFAULT_BUNDLE, &entry_path)?;
            }
        }

        info!(
            "Loaded {} string table(s) from {:?}",
            tables.table_count(),
            path
        );
        Ok(tables)
    }

    fn load_table_file(&mut self, bundle: &str, path: &Path) -> Result<()> {
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            debug!("Skipping non-table file {:?}", path);
            return Ok(());
        }
        let Some(table) = file_stem(path) else {
            return Ok(());
        };

        let content = std::fs::read_to_string(path)?;
        let entries = Self::parse_table(&content, &path.display().to_string())?;
        debug!(
            "Loaded table {}/{} with {} entries",
            bundle,
            table,
            entries.len()
        );
        self.insert_table(bundle, table, entries);
        Ok(())
    }

    /// Parse one TOML table; every value must be a string
    pub fn parse_table(content: &str, origin: &str) -> Result<HashMap<String, String>> {
        let raw: toml::Table = toml::from_str(content)?;
        raw.into_iter()
            .map(|(key, value)| match value {
                toml::Value::String(text) => Ok((key, text)),
                other => Err(Error::string_table(
                    origin.to_string(),
                    format!("value for '{}' is a {}, not a string", key, other.type_str()),
                )),
            })
            .collect()
    }

    /// Names of all loaded bundles
    pub fn bundle_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of tables across all bundles
    pub fn table_count(&self) -> usize {
        self.bundles.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.table_count() == 0
    }
}

impl LookupService for StringTables {
    fn lookup(&self, key: &str, table: Option<&str>, bundle: Option<&str>) -> Option<String> {
        self.bundles
            .get(bundle.unwrap_or(DEFAULT_BUNDLE))?
            .get(table.unwrap_or(DEFAULT_TABLE))?
            .get(key)
            .cloned()
    }
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
