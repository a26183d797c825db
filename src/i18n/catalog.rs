//! Fixed, ordered collection of locale tables.
//!
//! Lookups through the catalog are total: an unknown code resolves to the
//! default locale and an empty entry resolves to the default locale's text.

use tracing::warn;

use super::translations::StringTable;
use super::{StringKey, en, pidgin, yoruba};
use crate::error::LocaleError;

/// Code of the locale used when nothing else applies.
pub(crate) const DEFAULT_LOCALE: &str = "en";

/// One selectable locale.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LocaleEntry {
    pub code: &'static str,
    pub display_name: &'static str,
    pub table: &'static StringTable,
}

/// A locale whose table leaves part of the canonical key set empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CatalogGap {
    pub code: &'static str,
    pub missing: Vec<StringKey>,
}

#[derive(Clone, Debug)]
pub(crate) struct LocaleCatalog {
    entries: Vec<LocaleEntry>,
    default_index: usize,
}

impl LocaleCatalog {
    /// Builds a catalog from entries in display order.
    ///
    /// Fails when a code repeats, when `default_code` is not among the
    /// entries, or when the default table has empty keys.
    pub(crate) fn new(entries: Vec<LocaleEntry>, default_code: &str) -> Result<Self, LocaleError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|prev| prev.code == entry.code) {
                return Err(LocaleError::DuplicateLocale(entry.code.to_string()));
            }
        }
        let default_index = entries
            .iter()
            .position(|e| e.code == default_code)
            .ok_or_else(|| LocaleError::UnknownDefault(default_code.to_string()))?;

        let missing = entries[default_index].table.missing_keys();
        if !missing.is_empty() {
            return Err(LocaleError::IncompleteDefault {
                code: default_code.to_string(),
                missing: join_key_names(&missing),
            });
        }

        Ok(Self {
            entries,
            default_index,
        })
    }

    /// English, Pidgin and Yorùbá, with English as the default.
    pub(crate) fn builtin() -> Result<Self, LocaleError> {
        let entries = vec![
            LocaleEntry {
                code: "en",
                display_name: "English",
                table: en::translations(),
            },
            LocaleEntry {
                code: "pidgin",
                display_name: "Pidgin",
                table: pidgin::translations(),
            },
            LocaleEntry {
                code: "yoruba",
                display_name: "Yorùbá",
                table: yoruba::translations(),
            },
        ];
        Self::new(entries, DEFAULT_LOCALE)
    }

    pub(crate) fn default_entry(&self) -> &LocaleEntry {
        &self.entries[self.default_index]
    }

    pub(crate) fn find(&self, code: &str) -> Option<&LocaleEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    /// Returns the entry for `code`, or the default entry for anything unknown.
    pub(crate) fn resolve_entry(&self, code: &str) -> &LocaleEntry {
        self.find(code).unwrap_or_else(|| self.default_entry())
    }

    /// Returns the table for `code`, or the default table for anything unknown.
    pub(crate) fn resolve(&self, code: &str) -> &'static StringTable {
        self.resolve_entry(code).table
    }

    /// `(code, display name)` pairs in declaration order.
    pub(crate) fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        self.entries
            .iter()
            .map(|e| (e.code, e.display_name))
            .collect()
    }

    /// Display text for `key` in `table`.
    ///
    /// An empty entry falls back to the default locale and logs a
    /// catalog-integrity warning.
    pub(crate) fn text(&self, table: &StringTable, key: StringKey) -> &'static str {
        if let Some(value) = table.get(key) {
            return value;
        }
        warn!(key = key.name(), "missing translation, using default locale text");
        // `new` rejects catalogs whose default table has gaps.
        self.default_entry().table.get(key).unwrap_or(key.name())
    }

    /// Diffs every table against the canonical key set.
    pub(crate) fn validate(&self) -> Vec<CatalogGap> {
        self.entries
            .iter()
            .filter_map(|e| {
                let missing = e.table.missing_keys();
                (!missing.is_empty()).then_some(CatalogGap {
                    code: e.code,
                    missing,
                })
            })
            .collect()
    }
}

pub(crate) fn join_key_names(keys: &[StringKey]) -> String {
    keys.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/i18n_catalog.rs"]
mod tests;
