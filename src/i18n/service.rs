//! Active-locale state shared by every rendering surface.
//!
//! The service owns the catalog, the selected `(code, table)` pair and the
//! preference store. Consumers receive it through a [`LocaleHandle`] rather
//! than a process global, so tests can hand in their own instance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, info, warn};

use super::catalog::{LocaleCatalog, join_key_names};
use super::translations::StringTable;
use super::StringKey;
use crate::config::PreferenceStore;
use crate::error::LocaleError;

/// Storage key holding the user's chosen locale code.
pub(crate) const PREFERENCE_KEY: &str = "preferred-language";

/// The selected locale and its table, always replaced together.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ActiveLocale {
    pub code: &'static str,
    pub table: &'static StringTable,
}

/// Identifies a registered change listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&ActiveLocale) + Send + Sync>;

pub(crate) struct LocaleService {
    catalog: LocaleCatalog,
    store: Box<dyn PreferenceStore>,
    active: RwLock<ActiveLocale>,
    /// Serializes `set_active` so swap, persist and notify stay in step.
    writer: Mutex<()>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl LocaleService {
    /// Creates the service, adopting the persisted locale when it is known.
    ///
    /// Storage failures and unknown stored codes fall back to the catalog
    /// default. Incomplete tables are reported once here.
    pub(crate) fn new(catalog: LocaleCatalog, store: Box<dyn PreferenceStore>) -> Self {
        for gap in catalog.validate() {
            warn!(
                code = gap.code,
                missing = %join_key_names(&gap.missing),
                "locale table is incomplete"
            );
        }

        let entry = match store.get(PREFERENCE_KEY) {
            Ok(Some(code)) => match catalog.find(&code) {
                Some(entry) => *entry,
                None => {
                    debug!(code = %code, "ignoring unknown stored locale");
                    *catalog.default_entry()
                }
            },
            Ok(None) => *catalog.default_entry(),
            Err(error) => {
                warn!(%error, "failed to load language preference");
                *catalog.default_entry()
            }
        };
        info!(code = entry.code, "locale initialized");

        Self {
            active: RwLock::new(ActiveLocale {
                code: entry.code,
                table: entry.table,
            }),
            catalog,
            store,
            writer: Mutex::new(()),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Table for `code`; unknown codes get the default table.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn resolve(&self, code: &str) -> &'static StringTable {
        self.catalog.resolve(code)
    }

    pub(crate) fn get_active(&self) -> ActiveLocale {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        self.catalog.list_available()
    }

    /// Text for `key` in the active locale.
    pub(crate) fn text(&self, key: StringKey) -> &'static str {
        self.catalog.text(self.get_active().table, key)
    }

    /// Switches the active locale, persists it and notifies listeners.
    ///
    /// Unknown codes leave the state untouched. A failed write to the store
    /// is logged; the in-memory selection stays authoritative.
    ///
    /// Concurrent calls run one at a time, so the stored value and the last
    /// notification always match the final active locale. Listeners run
    /// inside that section and must not call `set_active` themselves.
    pub(crate) fn set_active(&self, code: &str) -> Result<(), LocaleError> {
        let Some(entry) = self.catalog.find(code).copied() else {
            debug!(code, "rejected unknown locale");
            return Err(LocaleError::InvalidLocale(code.to_string()));
        };

        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let active = ActiveLocale {
            code: entry.code,
            table: entry.table,
        };
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = active;
        info!(code = entry.code, "locale changed");

        if let Err(error) = self.store.set(PREFERENCE_KEY, entry.code) {
            warn!(%error, "failed to save language preference");
        }

        // Snapshot so listeners may subscribe or read state without deadlocking.
        // The `active` lock is already released here.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&active);
        }
        Ok(())
    }

    /// Registers `listener` to run synchronously after every locale change.
    pub(crate) fn subscribe(
        &self,
        listener: impl Fn(&ActiveLocale) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

/// Cloneable access point handed to consumers.
///
/// A default handle is unconfigured; reaching through it is a wiring bug
/// reported as [`LocaleError::NotInitialized`].
#[derive(Clone, Default)]
pub(crate) struct LocaleHandle {
    service: Option<Arc<LocaleService>>,
}

impl LocaleHandle {
    pub(crate) fn new(service: Arc<LocaleService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn unconfigured() -> Self {
        Self::default()
    }

    pub(crate) fn service(&self) -> Result<&LocaleService, LocaleError> {
        self.service.as_deref().ok_or(LocaleError::NotInitialized)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/i18n_service.rs"]
mod tests;
