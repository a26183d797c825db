use super::*;
use crate::config::MemoryStore;
use std::ptr;
use std::sync::atomic::AtomicUsize;
use std::thread;
use std::time::Duration;

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        anyhow::bail!("storage unavailable")
    }

    fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage unavailable")
    }
}

/// Delays writes of one value so a second writer can overtake it.
struct SlowStore {
    inner: MemoryStore,
    slow_value: &'static str,
}

impl PreferenceStore for SlowStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if value == self.slow_value {
            thread::sleep(Duration::from_millis(300));
        }
        self.inner.set(key, value)
    }
}

fn service_with(store: impl PreferenceStore + 'static) -> LocaleService {
    let catalog = LocaleCatalog::builtin().expect("builtin catalog");
    LocaleService::new(catalog, Box::new(store))
}

fn assert_pair(service: &LocaleService, code: &str) {
    let active = service.get_active();
    assert_eq!(active.code, code);
    assert!(ptr::eq(active.table, service.resolve(code)));
}

#[test]
fn starts_on_default_with_empty_store() {
    let service = service_with(MemoryStore::new());
    assert_pair(&service, "en");
}

#[test]
fn adopts_stored_known_locale() {
    let service = service_with(MemoryStore::seeded(PREFERENCE_KEY, "yoruba"));
    assert_pair(&service, "yoruba");
}

#[test]
fn ignores_stored_unknown_locale() {
    for stored in ["klingon", "", "EN", "pidgin\n"] {
        let service = service_with(MemoryStore::seeded(PREFERENCE_KEY, stored));
        assert_pair(&service, "en");
    }
}

#[test]
fn storage_read_failure_falls_back_to_default() {
    let service = service_with(FailingStore);
    assert_pair(&service, "en");
}

#[test]
fn set_active_switches_code_and_table_together() {
    let service = service_with(MemoryStore::new());
    service.set_active("pidgin").expect("known locale");
    assert_pair(&service, "pidgin");
    assert_eq!(service.text(StringKey::Financial), "Money Matter");
}

#[test]
fn set_active_rejects_unknown_code_and_keeps_state() {
    let service = service_with(MemoryStore::new());
    service.set_active("yoruba").expect("known locale");

    let err = service.set_active("french").unwrap_err();
    assert_eq!(err, LocaleError::InvalidLocale("french".to_string()));
    assert_pair(&service, "yoruba");
}

#[test]
fn set_active_persists_choice() {
    let store = Arc::new(MemoryStore::new());
    let service = service_with(Arc::clone(&store));
    service.set_active("pidgin").expect("known locale");
    assert_eq!(
        store.get(PREFERENCE_KEY).expect("reliable store"),
        Some("pidgin".to_string())
    );
}

#[test]
fn rejected_code_is_not_persisted() {
    let store = Arc::new(MemoryStore::seeded(PREFERENCE_KEY, "yoruba"));
    let service = service_with(Arc::clone(&store));
    assert!(service.set_active("zz").is_err());
    assert_eq!(
        store.get(PREFERENCE_KEY).expect("reliable store"),
        Some("yoruba".to_string())
    );
}

#[test]
fn persisted_choice_survives_restart() {
    let store = Arc::new(MemoryStore::new());
    service_with(Arc::clone(&store))
        .set_active("yoruba")
        .expect("known locale");
    let restarted = service_with(Arc::clone(&store));
    assert_pair(&restarted, "yoruba");
}

#[test]
fn storage_write_failure_keeps_in_memory_change() {
    let service = service_with(FailingStore);
    service.set_active("yoruba").expect("write failure is not surfaced");
    assert_pair(&service, "yoruba");
}

#[test]
fn listeners_run_inside_set_active_and_see_new_state() {
    let service = Arc::new(service_with(MemoryStore::new()));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let reader = Arc::clone(&service);
    let log = Arc::clone(&seen);
    service.subscribe(move |active| {
        // State is already swapped when listeners run.
        assert_eq!(reader.get_active().code, active.code);
        log.lock().expect("lock").push(active.code);
    });

    service.set_active("pidgin").expect("known locale");
    assert_eq!(*seen.lock().expect("lock"), vec!["pidgin"]);

    service.set_active("en").expect("known locale");
    assert_eq!(*seen.lock().expect("lock"), vec!["pidgin", "en"]);
}

#[test]
fn listeners_are_not_called_for_rejected_codes() {
    let service = service_with(MemoryStore::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    service.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let _ = service.set_active("nope");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn listeners_run_in_registration_order() {
    let service = service_with(MemoryStore::new());
    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        service.subscribe(move |_| order.lock().expect("lock").push(tag));
    }
    service.set_active("yoruba").expect("known locale");
    assert_eq!(*order.lock().expect("lock"), vec!["first", "second", "third"]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let service = service_with(MemoryStore::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = service.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    service.set_active("pidgin").expect("known locale");
    assert!(service.unsubscribe(id));
    assert!(!service.unsubscribe(id));
    service.set_active("yoruba").expect("known locale");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn switching_locales_does_not_touch_catalog_tables() {
    let service = service_with(MemoryStore::new());
    let before: Vec<StringTable> = service
        .list_available()
        .iter()
        .map(|(code, _)| service.resolve(code).clone())
        .collect();

    for code in ["pidgin", "yoruba", "en", "yoruba"] {
        service.set_active(code).expect("known locale");
    }

    let after: Vec<StringTable> = service
        .list_available()
        .iter()
        .map(|(code, _)| service.resolve(code).clone())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn list_available_ignores_active_locale() {
    let service = service_with(MemoryStore::new());
    let initial = service.list_available();
    service.set_active("yoruba").expect("known locale");
    assert_eq!(service.list_available(), initial);
    assert_eq!(initial[0].0, "en");
}

#[test]
fn unconfigured_handle_reports_not_initialized() {
    let handle = LocaleHandle::unconfigured();
    assert_eq!(handle.service().err(), Some(LocaleError::NotInitialized));
}

#[test]
fn configured_handles_share_one_service() {
    let handle = LocaleHandle::new(Arc::new(service_with(MemoryStore::new())));
    let other = handle.clone();
    handle.service().expect("configured").set_active("pidgin").expect("known");
    assert_eq!(other.service().expect("configured").get_active().code, "pidgin");
}

#[test]
fn readers_never_observe_a_torn_pair() {
    let service = Arc::new(service_with(MemoryStore::new()));
    let writer = {
        let service = Arc::clone(&service);
        thread::spawn(move || {
            for i in 0..500 {
                let code = ["en", "pidgin", "yoruba"][i % 3];
                service.set_active(code).expect("known locale");
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..500 {
                    let active = service.get_active();
                    assert!(ptr::eq(active.table, service.resolve(active.code)));
                }
            })
        })
        .collect();

    writer.join().expect("writer");
    for reader in readers {
        reader.join().expect("reader");
    }
}

#[test]
fn concurrent_switches_persist_and_announce_the_final_locale() {
    let store = Arc::new(SlowStore {
        inner: MemoryStore::new(),
        slow_value: "pidgin",
    });
    let service = Arc::new(service_with(Arc::clone(&store)));
    let last_notified = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&last_notified);
    service.subscribe(move |active| *sink.lock().expect("lock") = Some(active.code));

    let slow = {
        let service = Arc::clone(&service);
        thread::spawn(move || service.set_active("pidgin").expect("known locale"))
    };
    thread::sleep(Duration::from_millis(50));
    service.set_active("yoruba").expect("known locale");
    slow.join().expect("slow writer");

    let active = service.get_active().code;
    assert_eq!(
        store.get(PREFERENCE_KEY).expect("reliable store"),
        Some(active.to_string())
    );
    assert_eq!(*last_notified.lock().expect("lock"), Some(active));
}
