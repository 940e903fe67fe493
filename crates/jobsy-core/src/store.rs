//! Key/value storage for trigger bookkeeping.
//!
//! The assistant reads and writes its flags through [`KeyValueStore`] so the
//! backing storage can be swapped: SQLite for flags that survive restarts,
//! [`MemoryStore`] for session-scoped flags and tests. Storage is
//! best-effort; a missing or unparsable value reads as its default.

use std::collections::HashMap;

use log::warn;

use crate::db::Database;

/// Set to `"true"` once onboarding reached a terminal branch.
pub const ONBOARDING_COMPLETED_KEY: &str = "jobsy-onboarding-completed";
/// Number of dashboard visits that scheduled dashboard help.
pub const DASHBOARD_VISITS_KEY: &str = "jobsy-dashboard-visits";
/// Session-scoped marker that the home greeting was scheduled.
pub const HOME_GREETING_KEY: &str = "jobsy-home-greeting";

/// Best-effort string key/value storage.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Volatile store backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Option<String> {
        match self.get_setting(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read '{key}': {e}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.set_setting(key, value) {
            warn!("Failed to persist '{key}': {e}");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = self.remove_setting(key) {
            warn!("Failed to remove '{key}': {e}");
        }
    }
}

/// Typed accessors for the assistant's flags.
pub trait Bookkeeping {
    fn onboarding_completed(&self) -> bool;
    fn mark_onboarding_completed(&mut self);
    fn dashboard_visits(&self) -> u32;
    fn set_dashboard_visits(&mut self, visits: u32);
    fn home_greeting_shown(&self) -> bool;
    fn mark_home_greeting_shown(&mut self);
}

impl<S: KeyValueStore + ?Sized> Bookkeeping for S {
    fn onboarding_completed(&self) -> bool {
        self.get(ONBOARDING_COMPLETED_KEY).as_deref() == Some("true")
    }

    fn mark_onboarding_completed(&mut self) {
        self.set(ONBOARDING_COMPLETED_KEY, "true");
    }

    fn dashboard_visits(&self) -> u32 {
        self.get(DASHBOARD_VISITS_KEY)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    fn set_dashboard_visits(&mut self, visits: u32) {
        self.set(DASHBOARD_VISITS_KEY, &visits.to_string());
    }

    fn home_greeting_shown(&self) -> bool {
        self.get(HOME_GREETING_KEY).as_deref() == Some("true")
    }

    fn mark_home_greeting_shown(&mut self) {
        self.set(HOME_GREETING_KEY, "true");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_bookkeeping_defaults() {
        let store = MemoryStore::new();
        assert!(!store.onboarding_completed());
        assert_eq!(store.dashboard_visits(), 0);
        assert!(!store.home_greeting_shown());
    }

    #[test]
    fn test_unparsable_values_read_as_default() {
        let mut store = MemoryStore::new();
        store.set(DASHBOARD_VISITS_KEY, "lots");
        store.set(ONBOARDING_COMPLETED_KEY, "yes");
        assert_eq!(store.dashboard_visits(), 0);
        assert!(!store.onboarding_completed());
    }

    #[test]
    fn test_bookkeeping_writes_original_keys() {
        let mut store = MemoryStore::new();
        store.mark_onboarding_completed();
        store.set_dashboard_visits(2);
        store.mark_home_greeting_shown();

        assert_eq!(store.get("jobsy-onboarding-completed").as_deref(), Some("true"));
        assert_eq!(store.get("jobsy-dashboard-visits").as_deref(), Some("2"));
        assert_eq!(store.get("jobsy-home-greeting").as_deref(), Some("true"));
    }

    #[test]
    fn test_database_store() {
        let mut db = Database::in_memory().expect("Failed to open database");
        assert!(!db.onboarding_completed());

        db.mark_onboarding_completed();
        db.set_dashboard_visits(3);
        assert!(db.onboarding_completed());
        assert_eq!(db.dashboard_visits(), 3);

        KeyValueStore::remove(&mut db, DASHBOARD_VISITS_KEY);
        assert_eq!(db.dashboard_visits(), 0);
    }
}
