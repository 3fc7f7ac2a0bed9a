use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::KeyValueStore;

/// In-memory KeyValueStore for testing and native builds.
///
/// Clones share the same map, so a clone behaves like a second handle on the
/// same browser storage (e.g. after a page reload).
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("token").is_none());

        storage.set("token", "abc");
        assert_eq!(storage.get("token").as_deref(), Some("abc"));

        storage.set("token", "def");
        assert_eq!(storage.get("token").as_deref(), Some("def"));
        assert_eq!(storage.len(), 1);

        storage.remove("token");
        assert!(storage.get("token").is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let reloaded = storage.clone();

        storage.set("uid", "2019203001");
        assert_eq!(reloaded.get("uid").as_deref(), Some("2019203001"));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove("nope");
        assert!(storage.is_empty());
    }
}
