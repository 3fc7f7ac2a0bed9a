//! # Browser local storage
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! writes straight to `window.localStorage` through [`web_sys::Storage`], so
//! the session survives page reloads and new tabs of the same origin.
//!
//! ## Error handling
//!
//! `localStorage` can be unavailable (private browsing, disabled cookies) or
//! full. Every method logs the failure and carries on: reads return `None`,
//! writes do nothing. The user ends up signed out rather than stuck.

use crate::storage::KeyValueStore;
use web_sys::Storage;

/// `window.localStorage`-backed KeyValueStore.
///
/// Zero-size and `Clone`; the `Storage` handle is looked up on every call
/// because `web_sys::Storage` is not `Send` and the lookup is cheap.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {e:?}");
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("Failed to write {key} to localStorage: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {key} from localStorage: {e:?}");
        }
    }
}
