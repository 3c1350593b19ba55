//! Persisted key-value storage for session tokens and small UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session layer never touches `window.localStorage` directly. It goes
//! through [`TokenStore`] so tests bind an in-memory map while the browser
//! build binds the origin-scoped local storage.
//!
//! INVARIANT
//! =========
//! Access and refresh tokens are present together or absent together. Every
//! removal path goes through [`TokenStore::clear_session`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Keys persisted by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Access,
    Refresh,
    RedirectPath,
    Theme,
}

impl StorageKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
            Self::RedirectPath => "redirectPath",
            Self::Theme => "theme",
        }
    }
}

/// Injectable key-value store.
pub trait TokenStore {
    fn get(&self, key: StorageKey) -> Option<String>;
    fn set(&self, key: StorageKey, value: &str);
    fn clear(&self, key: StorageKey);

    /// Remove both tokens. Callers never observe one without the other.
    fn clear_session(&self) {
        self.clear(StorageKey::Access);
        self.clear(StorageKey::Refresh);
    }

    /// Store a freshly issued token pair.
    fn store_session(&self, access: &str, refresh: &str) {
        self.set(StorageKey::Access, access);
        self.set(StorageKey::Refresh, refresh);
    }

    /// Stored access token; empty strings count as absent.
    fn access_token(&self) -> Option<String> {
        self.get(StorageKey::Access).filter(|v| !v.is_empty())
    }

    /// Stored refresh token; empty strings count as absent.
    fn refresh_token(&self) -> Option<String> {
        self.get(StorageKey::Refresh).filter(|v| !v.is_empty())
    }
}

/// Browser `localStorage` binding.
///
/// Storage failures (disabled storage, quota) read as `None` and turn writes
/// into no-ops. Outside the browser every call is inert.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserStorage {
    fn get(&self, key: StorageKey) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key.as_str()).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: StorageKey, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key.as_str(), value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn clear(&self, key: StorageKey) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<StorageKey, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with `entries`.
    #[must_use]
    pub fn with_entries(entries: &[(StorageKey, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(*key, value);
        }
        store
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.entries.borrow().get(&key).cloned()
    }

    fn set(&self, key: StorageKey, value: &str) {
        self.entries.borrow_mut().insert(key, value.to_owned());
    }

    fn clear(&self, key: StorageKey) {
        self.entries.borrow_mut().remove(&key);
    }
}
