//! Persisted client-side session marker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is nothing more than two `localStorage` keys written after a
//! successful login. It is the only input the details page gate consults,
//! and it is re-read on every mount rather than cached.
//!
//! DESIGN
//! ======
//! Storage is injected through `KeyValueStore` so controller tests can swap
//! the browser backend for `MemoryStorage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USERNAME_KEY: &str = "username";

/// Failures writing to the backing store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("failed to write storage key `{key}`")]
    WriteFailed { key: String },
}

/// Minimal string key/value surface, modeled on the Web Storage API.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a `StorageError` if the value could not be stored.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str);
}

/// Whether the current browser context believes it is authenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_active: bool,
    pub username: String,
}

impl SessionState {
    /// The session username, only when the session is active.
    pub fn identity(&self) -> Option<&str> {
        self.is_active.then_some(self.username.as_str())
    }
}

/// Read/write/clear facade over the two session keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current persisted state; the inactive default when nothing is stored.
    pub fn read(&self) -> SessionState {
        let is_active = self.storage.get_item(IS_LOGGED_IN_KEY).as_deref() == Some("true");
        if !is_active {
            return SessionState::default();
        }
        let username = self.storage.get_item(USERNAME_KEY).unwrap_or_default();
        SessionState { is_active, username }
    }

    /// Mark the session active for `username`.
    ///
    /// The username key is written before the flag, so a reader never sees
    /// an active flag next to a stale username.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if either key cannot be written. A partial
    /// write is rolled back.
    pub fn write(&self, username: &str) -> Result<(), StorageError> {
        self.storage.set_item(USERNAME_KEY, username)?;
        if let Err(e) = self.storage.set_item(IS_LOGGED_IN_KEY, "true") {
            self.storage.remove_item(USERNAME_KEY);
            return Err(e);
        }
        Ok(())
    }

    /// Remove both keys. Safe to call repeatedly.
    pub fn clear(&self) {
        self.storage.remove_item(IS_LOGGED_IN_KEY);
        self.storage.remove_item(USERNAME_KEY);
    }
}

impl SessionStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

/// In-memory store for tests and non-browser embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key);
    }
}

/// Window `localStorage`. Outside the browser every read misses and every
/// write reports `StorageError::Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::WriteFailed { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
