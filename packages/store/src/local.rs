//! # `localStorage` store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web platform**.
//! It reads and writes the origin's `window.localStorage` through [`web_sys::Storage`].
//!
//! ## Connection management
//!
//! `LocalStore` is a zero-size struct that looks up the storage area on every call.
//! `web_sys::Storage` is not `Clone`-friendly across contexts, and the lookup is a
//! cheap property access on `window`.
//!
//! ## Error handling
//!
//! Reads swallow errors and return `None`, so an unavailable storage area looks
//! like an empty one. Writes and removals report a [`StorageError`] so callers can
//! log them.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::storage::{KeyValueStore, StorageError};

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

fn rejected(operation: &'static str, key: &str, err: JsValue) -> StorageError {
    StorageError::Rejected {
        operation,
        key: key.to_string(),
        message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| rejected("set", key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| rejected("remove", key, e))
    }
}
