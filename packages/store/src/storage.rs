//! # Key-value storage: the browser-local persistence seam
//!
//! Everything the admin panel persists is a string stored under a string key,
//! the same model as `window.localStorage`. The [`KeyValueStore`] trait captures
//! that model so views and collaborators never touch the browser API directly.
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`crate::MemoryStore`] | native, tests | shared `HashMap` |
//! | `LocalStore` | WASM + `web` feature | `window.localStorage` |
//!
//! Calls are synchronous because `localStorage` itself is synchronous. There is
//! no locking or transactional discipline: the last write wins.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Errors raised when writing to or clearing a [`KeyValueStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage area exists (no `window`, or storage disabled by the browser).
    #[error("local storage is unavailable")]
    Unavailable,
    /// The browser threw while accessing storage (quota exceeded, privacy mode, ...).
    #[error("local storage rejected {operation} for `{key}`: {message}")]
    Rejected {
        operation: &'static str,
        key: String,
        message: String,
    },
}

/// A string-keyed, string-valued persistent store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a [`KeyValueStore`], cheap to clone and suitable for Dioxus context.
///
/// Two handles are equal when they point at the same underlying store.
#[derive(Clone)]
pub struct StorageHandle(Rc<dyn KeyValueStore>);

impl StorageHandle {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Deref for StorageHandle {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for StorageHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for StorageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageHandle").finish_non_exhaustive()
    }
}
