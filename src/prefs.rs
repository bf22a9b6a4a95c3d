//! Persisted preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both controllers read their preference once at boot and write it on every
//! change. The store is injected so controllers stay testable outside the
//! browser; [`MemoryStore`] serves native use and tests, while the browser
//! build provides a `localStorage` implementation.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. Implementations report failures as
//! [`StorageError`]; callers log and fall back rather than surfacing them.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Failure reading or writing a persisted preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage facility is reachable (no window, disabled storage, ...).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The facility refused a read.
    #[error("failed to read preference {key}: {reason}")]
    Read { key: String, reason: String },
    /// The facility refused a write (quota, privacy mode, ...).
    #[error("failed to write preference {key}: {reason}")]
    Write { key: String, reason: String },
}

/// String key-value store for user preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `Ok(None)` when unset.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Read `key`, treating every failure as unset.
pub fn read_or_none<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("preference read failed, using default: {e}");
            None
        }
    }
}

/// Write `key`, logging and dropping any failure.
pub fn write_best_effort<S: PreferenceStore + ?Sized>(store: &S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("preference write dropped: {e}");
    }
}

/// In-memory store. Clones share the same backing map.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    available: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self { values: Rc::default(), available: true }
    }

    /// A store whose every access fails with [`StorageError::Unavailable`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self { values: Rc::default(), available: false }
    }

    /// Seed a value without going through [`PreferenceStore::set`].
    #[must_use]
    pub fn with(self, key: &str, value: &str) -> Self {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Direct view of the backing map, ignoring availability.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
