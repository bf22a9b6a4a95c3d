//! `localStorage`-backed preference store.
//!
//! TRADE-OFFS
//! ==========
//! Storage may be missing (no window), disabled (privacy mode), or throw on
//! access. All of those become [`StorageError`] values; the controllers treat
//! them as "use default" and "drop the write".

use web_sys::Storage;

use super::describe;
use crate::prefs::{PreferenceStore, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => {
                log::debug!("localStorage access threw: {}", describe(&e));
                Err(StorageError::Unavailable)
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_owned(),
            reason: describe(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            reason: describe(&e),
        })
    }
}
