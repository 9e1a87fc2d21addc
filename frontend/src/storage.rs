use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

use crate::state::consent::ConsentStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// The browser's `localStorage`, resolved on each call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl ConsentStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            reason: describe(err),
        })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            reason: describe(err),
        })
    }
}
