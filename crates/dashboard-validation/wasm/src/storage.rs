//! `window.localStorage` backend

use dashboard_validation_core::{StorageBackend, StorageError, StorageResult};

use crate::dom::window;

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the page's local storage; fails when the browser denies access
    pub fn open() -> StorageResult<Self> {
        let window = window().map_err(|_| StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|err| StorageError::Backend(format!("{:?}", err)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{:?}", err)))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{:?}", err)))
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|err| StorageError::Backend(format!("{:?}", err)))
    }

    fn name(&self) -> &'static str {
        "localStorage"
    }
}
