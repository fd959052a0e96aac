//! JSON key/value helpers over a string storage backend
//!
//! Failures are logged and reported as sentinels (`false` / `None`).
//! Nothing is retried.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StorageError, StorageResult};

/// Trait for string key/value stores (e.g. `window.localStorage`)
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove_item(&self, key: &str) -> StorageResult<()>;

    /// Backend name for log lines
    fn name(&self) -> &'static str;
}

/// Store `value` as JSON under `key`
pub fn save_json<B, T>(backend: &B, key: &str, value: &T) -> bool
where
    B: StorageBackend + ?Sized,
    T: Serialize + ?Sized,
{
    let result = serde_json::to_string(value)
        .map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })
        .and_then(|json| backend.set_item(key, &json));

    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(backend = backend.name(), key, error = %err, "error saving to storage");
            false
        }
    }
}

/// Load the JSON value under `key`; `None` when missing or unreadable
pub fn load_json<B, T>(backend: &B, key: &str) -> Option<T>
where
    B: StorageBackend + ?Sized,
    T: DeserializeOwned,
{
    let result = backend.get_item(key).and_then(|item| match item {
        // Empty strings are treated like a missing key
        Some(json) if !json.is_empty() => serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StorageError::Deserialize {
                key: key.to_string(),
                source,
            }),
        _ => Ok(None),
    });

    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(
                backend = backend.name(),
                key,
                error = %err,
                "error loading from storage"
            );
            None
        }
    }
}

pub fn remove<B: StorageBackend + ?Sized>(backend: &B, key: &str) -> bool {
    match backend.remove_item(key) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(
                backend = backend.name(),
                key,
                error = %err,
                "error removing from storage"
            );
            false
        }
    }
}

/// In-memory backend, also used where the browser denies storage access
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Watchlist {
        symbols: Vec<String>,
    }

    /// Backend that rejects every call, like a browser with storage disabled
    struct Denied;

    impl StorageBackend for Denied {
        fn get_item(&self, _: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable)
        }
        fn set_item(&self, _: &str, _: &str) -> StorageResult<()> {
            Err(StorageError::Backend("QuotaExceededError".to_string()))
        }
        fn remove_item(&self, _: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable)
        }
        fn name(&self) -> &'static str {
            "denied"
        }
    }

    #[test]
    fn test_save_load_remove() {
        let storage = MemoryStorage::new();
        let list = Watchlist {
            symbols: vec!["AAPL".to_string(), "MSFT".to_string()],
        };

        assert!(save_json(&storage, "watchlist", &list));
        assert_eq!(load_json::<_, Watchlist>(&storage, "watchlist"), Some(list));

        assert!(remove(&storage, "watchlist"));
        assert!(storage.is_empty());
        assert_eq!(load_json::<_, Watchlist>(&storage, "watchlist"), None);
    }

    #[test]
    fn test_corrupt_value_loads_none() {
        let storage = MemoryStorage::new();
        storage.set_item("watchlist", "{not json").unwrap();
        assert_eq!(load_json::<_, Watchlist>(&storage, "watchlist"), None);
    }

    #[test]
    fn test_backend_failures_return_sentinels() {
        assert!(!save_json(&Denied, "k", &1));
        assert_eq!(load_json::<_, i32>(&Denied, "k"), None);
        assert!(!remove(&Denied, "k"));
    }
}
