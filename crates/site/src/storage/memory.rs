//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{KeyValueStore, StoreScope};
use crate::error::StorageError;

/// A key-value store held in process memory.
///
/// Used for the ephemeral scope, and as a durable stand-in in tests. It can
/// be switched off or given a byte quota to reproduce a disabled or full
/// store.
#[derive(Debug)]
pub struct MemoryStore {
    scope: StoreScope,
    entries: Mutex<HashMap<String, String>>,
    disabled: AtomicBool,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty, unlimited store for `scope`.
    #[must_use]
    pub fn new(scope: StoreScope) -> Self {
        Self {
            scope,
            entries: Mutex::new(HashMap::new()),
            disabled: AtomicBool::new(false),
            quota: None,
        }
    }

    /// Create an empty store that rejects writes once the stored values
    /// would exceed `quota` bytes in total.
    #[must_use]
    pub fn with_quota(scope: StoreScope, quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::new(scope)
        }
    }

    /// Turn the store off (every call fails) or back on.
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    /// Drop every entry, as when a session ends.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the store is disabled.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.entries()?.clear();
        Ok(())
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        if self.disabled.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("store is disabled".to_string()));
        }
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn scope(&self) -> StoreScope {
        self.scope
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries()?;
        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > limit {
                return Err(StorageError::QuotaExceeded { limit });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}
