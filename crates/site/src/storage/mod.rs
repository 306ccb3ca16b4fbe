//! Key-value storage scopes and the best-effort adapter over them.
//!
//! Two scopes exist:
//!
//! - **Durable** - outlives the session (inquiries, favorites). Backed by
//!   [`FileStore`] in a running site.
//! - **Ephemeral** - lives only as long as the session (current user).
//!   Backed by [`MemoryStore`].
//!
//! Backends implement [`KeyValueStore`] and return [`StorageError`] freely.
//! [`StoreAdapter`] sits in front of them and never fails: reads degrade to
//! empty, writes report `false`, and every fault is logged.
//!
//! ## Keys
//!
//! ```text
//! codeBrewInquiries   (durable)    → JSON array of Inquiry
//! favoriteDrinks      (durable)    → JSON array of FavoriteDrink
//! currentUser         (ephemeral)  → JSON object UserSession
//! ```

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use core::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Lifetime class of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreScope {
    /// Survives restarts.
    Durable,
    /// Cleared when the session ends.
    Ephemeral,
}

impl fmt::Display for StoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Durable => f.write_str("durable"),
            Self::Ephemeral => f.write_str("ephemeral"),
        }
    }
}

/// A storage key bound to the scope it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StorageKey {
    name: &'static str,
    scope: StoreScope,
}

impl StorageKey {
    /// A key stored in the durable scope.
    #[must_use]
    pub const fn durable(name: &'static str) -> Self {
        Self {
            name,
            scope: StoreScope::Durable,
        }
    }

    /// A key stored in the ephemeral scope.
    #[must_use]
    pub const fn ephemeral(name: &'static str) -> Self {
        Self {
            name,
            scope: StoreScope::Ephemeral,
        }
    }

    /// The raw key string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The scope this key is bound to.
    #[must_use]
    pub const fn scope(&self) -> StoreScope {
        self.scope
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Storage keys used by the site.
pub mod keys {
    use super::StorageKey;

    /// Contact form submissions.
    pub const INQUIRIES: StorageKey = StorageKey::durable("codeBrewInquiries");

    /// Favorite drinks on the dashboard.
    pub const FAVORITES: StorageKey = StorageKey::durable("favoriteDrinks");

    /// The signed-in user for this session.
    pub const CURRENT_USER: StorageKey = StorageKey::ephemeral("currentUser");
}

/// A string key-value store.
///
/// Implementations may fail on any call; callers go through
/// [`StoreAdapter`], which absorbs those failures.
pub trait KeyValueStore: Send + Sync {
    /// Which scope this store provides.
    fn scope(&self) -> StoreScope;

    /// Read the raw value for `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store is disabled, full, or cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Both store scopes, cheaply cloneable.
#[derive(Clone)]
pub struct Stores {
    durable: Arc<dyn KeyValueStore>,
    ephemeral: Arc<dyn KeyValueStore>,
}

impl Stores {
    /// Bundle a durable and an ephemeral store.
    #[must_use]
    pub fn new(durable: Arc<dyn KeyValueStore>, ephemeral: Arc<dyn KeyValueStore>) -> Self {
        Self { durable, ephemeral }
    }

    /// Two fresh in-memory stores, one per scope.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::new(StoreScope::Durable)),
            Arc::new(MemoryStore::new(StoreScope::Ephemeral)),
        )
    }

    /// The durable store.
    #[must_use]
    pub fn durable(&self) -> &dyn KeyValueStore {
        self.durable.as_ref()
    }

    /// The ephemeral store.
    #[must_use]
    pub fn ephemeral(&self) -> &dyn KeyValueStore {
        self.ephemeral.as_ref()
    }
}

impl fmt::Debug for Stores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stores")
            .field("durable", &self.durable.scope())
            .field("ephemeral", &self.ephemeral.scope())
            .finish()
    }
}

/// Best-effort JSON access to a [`KeyValueStore`].
///
/// No method returns an error. Faults are logged at `warn` and degraded:
/// reads return empty, writes return `false`.
#[derive(Clone, Copy)]
pub struct StoreAdapter<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> StoreAdapter<'a> {
    /// Wrap a store.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Read a JSON array of records.
    ///
    /// Missing key, corrupt JSON, a non-array value, a scope mismatch, or a
    /// failing store all yield an empty vector. Elements that do not decode
    /// as `T` are skipped and logged; the rest are returned in order.
    #[must_use]
    pub fn read<T: DeserializeOwned>(&self, key: StorageKey) -> Vec<T> {
        let elements: Vec<serde_json::Value> = match self.try_read(key) {
            Ok(Some(elements)) => elements,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "storage read failed, using empty collection");
                return Vec::new();
            }
        };

        elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| match serde_json::from_value(element) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(key = %key, index, error = %e, "skipping unreadable record");
                    None
                }
            })
            .collect()
    }

    /// Replace the JSON array stored under `key`.
    ///
    /// Returns `false` if the write was dropped.
    pub fn write<T: Serialize>(&self, key: StorageKey, records: &[T]) -> bool {
        self.write_value(key, records)
    }

    /// Read a single JSON object.
    #[must_use]
    pub fn read_one<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "storage read failed, treating as absent");
                None
            }
        }
    }

    /// Store a single JSON object.
    ///
    /// Returns `false` if the write was dropped.
    pub fn write_one<T: Serialize>(&self, key: StorageKey, value: &T) -> bool {
        self.write_value(key, value)
    }

    /// Remove `key`. Returns `false` if the removal failed.
    pub fn remove(&self, key: StorageKey) -> bool {
        let result = self
            .check_scope(key)
            .and_then(|()| self.store.remove(key.name()));
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "storage remove failed");
                false
            }
        }
    }

    fn try_read<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, StorageError> {
        self.check_scope(key)?;
        match self.store.get(key.name())? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn write_value<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> bool {
        let result = self.check_scope(key).and_then(|()| {
            let raw = serde_json::to_string(value)?;
            self.store.set(key.name(), &raw)
        });
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "storage write dropped");
                false
            }
        }
    }

    fn check_scope(&self, key: StorageKey) -> Result<(), StorageError> {
        let actual = self.store.scope();
        if key.scope() == actual {
            Ok(())
        } else {
            Err(StorageError::WrongScope {
                key: key.name(),
                expected: key.scope(),
                actual,
            })
        }
    }
}
