//! Record repositories over the key-value stores.
//!
//! # Collections
//!
//! - `codeBrewInquiries` - append-only contact inquiries ([`InquiryRepository`])
//! - `favoriteDrinks` - favorite drinks CRUD ([`FavoriteRepository`])
//! - `currentUser` - the single session record ([`SessionStore`])
//!
//! Every mutation is a read-modify-write of the whole collection: load the
//! array, change it in memory, write the array back. There are no partial
//! writes.

pub mod favorites;
pub mod inquiries;
pub mod session;

pub use favorites::FavoriteRepository;
pub use inquiries::InquiryRepository;
pub use session::{SessionGuard, SessionStore};

use core::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::{KeyValueStore, StorageKey, StoreAdapter};

/// A record persisted as one element of a JSON array.
pub trait Record: Serialize + DeserializeOwned {
    /// Key of the collection this record type lives in.
    const KEY: StorageKey;
}

/// A record with a stable identifier and updatable fields.
pub trait Identified: Record {
    /// Identifier type.
    type Id: Copy + PartialEq + fmt::Display;
    /// Fields an update replaces.
    type Patch;

    /// This record's identifier.
    fn id(&self) -> Self::Id;

    /// Replace the mutable fields in place.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Generic list-of-records access for one collection.
pub struct Collection<'a, T> {
    adapter: StoreAdapter<'a>,
    _record: core::marker::PhantomData<fn() -> T>,
}

impl<'a, T: Record> Collection<'a, T> {
    /// Open the collection in `store`.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            adapter: StoreAdapter::new(store),
            _record: core::marker::PhantomData,
        }
    }

    /// Every record in insertion order. Empty if the store is unreadable.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.adapter.read(T::KEY)
    }

    /// Replace the whole collection. Returns `false` if the write was dropped.
    pub fn save(&self, records: &[T]) -> bool {
        self.adapter.write(T::KEY, records)
    }

    /// Append one record and persist. Returns `false` if the write was dropped.
    pub fn append(&self, record: T) -> bool {
        let mut records = self.list();
        records.push(record);
        self.save(&records)
    }
}

impl<T: Identified> Collection<'_, T> {
    /// First record with `id`.
    #[must_use]
    pub fn find_by_id(&self, id: T::Id) -> Option<T> {
        self.list().into_iter().find(|r| r.id() == id)
    }

    /// Patch the first record with `id` and persist.
    ///
    /// Returns whether a record matched. Nothing is written when none does.
    pub fn update_by_id(&self, id: T::Id, patch: T::Patch) -> bool {
        let mut records = self.list();
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            tracing::debug!(key = %T::KEY, id = %id, "update skipped, no matching record");
            return false;
        };
        record.apply_patch(patch);
        self.save(&records);
        true
    }

    /// Remove the first record with `id` and persist.
    ///
    /// Returns whether a record was removed. Nothing is written when none was.
    pub fn delete_by_id(&self, id: T::Id) -> bool {
        let mut records = self.list();
        let Some(index) = records.iter().position(|r| r.id() == id) else {
            tracing::debug!(key = %T::KEY, id = %id, "delete skipped, no matching record");
            return false;
        };
        records.remove(index);
        self.save(&records);
        true
    }
}
