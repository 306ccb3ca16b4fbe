//! Favorite drink repository.

use chrono::{DateTime, Utc};

use code_brew_core::FavoriteId;

use crate::models::{FavoriteDraft, FavoriteDrink};
use crate::storage::{KeyValueStore, StorageKey, keys};

use super::{Collection, Identified, Record};

impl Record for FavoriteDrink {
    const KEY: StorageKey = keys::FAVORITES;
}

impl Identified for FavoriteDrink {
    type Id = FavoriteId;
    type Patch = FavoriteDraft;

    fn id(&self) -> FavoriteId {
        self.id
    }

    fn apply_patch(&mut self, patch: FavoriteDraft) {
        self.apply(patch);
    }
}

/// Pick an id for a record created at `now`.
///
/// Ids are creation times in milliseconds, bumped past the largest existing
/// id so two records created in the same millisecond never collide.
#[must_use]
pub fn next_id(existing: &[FavoriteDrink], now: DateTime<Utc>) -> FavoriteId {
    let stamp = now.timestamp_millis();
    let next = existing
        .iter()
        .map(|d| d.id.as_i64())
        .max()
        .map_or(stamp, |max| stamp.max(max.saturating_add(1)));
    FavoriteId::new(next)
}

/// Repository for favorite drinks.
pub struct FavoriteRepository<'a> {
    records: Collection<'a, FavoriteDrink>,
}

impl<'a> FavoriteRepository<'a> {
    /// Create a new favorites repository over the durable store.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            records: Collection::new(store),
        }
    }

    /// All favorites in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<FavoriteDrink> {
        self.records.list()
    }

    /// Number of stored favorites.
    #[must_use]
    pub fn count(&self) -> usize {
        self.list().len()
    }

    /// Get a favorite by ID.
    #[must_use]
    pub fn find_by_id(&self, id: FavoriteId) -> Option<FavoriteDrink> {
        self.records.find_by_id(id)
    }

    /// Add a favorite created now.
    pub fn add(&self, draft: FavoriteDraft) -> FavoriteDrink {
        self.add_at(draft, Utc::now())
    }

    /// Add a favorite created at `now`.
    ///
    /// The returned record carries its assigned id even if the store dropped
    /// the write.
    pub fn add_at(&self, draft: FavoriteDraft, now: DateTime<Utc>) -> FavoriteDrink {
        let mut records = self.list();
        let drink = FavoriteDrink::from_draft(next_id(&records, now), draft, now);
        records.push(drink.clone());
        if self.records.save(&records) {
            tracing::info!(id = %drink.id, name = %drink.name, "favorite added");
        }
        drink
    }

    /// Replace the name, size, customization and notes of a favorite.
    ///
    /// Returns `false` if no favorite has `id`.
    pub fn update_by_id(&self, id: FavoriteId, draft: FavoriteDraft) -> bool {
        self.records.update_by_id(id, draft)
    }

    /// Delete a favorite.
    ///
    /// Returns `false` if no favorite has `id`.
    pub fn delete_by_id(&self, id: FavoriteId) -> bool {
        self.records.delete_by_id(id)
    }

    /// Remove every favorite. Returns `false` if the write was dropped.
    pub fn clear(&self) -> bool {
        self.records.save(&[])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::storage::{MemoryStore, StoreScope};

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_add_then_delete_restores_count() {
        let store = MemoryStore::new(StoreScope::Durable);
        let repo = FavoriteRepository::new(&store);
        repo.add(FavoriteDraft::new("Mocha", "Small"));
        let before = repo.count();

        let latte = repo.add(FavoriteDraft::new("Latte", "Medium"));
        assert_eq!(repo.count(), before + 1);
        assert!(repo.delete_by_id(latte.id));
        assert_eq!(repo.count(), before);
    }

    #[test]
    fn test_ids_are_unique_within_same_millisecond() {
        let store = MemoryStore::new(StoreScope::Durable);
        let repo = FavoriteRepository::new(&store);
        let now = at(1_700_000_000_000);
        let a = repo.add_at(FavoriteDraft::new("Latte", "Medium"), now);
        let b = repo.add_at(FavoriteDraft::new("Mocha", "Large"), now);
        let c = repo.add_at(FavoriteDraft::new("Chai", "Small"), now);
        assert_eq!(a.id, FavoriteId::new(1_700_000_000_000));
        assert_eq!(b.id, FavoriteId::new(1_700_000_000_001));
        assert_eq!(c.id, FavoriteId::new(1_700_000_000_002));
    }

    #[test]
    fn test_id_follows_clock_when_ahead() {
        let existing = vec![FavoriteDrink::from_draft(
            FavoriteId::new(10),
            FavoriteDraft::new("Latte", "Medium"),
            at(10),
        )];
        assert_eq!(next_id(&existing, at(500)), FavoriteId::new(500));
        assert_eq!(next_id(&[], at(42)), FavoriteId::new(42));
    }

    #[test]
    fn test_update_replaces_mutable_fields_in_place() {
        let store = MemoryStore::new(StoreScope::Durable);
        let repo = FavoriteRepository::new(&store);
        let first = repo.add_at(FavoriteDraft::new("Latte", "Medium"), at(1));
        let second = repo.add_at(FavoriteDraft::new("Mocha", "Small"), at(2));

        let patch = FavoriteDraft::new("Oat Latte", "Large")
            .customization("oat milk")
            .notes("weekdays");
        assert!(repo.update_by_id(first.id, patch));

        let list = repo.list();
        assert_eq!(list[0].id, first.id);
        assert_eq!(list[0].name, "Oat Latte");
        assert_eq!(list[0].customization, "oat milk");
        assert_eq!(list[0].added_at, first.added_at);
        assert_eq!(list[1], second);
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let store = MemoryStore::new(StoreScope::Durable);
        let repo = FavoriteRepository::new(&store);
        repo.add_at(FavoriteDraft::new("Latte", "Medium"), at(1));
        let before = repo.list();
        assert!(!repo.update_by_id(FavoriteId::new(999), FavoriteDraft::new("X", "Small")));
        assert_eq!(repo.list(), before);
    }

    #[test]
    fn test_delete_absent_id_leaves_collection_unchanged() {
        let store = MemoryStore::new(StoreScope::Durable);
        let repo = FavoriteRepository::new(&store);
        repo.add_at(FavoriteDraft::new("Latte", "Medium"), at(1));
        repo.add_at(FavoriteDraft::new("Mocha", "Small"), at(2));
        let before = repo.list();
        assert!(!repo.delete_by_id(FavoriteId::new(12345)));
        assert_eq!(repo.list(), before);
    }

    #[test]
    fn test_find_by_id() {
        let store = MemoryStore::new(StoreScope::Durable);
        let repo = FavoriteRepository::new(&store);
        let latte = repo.add_at(FavoriteDraft::new("Latte", "Medium"), at(1));
        assert_eq!(repo.find_by_id(latte.id), Some(latte));
        assert_eq!(repo.find_by_id(FavoriteId::new(0)), None);
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new(StoreScope::Durable);
        let repo = FavoriteRepository::new(&store);
        repo.add(FavoriteDraft::new("Latte", "Medium"));
        assert!(repo.clear());
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_add_keeps_readable_records_next_to_a_bad_one() {
        let store = MemoryStore::new(StoreScope::Durable);
        store
            .set(
                "favoriteDrinks",
                r#"[{"id":1,"name":"Latte","size":"Medium","addedAt":"2024-03-01T09:00:00Z"},
                    {"id":2,"name":"Mocha","size":"Large","addedAt":1709283600000}]"#,
            )
            .unwrap();
        let repo = FavoriteRepository::new(&store);
        assert_eq!(repo.count(), 1);

        let chai = repo.add_at(FavoriteDraft::new("Chai", "Small"), at(1_700_000_000_000));
        let names: Vec<String> = repo.list().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Latte", "Chai"]);
        assert_eq!(repo.find_by_id(chai.id), Some(chai));
    }

    #[test]
    fn test_unavailable_store_reads_empty_and_add_is_not_fatal() {
        let store = MemoryStore::new(StoreScope::Durable);
        store.set_disabled(true);
        let repo = FavoriteRepository::new(&store);
        let drink = repo.add(FavoriteDraft::new("Latte", "Medium"));
        assert_eq!(drink.name, "Latte");
        assert!(repo.list().is_empty());
    }
}
