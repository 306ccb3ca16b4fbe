//! Degraded stores never surface errors to the forms.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use code_brew_site::config::SiteConfig;
use code_brew_site::db::{FavoriteRepository, InquiryRepository};
use code_brew_site::forms::{Field, SimulatedTransport};
use code_brew_site::models::FavoriteDraft;
use code_brew_site::state::SiteState;
use code_brew_site::storage::{KeyValueStore, MemoryStore, StoreScope, Stores};

#[tokio::test]
async fn test_disabled_durable_store_degrades_silently() {
    let durable = Arc::new(MemoryStore::new(StoreScope::Durable));
    durable.set_disabled(true);
    let stores = Stores::new(
        Arc::clone(&durable) as Arc<dyn KeyValueStore>,
        Arc::new(MemoryStore::new(StoreScope::Ephemeral)),
    );
    let state = SiteState::with_parts(
        SiteConfig::default(),
        stores,
        Arc::new(SimulatedTransport::instant()),
    );

    let mut form = state.contact_form();
    form.input(Field::Name, "Al");
    form.input(Field::Email, "a@b.com");
    form.input(Field::Message, "Hello there");
    assert!(form.submit().await.is_ok());

    assert_eq!(InquiryRepository::new(state.stores().durable()).count(), 0);

    durable.set_disabled(false);
    assert_eq!(InquiryRepository::new(state.stores().durable()).count(), 0);
}

#[test]
fn test_quota_exceeded_keeps_previous_favorites() {
    let durable = Arc::new(MemoryStore::with_quota(StoreScope::Durable, 200));
    let repository = FavoriteRepository::new(durable.as_ref());

    let first = repository.add(FavoriteDraft::new("Latte", "Medium"));
    assert_eq!(repository.count(), 1);

    let long_notes = "x".repeat(500);
    repository.add(FavoriteDraft::new("Mocha", "Large").notes(long_notes));
    let stored = repository.list();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.first().map(|d| d.id), Some(first.id));
}

#[test]
fn test_corrupt_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("favoriteDrinks.json"), "{not json").unwrap();
    let config = SiteConfig {
        data_dir: dir.path().to_path_buf(),
        ..SiteConfig::default()
    };
    let state = SiteState::new(config);
    assert!(FavoriteRepository::new(state.stores().durable()).list().is_empty());
}
