//! Session-guarded favorites CRUD.

#![allow(clippy::unwrap_used)]

use code_brew_integration_tests::TestSite;
use code_brew_site::db::FavoriteRepository;
use code_brew_site::forms::{Field, SavedFavorite};

#[test]
fn test_dashboard_redirects_without_session() {
    let site = TestSite::new();
    assert_eq!(site.state.dashboard().unwrap_err().to, "register.html");
}

#[test]
fn test_add_then_delete_restores_count() {
    let site = TestSite::new().signed_in("barista");
    let mut dashboard = site.state.dashboard().unwrap();
    let before = dashboard.favorites().len();

    dashboard.input(Field::DrinkName, "Latte");
    dashboard.input(Field::DrinkSize, "Medium");
    let SavedFavorite::Added(latte) = dashboard.submit().unwrap() else {
        panic!("expected a new favorite");
    };
    assert_eq!(dashboard.favorites().len(), before + 1);

    assert!(dashboard.remove(latte.id));
    assert_eq!(dashboard.favorites().len(), before);
}

#[test]
fn test_favorites_survive_logout() {
    let site = TestSite::new().signed_in("barista");
    let mut dashboard = site.state.dashboard().unwrap();
    dashboard.input(Field::DrinkName, "Cortado");
    dashboard.input(Field::DrinkSize, "Small");
    dashboard.input(Field::Customization, "oat milk");
    dashboard.submit().unwrap();

    assert_eq!(dashboard.logout().to, "index.html");
    assert!(site.state.dashboard().is_err());

    let stored = FavoriteRepository::new(site.state.stores().durable()).list();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.first().unwrap().customization, "oat milk");

    let raw = std::fs::read_to_string(site.data_file("favoriteDrinks")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(json[0]["id"].is_i64());
    assert!(json[0]["addedAt"].is_string());
}

#[test]
fn test_rapid_adds_get_distinct_ids() {
    let site = TestSite::new().signed_in("barista");
    let mut dashboard = site.state.dashboard().unwrap();
    for name in ["Latte", "Mocha", "Flat White", "Americano"] {
        dashboard.input(Field::DrinkName, name);
        dashboard.input(Field::DrinkSize, "Large");
        dashboard.submit().unwrap();
    }
    let mut ids: Vec<i64> = dashboard.favorites().iter().map(|d| d.id.as_i64()).collect();
    let count = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), count);
    assert!(ids.windows(2).all(|w| w.first() < w.last()));
}

#[test]
fn test_edit_keeps_identity() {
    let site = TestSite::new().signed_in("barista");
    let mut dashboard = site.state.dashboard().unwrap();
    dashboard.input(Field::DrinkName, "Latte");
    dashboard.input(Field::DrinkSize, "Medium");
    let SavedFavorite::Added(latte) = dashboard.submit().unwrap() else {
        panic!("expected a new favorite");
    };

    assert!(dashboard.begin_edit(latte.id));
    dashboard.input(Field::DrinkName, "Iced Latte");
    assert_eq!(dashboard.submit().unwrap(), SavedFavorite::Updated(latte.id));

    let updated = FavoriteRepository::new(site.state.stores().durable())
        .find_by_id(latte.id)
        .unwrap();
    assert_eq!(updated.name, "Iced Latte");
    assert_eq!(updated.added_at, latte.added_at);
}
