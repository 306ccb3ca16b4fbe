//! Members-only favorites dashboard.
//!
//! One form serves both adding and editing. In [`EditorMode::Editing`] a
//! submit replaces the edited record's fields instead of appending.

use chrono::Utc;
use tracing::instrument;

use code_brew_core::FavoriteId;

use super::{Field, FormController, FormSettings, Redirect};
use crate::db::{FavoriteRepository, SessionGuard, SessionStore};
use crate::error::SubmitError;
use crate::listing::FavoriteCard;
use crate::models::session::pages;
use crate::models::{FavoriteDraft, FavoriteDrink, UserSession};
use crate::storage::Stores;
use crate::validation::{ValidationResult, validate_drink_name, validate_drink_size};

const FIELDS: &[Field] = &[
    Field::DrinkName,
    Field::DrinkSize,
    Field::Customization,
    Field::Notes,
];
const VALIDATED: &[Field] = &[Field::DrinkName, Field::DrinkSize];

fn validate(form: &FormController, field: Field) -> ValidationResult {
    match field {
        Field::DrinkName => validate_drink_name(form.value(Field::DrinkName)),
        Field::DrinkSize => validate_drink_size(form.value(Field::DrinkSize)),
        _ => ValidationResult::ok(),
    }
}

/// Whether the dashboard form adds a new favorite or edits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Adding,
    Editing(FavoriteId),
}

/// What a dashboard submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedFavorite {
    /// A new favorite was appended.
    Added(FavoriteDrink),
    /// The edited favorite was updated in place.
    Updated(FavoriteId),
    /// The edited favorite no longer exists; nothing changed.
    Missing(FavoriteId),
}

/// The signed-in visitor's favorites.
pub struct FavoritesDashboard {
    user: UserSession,
    form: FormController,
    mode: EditorMode,
    stores: Stores,
}

impl FavoritesDashboard {
    /// Open the dashboard for the signed-in visitor.
    ///
    /// # Errors
    ///
    /// Returns the registration page redirect if nobody is signed in.
    pub fn open(stores: Stores, settings: &FormSettings) -> Result<Self, Redirect> {
        match SessionStore::new(stores.ephemeral()).guard() {
            SessionGuard::Active(user) => Ok(Self {
                user,
                form: FormController::new(FIELDS, VALIDATED, validate, settings.banner_ttl),
                mode: EditorMode::Adding,
                stores,
            }),
            SessionGuard::Redirect(to) => {
                tracing::debug!(to, "dashboard requires a session");
                Err(Redirect { to })
            }
        }
    }

    /// The signed-in visitor.
    #[must_use]
    pub const fn user(&self) -> &UserSession {
        &self.user
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Welcome back, {}!", self.user.username)
    }

    /// Stored favorites in insertion order.
    #[must_use]
    pub fn favorites(&self) -> Vec<FavoriteDrink> {
        self.repository().list()
    }

    /// Card view models for the favorites list.
    #[must_use]
    pub fn cards(&self) -> Vec<FavoriteCard> {
        self.favorites().iter().map(FavoriteCard::from).collect()
    }

    #[must_use]
    pub const fn form(&self) -> &FormController {
        &self.form
    }

    #[must_use]
    pub const fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.form.input(field, value);
    }

    pub fn blur(&mut self, field: Field) -> ValidationResult {
        self.form.blur(field)
    }

    /// Load a favorite into the form for editing.
    ///
    /// Returns `false`, changing nothing, if no favorite has `id`.
    pub fn begin_edit(&mut self, id: FavoriteId) -> bool {
        let Some(drink) = self.repository().find_by_id(id) else {
            tracing::debug!(%id, "edit requested for missing favorite");
            return false;
        };
        self.form.load(&[
            (Field::DrinkName, drink.name.as_str()),
            (Field::DrinkSize, drink.size.as_str()),
            (Field::Customization, drink.customization.as_str()),
            (Field::Notes, drink.notes.as_str()),
        ]);
        self.mode = EditorMode::Editing(id);
        true
    }

    /// Leave edit mode and clear the form.
    pub fn cancel_edit(&mut self) {
        self.form.reset();
        self.mode = EditorMode::Adding;
    }

    /// Validate and save the form: append in add mode, update in edit mode.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Invalid` if the drink name or size fails
    /// validation. Nothing is saved.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn submit(&mut self) -> Result<SavedFavorite, SubmitError> {
        let repository = FavoriteRepository::new(self.stores.durable());
        let flight = self.form.begin_submit()?;
        let form = flight.form();
        let draft = FavoriteDraft::new(form.value(Field::DrinkName), form.value(Field::DrinkSize))
            .customization(form.value(Field::Customization))
            .notes(form.value(Field::Notes));

        let saved = match self.mode {
            EditorMode::Adding => {
                let drink = repository.add(draft);
                flight.succeed("Favorite added!", Utc::now());
                SavedFavorite::Added(drink)
            }
            EditorMode::Editing(id) => {
                if repository.update_by_id(id, draft) {
                    flight.succeed("Favorite updated!", Utc::now());
                    SavedFavorite::Updated(id)
                } else {
                    flight.fail("That favorite no longer exists.");
                    SavedFavorite::Missing(id)
                }
            }
        };
        self.mode = EditorMode::Adding;
        Ok(saved)
    }

    /// Delete a favorite. Editing it is cancelled.
    ///
    /// Returns `false` if no favorite has `id`.
    pub fn remove(&mut self, id: FavoriteId) -> bool {
        let removed = self.repository().delete_by_id(id);
        if removed {
            tracing::info!(%id, "favorite removed");
            let banner = self.form.success_banner("Favorite removed.", Utc::now());
            self.form.show_banner(banner);
            if self.mode == EditorMode::Editing(id) {
                self.cancel_edit();
            }
        }
        removed
    }

    /// End the session and leave the dashboard.
    #[must_use]
    pub fn logout(self) -> Redirect {
        SessionStore::new(self.stores.ephemeral()).sign_out();
        tracing::debug!(username = %self.user.username, "logged out");
        Redirect { to: pages::HOME }
    }

    fn repository(&self) -> FavoriteRepository<'_> {
        FavoriteRepository::new(self.stores.durable())
    }
}

impl std::fmt::Debug for FavoritesDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesDashboard")
            .field("user", &self.user.username)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
