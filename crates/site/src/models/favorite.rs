//! Favorite drinks on the member dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use code_brew_core::FavoriteId;

/// A saved favorite drink.
///
/// `id` is assigned once by the repository and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDrink {
    pub id: FavoriteId,
    pub name: String,
    pub size: String,
    #[serde(default)]
    pub customization: String,
    #[serde(default)]
    pub notes: String,
    pub added_at: DateTime<Utc>,
}

/// The mutable fields of a [`FavoriteDrink`], as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteDraft {
    pub name: String,
    pub size: String,
    pub customization: String,
    pub notes: String,
}

impl FavoriteDraft {
    /// A draft with just a name and size.
    #[must_use]
    pub fn new(name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            ..Self::default()
        }
    }

    /// Set the customization.
    #[must_use]
    pub fn customization(mut self, customization: impl Into<String>) -> Self {
        self.customization = customization.into();
        self
    }

    /// Set the notes.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl FavoriteDrink {
    /// Create a record from a draft.
    #[must_use]
    pub fn from_draft(id: FavoriteId, draft: FavoriteDraft, added_at: DateTime<Utc>) -> Self {
        let mut drink = Self {
            id,
            name: String::new(),
            size: String::new(),
            customization: String::new(),
            notes: String::new(),
            added_at,
        };
        drink.apply(draft);
        drink
    }

    /// Replace the mutable fields, trimming each. `id` and `added_at` are kept.
    pub fn apply(&mut self, draft: FavoriteDraft) {
        self.name = draft.name.trim().to_string();
        self.size = draft.size.trim().to_string();
        self.customization = draft.customization.trim().to_string();
        self.notes = draft.notes.trim().to_string();
    }
}
