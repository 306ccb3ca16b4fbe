//! Domain models persisted by the site.
//!
//! All persisted shapes serialize with camelCase keys so stored JSON reads
//! `submittedAt`, `addedAt`, and so on.

pub mod favorite;
pub mod inquiry;
pub mod session;

pub use favorite::{FavoriteDraft, FavoriteDrink};
pub use inquiry::{DEFAULT_SUBJECT, Inquiry};
pub use session::UserSession;
