//! Session-related types.
//!
//! Types stored in the ephemeral scope for the signed-in visitor.

use serde::{Deserialize, Serialize};

use code_brew_core::Email;

/// Session-stored user identity.
///
/// Only the username and email survive registration. No password is ever
/// stored here or anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Chosen username.
    pub username: String,
    /// Registered email address.
    pub email: Email,
}

/// Pages the account flow redirects to.
pub mod pages {
    /// Members-only favorites dashboard.
    pub const DASHBOARD: &str = "dashboard.html";

    /// Registration page, where visitors without a session are sent.
    pub const REGISTER: &str = "register.html";

    /// Home page, shown after logging out.
    pub const HOME: &str = "index.html";
}
