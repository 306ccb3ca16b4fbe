//! Field validation rules.
//!
//! Every rule is a pure function from a raw field value to a
//! [`ValidationResult`]. When several conditions fail, the earliest check in
//! the rule wins and only its message is reported.
//!
//! Text values are trimmed before checking; passwords are not. Lengths count
//! characters, not bytes.

mod password;

pub use password::{PasswordCheck, PasswordRequirements, SPECIAL_CHARACTERS, validate_password};

use serde::Serialize;

use code_brew_core::{Email, EmailError};

/// Minimum length of a contact name.
pub const MIN_NAME_LENGTH: usize = 2;
/// Minimum length of a contact message.
pub const MIN_MESSAGE_LENGTH: usize = 10;
/// Minimum length of a username.
pub const MIN_USERNAME_LENGTH: usize = 3;
/// Maximum length of a username.
pub const MAX_USERNAME_LENGTH: usize = 20;
/// Minimum length of a favorite drink name.
pub const MIN_DRINK_NAME_LENGTH: usize = 2;
/// Sizes offered for a favorite drink.
pub const DRINK_SIZES: [&str; 3] = ["Small", "Medium", "Large"];

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the value passed.
    pub valid: bool,
    /// Message to show next to the field; empty when valid.
    pub message: String,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result with a message.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Validate a contact name.
#[must_use]
pub fn validate_name(value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        ValidationResult::fail("Name is required")
    } else if value.chars().count() < MIN_NAME_LENGTH {
        ValidationResult::fail(format!(
            "Name is too short (minimum {MIN_NAME_LENGTH} characters)"
        ))
    } else {
        ValidationResult::ok()
    }
}

/// Validate an email address against the `local@domain.tld` shape.
#[must_use]
pub fn validate_email(value: &str) -> ValidationResult {
    match Email::parse(value.trim()) {
        Ok(_) => ValidationResult::ok(),
        Err(EmailError::Empty) => ValidationResult::fail("Email is required"),
        Err(e) => {
            tracing::debug!(error = %e, "email rejected");
            ValidationResult::fail("Email has an invalid format (expected name@example.com)")
        }
    }
}

/// Validate a contact message.
#[must_use]
pub fn validate_message(value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        ValidationResult::fail("Message is required")
    } else if value.chars().count() < MIN_MESSAGE_LENGTH {
        ValidationResult::fail(format!(
            "Message is too short (minimum {MIN_MESSAGE_LENGTH} characters)"
        ))
    } else {
        ValidationResult::ok()
    }
}

/// Validate a username: 3-20 ASCII letters or digits.
#[must_use]
pub fn validate_username(value: &str) -> ValidationResult {
    let value = value.trim();
    let length = value.chars().count();
    if length < MIN_USERNAME_LENGTH {
        ValidationResult::fail(format!(
            "Username is too short (minimum {MIN_USERNAME_LENGTH} characters)"
        ))
    } else if length > MAX_USERNAME_LENGTH {
        ValidationResult::fail(format!(
            "Username is too long (maximum {MAX_USERNAME_LENGTH} characters)"
        ))
    } else if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        ValidationResult::fail("Username contains invalid characters (letters and numbers only)")
    } else {
        ValidationResult::ok()
    }
}

/// Validate that the confirmation matches the password.
#[must_use]
pub fn validate_confirm_password(confirm: &str, password: &str) -> ValidationResult {
    if confirm.is_empty() {
        ValidationResult::fail("Password confirmation is required")
    } else if confirm != password {
        ValidationResult::fail("Password confirmation does not match")
    } else {
        ValidationResult::ok()
    }
}

/// Validate that the terms checkbox is ticked.
#[must_use]
pub fn validate_terms(accepted: bool) -> ValidationResult {
    if accepted {
        ValidationResult::ok()
    } else {
        ValidationResult::fail("You must accept the terms and conditions")
    }
}

/// Validate a favorite drink name.
#[must_use]
pub fn validate_drink_name(value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        ValidationResult::fail("Drink name is required")
    } else if value.chars().count() < MIN_DRINK_NAME_LENGTH {
        ValidationResult::fail(format!(
            "Drink name is too short (minimum {MIN_DRINK_NAME_LENGTH} characters)"
        ))
    } else {
        ValidationResult::ok()
    }
}

/// Validate a favorite drink size against [`DRINK_SIZES`].
#[must_use]
pub fn validate_drink_size(value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        ValidationResult::fail("Size is required")
    } else if !DRINK_SIZES.contains(&value) {
        ValidationResult::fail("Please choose a valid size")
    } else {
        ValidationResult::ok()
    }
}
