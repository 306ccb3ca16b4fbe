//! Password requirements and strength.

use serde::Serialize;

use code_brew_core::StrengthTier;

use super::ValidationResult;

/// Characters that satisfy the special-character requirement.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Which of the five password requirements a value meets.
///
/// Drives the live checklist under the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PasswordRequirements {
    /// At least eight characters.
    pub length: bool,
    /// At least one ASCII uppercase letter.
    pub uppercase: bool,
    /// At least one ASCII lowercase letter.
    pub lowercase: bool,
    /// At least one ASCII digit.
    pub number: bool,
    /// At least one of [`SPECIAL_CHARACTERS`].
    pub special: bool,
}

impl PasswordRequirements {
    /// Check `password` against every requirement.
    #[must_use]
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    /// Number of requirements met, 0-5.
    #[must_use]
    pub fn met_count(&self) -> usize {
        [
            self.length,
            self.uppercase,
            self.lowercase,
            self.number,
            self.special,
        ]
        .into_iter()
        .filter(|met| *met)
        .count()
    }

    /// Whether every requirement is met.
    #[must_use]
    pub fn all_met(&self) -> bool {
        self.met_count() == 5
    }

    /// Strength tier for the meter.
    #[must_use]
    pub fn strength(&self) -> StrengthTier {
        StrengthTier::from_met_count(self.met_count())
    }
}

/// Full password validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordCheck {
    /// Single-valued field result.
    pub result: ValidationResult,
    /// Per-requirement breakdown.
    pub requirements: PasswordRequirements,
    /// Strength tier.
    pub strength: StrengthTier,
}

/// Validate a registration password.
///
/// An empty password reports "required". Otherwise any unmet requirement
/// produces one generic message; the breakdown is in `requirements`.
#[must_use]
pub fn validate_password(password: &str) -> PasswordCheck {
    let requirements = PasswordRequirements::check(password);
    let result = if password.is_empty() {
        ValidationResult::fail("Password is required")
    } else if !requirements.all_met() {
        ValidationResult::fail("Password does not meet requirements")
    } else {
        ValidationResult::ok()
    };
    PasswordCheck {
        result,
        requirements,
        strength: requirements.strength(),
    }
}
