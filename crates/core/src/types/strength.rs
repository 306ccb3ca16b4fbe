//! Password strength tiers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Strength of a password, derived from how many of the five password
/// requirements it meets.
///
/// | Requirements met | Tier |
/// |---|---|
/// | 0-2 | `Weak` |
/// | 3 | `Fair` |
/// | 4 | `Good` |
/// | 5 | `Strong` |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    #[default]
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthTier {
    /// Map a count of met requirements to a tier.
    #[must_use]
    pub const fn from_met_count(met: usize) -> Self {
        match met {
            0..=2 => Self::Weak,
            3 => Self::Fair,
            4 => Self::Good,
            _ => Self::Strong,
        }
    }

    /// Lowercase label used for CSS classes and meter captions.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
