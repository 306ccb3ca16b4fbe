//! Blog article categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a known category slug.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// Category an article is filed under.
///
/// Serialized as its kebab-case slug (e.g. `coffee-culture`), which is also
/// the value used by category filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CoffeeCulture,
    Brewing,
    Community,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::CoffeeCulture, Self::Brewing, Self::Community];

    /// The kebab-case slug.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::CoffeeCulture => "coffee-culture",
            Self::Brewing => "brewing",
            Self::Community => "community",
        }
    }

    /// Human-readable label shown on article cards.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CoffeeCulture => "Coffee Culture",
            Self::Brewing => "Brewing Tips",
            Self::Community => "Community",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(
            "espresso".parse::<Category>(),
            Err(CategoryError("espresso".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Category::CoffeeCulture).unwrap();
        assert_eq!(json, "\"coffee-culture\"");
    }
}
