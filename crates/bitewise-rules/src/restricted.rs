//! Restricted-ingredient reference data.
//!
//! Three fixed sets of lowercase keywords, one per dietary category. The
//! sets are process-wide constants defined at compile time; no mutation
//! capability is exposed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ingredients that disqualify a product from being halal.
pub const HALAL_EXCLUDED: &[&str] = &[
    "alcohol",
    "wine",
    "beer",
    "pork",
    "bacon",
    "ham",
    "gelatin",
    "lard",
    "pepsin",
    "carmine",
    "cochineal",
    "shellac",
    "vanilla extract",
];

/// Ingredients that disqualify a product from being vegan.
pub const VEGAN_EXCLUDED: &[&str] = &[
    "milk",
    "egg",
    "honey",
    "gelatin",
    "whey",
    "casein",
    "lactose",
    "meat",
    "fish",
    "shellfish",
    "royal jelly",
    "carmine",
    "isinglass",
    "lanolin",
];

/// Ingredients that disqualify a product from being vegetarian.
pub const VEGETARIAN_EXCLUDED: &[&str] = &[
    "meat",
    "fish",
    "shellfish",
    "gelatin",
    "rennet",
    "carmine",
    "lard",
];

/// A dietary category a product can be suitable for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietCategory {
    /// Halal
    Halal,
    /// Vegan
    Vegan,
    /// Vegetarian
    Vegetarian,
}

impl DietCategory {
    /// All categories, in the fixed evaluation priority order.
    ///
    /// The order matters: the violation reason reported by the classifier
    /// comes from the first failing category in this order.
    pub const PRIORITY_ORDER: [DietCategory; 3] =
        [DietCategory::Halal, DietCategory::Vegan, DietCategory::Vegetarian];

    /// Get a human-readable display name for the category.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Halal => "Halal",
            Self::Vegan => "Vegan",
            Self::Vegetarian => "Vegetarian",
        }
    }

    /// Get the restricted-keyword set for the category.
    #[must_use]
    pub fn restricted_keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Halal => HALAL_EXCLUDED,
            Self::Vegan => VEGAN_EXCLUDED,
            Self::Vegetarian => VEGETARIAN_EXCLUDED,
        }
    }
}

impl fmt::Display for DietCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_lowercase() {
        for category in DietCategory::PRIORITY_ORDER {
            for keyword in category.restricted_keywords() {
                assert_eq!(
                    *keyword,
                    keyword.to_lowercase(),
                    "keyword '{keyword}' in {category} set must be lowercase"
                );
            }
        }
    }

    #[test]
    fn test_sets_are_populated() {
        assert_eq!(HALAL_EXCLUDED.len(), 13);
        assert_eq!(VEGAN_EXCLUDED.len(), 14);
        assert_eq!(VEGETARIAN_EXCLUDED.len(), 7);
    }

    #[test]
    fn test_gelatin_restricted_everywhere() {
        for category in DietCategory::PRIORITY_ORDER {
            assert!(
                category.restricted_keywords().contains(&"gelatin"),
                "gelatin should be restricted for {category}"
            );
        }
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            DietCategory::PRIORITY_ORDER,
            [DietCategory::Halal, DietCategory::Vegan, DietCategory::Vegetarian]
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(DietCategory::Halal.to_string(), "Halal");
        assert_eq!(DietCategory::Vegetarian.to_string(), "Vegetarian");
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&DietCategory::Vegan).expect("serialize category");
        assert_eq!(json, "\"vegan\"");
    }
}
