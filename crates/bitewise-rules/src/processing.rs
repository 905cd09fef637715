//! NOVA processing-group mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Industrial processing intensity of a product, per the NOVA scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingLevel {
    /// NOVA group 1
    UnprocessedOrMinimal,
    /// NOVA group 2
    CulinaryIngredients,
    /// NOVA group 3
    Processed,
    /// NOVA group 4
    UltraProcessed,
    /// Any other or absent group code
    Unknown,
}

impl ProcessingLevel {
    /// Map a catalog processing-group code to a level.
    ///
    /// Codes 1-4 map to the four NOVA levels; anything else, including an
    /// absent code, maps to [`ProcessingLevel::Unknown`].
    #[must_use]
    pub fn from_group(group: Option<i64>) -> Self {
        match group {
            Some(1) => Self::UnprocessedOrMinimal,
            Some(2) => Self::CulinaryIngredients,
            Some(3) => Self::Processed,
            Some(4) => Self::UltraProcessed,
            _ => Self::Unknown,
        }
    }

    /// Get the fixed human-readable description for the level.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::UnprocessedOrMinimal => "Unprocessed or minimally processed",
            Self::CulinaryIngredients => "Processed culinary ingredients",
            Self::Processed => "Processed foods",
            Self::UltraProcessed => "Ultra-processed foods",
            Self::Unknown => "Unknown processing level",
        }
    }
}

impl fmt::Display for ProcessingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_groups() {
        assert_eq!(
            ProcessingLevel::from_group(Some(1)).description(),
            "Unprocessed or minimally processed"
        );
        assert_eq!(
            ProcessingLevel::from_group(Some(2)).description(),
            "Processed culinary ingredients"
        );
        assert_eq!(
            ProcessingLevel::from_group(Some(3)).description(),
            "Processed foods"
        );
        assert_eq!(
            ProcessingLevel::from_group(Some(4)).description(),
            "Ultra-processed foods"
        );
    }

    #[test]
    fn test_out_of_range_groups_are_unknown() {
        for group in [Some(0), Some(5), Some(-1), Some(i64::MAX), None] {
            assert_eq!(
                ProcessingLevel::from_group(group),
                ProcessingLevel::Unknown,
                "group {group:?} should map to Unknown"
            );
            assert_eq!(
                ProcessingLevel::from_group(group).description(),
                "Unknown processing level"
            );
        }
    }

    #[test]
    fn test_display_matches_description() {
        let level = ProcessingLevel::UltraProcessed;
        assert_eq!(level.to_string(), level.description());
    }
}
