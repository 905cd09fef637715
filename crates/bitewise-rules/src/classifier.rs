//! Dietary suitability classification.
//!
//! Pure keyword matching over a product's ingredients text. No network, no
//! state, no failure modes: absent or empty ingredients yield an all-true
//! verdict.

use crate::restricted::DietCategory;
use bitewise_core::ProductRecord;
use serde::{Deserialize, Serialize};

/// Per-category suitability verdicts for one product.
///
/// Derived from a [`ProductRecord`] on demand; never cached or mutated
/// independently of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryVerdict {
    /// True iff no vegan-restricted ingredient matched.
    pub vegan: bool,
    /// True iff no vegetarian-restricted ingredient matched.
    pub vegetarian: bool,
    /// True iff no halal-restricted ingredient matched.
    pub halal: bool,
    /// Comma-joined matched keywords of the first failing category in
    /// priority order (halal, vegan, vegetarian). Absent when all pass.
    ///
    /// Only one category's reason is ever reported even when several fail;
    /// callers that need per-category detail use [`matched_keywords`].
    pub violation_reason: Option<String>,
}

impl DietaryVerdict {
    /// Check suitability for a single category.
    #[must_use]
    pub fn suitable_for(&self, category: DietCategory) -> bool {
        match category {
            DietCategory::Halal => self.halal,
            DietCategory::Vegan => self.vegan,
            DietCategory::Vegetarian => self.vegetarian,
        }
    }

    /// Check whether every category passed.
    #[must_use]
    pub fn all_clear(&self) -> bool {
        self.halal && self.vegan && self.vegetarian
    }
}

/// Classify a product record into per-category verdicts.
///
/// Only `ingredients_text` is read; absence is treated as an empty string.
#[must_use]
pub fn classify(record: &ProductRecord) -> DietaryVerdict {
    classify_text(record.ingredients_text.as_deref().unwrap_or(""))
}

/// Classify a raw ingredients string into per-category verdicts.
///
/// Matching is case-insensitive substring search with no word-boundary
/// requirement: a keyword occurring inside a larger word still counts.
#[must_use]
pub fn classify_text(ingredients: &str) -> DietaryVerdict {
    let normalized = ingredients.to_lowercase();

    let mut verdict = DietaryVerdict {
        vegan: true,
        vegetarian: true,
        halal: true,
        violation_reason: None,
    };

    for category in DietCategory::PRIORITY_ORDER {
        let matched = matched_in_normalized(&normalized, category);
        if matched.is_empty() {
            continue;
        }

        match category {
            DietCategory::Halal => verdict.halal = false,
            DietCategory::Vegan => verdict.vegan = false,
            DietCategory::Vegetarian => verdict.vegetarian = false,
        }

        // First failing category in priority order supplies the reason
        if verdict.violation_reason.is_none() {
            verdict.violation_reason = Some(matched.join(", "));
        }
    }

    verdict
}

/// List the restricted keywords of one category that occur in the text.
///
/// Keywords are returned in their fixed set order.
#[must_use]
pub fn matched_keywords(ingredients: &str, category: DietCategory) -> Vec<&'static str> {
    matched_in_normalized(&ingredients.to_lowercase(), category)
}

fn matched_in_normalized(normalized: &str, category: DietCategory) -> Vec<&'static str> {
    category
        .restricted_keywords()
        .iter()
        .filter(|keyword| normalized.contains(*keyword))
        .copied()
        .collect()
}
