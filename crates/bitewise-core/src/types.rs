//! Shared types used across the Bitewise application.
//!
//! This module defines the domain types that flow through the lookup and
//! classification pipeline.

use crate::error::BitewiseError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for product barcodes with validation.
///
/// A barcode is one or more ASCII digits. Anything else (letters, spaces,
/// empty input) is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Barcode(String);

impl Barcode {
    /// Create a new `Barcode` from a string.
    ///
    /// # Errors
    /// Returns error if the value is not one or more ASCII digits.
    pub fn new(code: impl Into<String>) -> Result<Self, BitewiseError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that a string is one or more ASCII digits.
    fn validate(code: &str) -> Result<(), BitewiseError> {
        static BARCODE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = BARCODE_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

        if regex.is_match(code) {
            Ok(())
        } else {
            Err(BitewiseError::Validation(format!(
                "invalid barcode: must be one or more digits, got '{code}'"
            )))
        }
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product record resolved from the remote catalog.
///
/// Owned by the calling session and replaced wholesale on each new lookup.
/// Optional fields distinguish "not reported" from "reported as zero/empty";
/// they are never defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name as reported by the catalog (may be empty).
    pub name: String,
    /// Free-form ingredients list, absent when the catalog has none.
    pub ingredients_text: Option<String>,
    /// Label tags (e.g. `en:organic`), absent when not reported.
    pub labels_tags: Option<Vec<String>>,
    /// Ingredient analysis tags (e.g. `en:vegan`), absent when not reported.
    pub analysis_tags: Option<Vec<String>>,
    /// NOVA processing group (1-4), absent = unknown.
    pub nova_group: Option<i64>,
    /// Product image URL.
    pub image_url: Option<String>,
    /// Per-100g nutrient amounts.
    pub nutrients: Nutrients,
}

/// Recognized nutrient keys.
///
/// Used for iterating and rendering the per-100g amounts in [`Nutrients`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy
    Energy,
    /// Proteins
    Proteins,
    /// Carbohydrates
    Carbohydrates,
    /// Fat
    Fat,
    /// Fiber
    Fiber,
    /// Sodium
    Sodium,
    /// Sugars
    Sugars,
}

impl Nutrient {
    /// All recognized nutrients, in display order.
    pub const ALL: [Nutrient; 7] = [
        Nutrient::Energy,
        Nutrient::Proteins,
        Nutrient::Carbohydrates,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Sodium,
        Nutrient::Sugars,
    ];

    /// Get a human-readable display name for the nutrient.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Proteins => "Proteins",
            Self::Carbohydrates => "Carbohydrates",
            Self::Fat => "Fat",
            Self::Fiber => "Fiber",
            Self::Sodium => "Sodium",
            Self::Sugars => "Sugars",
        }
    }

    /// Get the unit the amount is reported in.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Energy => "kJ",
            _ => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-100g nutrient amounts for a product.
///
/// `None` means the catalog did not report the amount; it is NOT zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrients {
    /// Energy per 100g (kJ)
    pub energy: Option<f64>,
    /// Proteins per 100g (g)
    pub proteins: Option<f64>,
    /// Carbohydrates per 100g (g)
    pub carbohydrates: Option<f64>,
    /// Fat per 100g (g)
    pub fat: Option<f64>,
    /// Fiber per 100g (g)
    pub fiber: Option<f64>,
    /// Sodium per 100g (g)
    pub sodium: Option<f64>,
    /// Sugars per 100g (g)
    pub sugars: Option<f64>,
}

impl Nutrients {
    /// Get the reported amount for a nutrient, if any.
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Proteins => self.proteins,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sodium => self.sodium,
            Nutrient::Sugars => self.sugars,
        }
    }

    /// Check whether no nutrient was reported at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Nutrient::ALL.iter().all(|n| self.get(*n).is_none())
    }

    /// Iterate over all recognized nutrients and their reported amounts.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, Option<f64>)> + '_ {
        Nutrient::ALL.into_iter().map(|n| (n, self.get(n)))
    }
}
