//! Wire format of the remote catalog.
//!
//! The catalog answers a lookup with a JSON envelope carrying a numeric
//! `status` discriminator (1 = found) and, when found, a `product` object.
//! Every payload field is optional on the wire; absence is preserved all the
//! way into [`ProductRecord`] so consumers can distinguish "not reported"
//! from "reported as zero/empty".

use bitewise_core::{Nutrients, ProductRecord};
use serde::Deserialize;

/// Envelope status value signalling a found product.
pub const STATUS_FOUND: i64 = 1;

/// Top-level lookup response envelope.
#[derive(Debug, Deserialize)]
pub struct LookupEnvelope {
    /// Status discriminator: 1 = found, anything else = not found.
    pub status: i64,
    /// Product payload, present when found.
    #[serde(default)]
    pub product: Option<WireProduct>,
}

impl LookupEnvelope {
    /// Check whether the envelope carries a product.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.status == STATUS_FOUND && self.product.is_some()
    }
}

/// Product payload as the catalog reports it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WireProduct {
    pub product_name: Option<String>,
    pub ingredients_text: Option<String>,
    pub ingredients_analysis_tags: Option<Vec<String>>,
    pub labels_tags: Option<Vec<String>>,
    pub nova_group: Option<i64>,
    pub image_url: Option<String>,
    pub nutriments: Option<WireNutriments>,
}

impl WireProduct {
    /// Convert the wire payload into the domain record.
    ///
    /// Absent optional fields stay absent; only `name` collapses to an
    /// empty string because the record models it as a plain string.
    #[must_use]
    pub fn into_record(self) -> ProductRecord {
        let nutrients = self.nutriments.map(WireNutriments::into_nutrients);

        ProductRecord {
            name: self.product_name.unwrap_or_default(),
            ingredients_text: self.ingredients_text,
            labels_tags: self.labels_tags,
            analysis_tags: self.ingredients_analysis_tags,
            nova_group: self.nova_group,
            image_url: self.image_url,
            nutrients: nutrients.unwrap_or_default(),
        }
    }
}

/// Per-100g nutrient amounts as the catalog reports them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WireNutriments {
    #[serde(rename = "energy_100g")]
    pub energy: Option<f64>,
    #[serde(rename = "proteins_100g")]
    pub proteins: Option<f64>,
    #[serde(rename = "carbohydrates_100g")]
    pub carbohydrates: Option<f64>,
    #[serde(rename = "fat_100g")]
    pub fat: Option<f64>,
    #[serde(rename = "fiber_100g")]
    pub fiber: Option<f64>,
    #[serde(rename = "sodium_100g")]
    pub sodium: Option<f64>,
    #[serde(rename = "sugars_100g")]
    pub sugars: Option<f64>,
}

impl WireNutriments {
    fn into_nutrients(self) -> Nutrients {
        Nutrients {
            energy: self.energy,
            proteins: self.proteins,
            carbohydrates: self.carbohydrates,
            fat: self.fat,
            fiber: self.fiber,
            sodium: self.sodium,
            sugars: self.sugars,
        }
    }
}
