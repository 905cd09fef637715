//! Output payloads for the lookup and scan commands.

use crate::output::Render;
use bitewise_core::ProductRecord;
use bitewise_rules::{classify, DietaryVerdict, DietCategory, ProcessingLevel};
use serde::Serialize;
use std::io::Write;

/// Combined report for one resolved product: the record plus the verdicts
/// derived from it. Recomputed from the record on every render, never cached.
#[derive(Debug, Serialize)]
pub struct ProductReport {
    /// Barcode that was looked up.
    pub barcode: String,
    /// The catalog record.
    pub product: ProductRecord,
    /// Dietary suitability verdicts.
    pub verdict: DietaryVerdict,
    /// Human-readable processing level.
    pub processing_level: String,
}

impl ProductReport {
    /// Build a report from a resolved record.
    pub fn new(barcode: &str, product: ProductRecord) -> Self {
        let verdict = classify(&product);
        let processing_level = ProcessingLevel::from_group(product.nova_group)
            .description()
            .to_string();

        Self {
            barcode: barcode.to_string(),
            product,
            verdict,
            processing_level,
        }
    }
}

impl Render for ProductReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        let name = if self.product.name.is_empty() {
            "(unnamed product)"
        } else {
            &self.product.name
        };
        writeln!(w, "Product: {} [{}]", name, self.barcode)?;

        if let Some(url) = &self.product.image_url {
            writeln!(w, "Image:   {url}")?;
        }

        writeln!(w)?;
        writeln!(w, "Suitability")?;
        for category in DietCategory::PRIORITY_ORDER {
            let mark = if self.verdict.suitable_for(category) {
                "yes"
            } else {
                "no"
            };
            writeln!(w, "  {:<12}{}", category.display_name(), mark)?;
        }
        if let Some(reason) = &self.verdict.violation_reason {
            writeln!(w, "  Contains:   {reason}")?;
        }

        writeln!(w)?;
        writeln!(w, "Processing: {}", self.processing_level)?;

        match &self.product.ingredients_text {
            Some(text) if !text.is_empty() => {
                writeln!(w)?;
                writeln!(w, "Ingredients: {text}")?;
            }
            _ => {
                writeln!(w)?;
                writeln!(w, "Ingredients: not reported")?;
            }
        }

        writeln!(w)?;
        writeln!(w, "Nutrients (per 100g)")?;
        for (nutrient, amount) in self.product.nutrients.iter() {
            match amount {
                Some(value) => writeln!(
                    w,
                    "  {:<15}{} {}",
                    nutrient.display_name(),
                    value,
                    nutrient.unit()
                )?,
                None => writeln!(w, "  {:<15}not reported", nutrient.display_name())?,
            }
        }

        Ok(())
    }
}

/// Report for the offline `classify` command.
#[derive(Debug, Serialize)]
pub struct VerdictReport {
    /// The text that was evaluated.
    pub ingredients: String,
    /// Dietary suitability verdicts.
    pub verdict: DietaryVerdict,
}

impl Render for VerdictReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "Ingredients: {}", self.ingredients)?;
        writeln!(w)?;
        for category in DietCategory::PRIORITY_ORDER {
            let mark = if self.verdict.suitable_for(category) {
                "yes"
            } else {
                "no"
            };
            writeln!(w, "  {:<12}{}", category.display_name(), mark)?;
        }
        if let Some(reason) = &self.verdict.violation_reason {
            writeln!(w, "  Contains:   {reason}")?;
        }
        Ok(())
    }
}
