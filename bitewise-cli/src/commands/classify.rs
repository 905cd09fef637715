//! Offline ingredients classification.

use crate::error::CliError;
use crate::output::OutputWriter;
use crate::report::VerdictReport;
use bitewise_rules::classify_text;

/// Evaluate raw ingredients text against the dietary rules.
pub fn run(ingredients: &str, writer: &OutputWriter) -> Result<(), CliError> {
    let report = VerdictReport {
        ingredients: ingredients.to_string(),
        verdict: classify_text(ingredients),
    };
    writer.render(&report)
}
