//! Manual barcode lookup.

use crate::error::CliError;
use crate::output::OutputWriter;
use crate::report::ProductReport;
use crate::state::ProductSlot;
use bitewise_catalog::{CatalogClient, ProductCatalog};
use bitewise_core::{AppConfig, Barcode};

/// Look up a manually entered barcode and print the product report.
pub async fn run(
    raw_barcode: &str,
    config: &AppConfig,
    slot: &ProductSlot,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    // Validate before touching the network
    let barcode = Barcode::new(raw_barcode)
        .map_err(|_| CliError::InvalidBarcode(raw_barcode.to_string()))?;

    let client = CatalogClient::new(&config.catalog)?;

    let token = slot.begin_lookup();
    tracing::info!(barcode = %barcode, "looking up product");

    match client.lookup(&barcode).await {
        Ok(record) => {
            slot.publish(token, barcode, record);
        }
        Err(e) => {
            // A failed lookup must not leave a stale record on display
            slot.clear();
            return Err(e.into());
        }
    }

    if let Some(resolved) = slot.current() {
        let report = ProductReport::new(resolved.barcode.as_str(), resolved.record);
        writer.render(&report)?;
    }

    Ok(())
}
