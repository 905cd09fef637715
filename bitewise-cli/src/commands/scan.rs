//! Scan session command.

use crate::error::CliError;
use crate::output::OutputWriter;
use crate::report::ProductReport;
use crate::state::ProductSlot;
use bitewise_capture::{ScanSessionController, WedgeCapture};
use bitewise_catalog::CatalogClient;
use bitewise_core::AppConfig;

/// Run one capture session and print the report for the first product
/// resolved from a valid decode.
pub async fn run(
    device_override: Option<&str>,
    config: &AppConfig,
    slot: &ProductSlot,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let mut capture_config = config.capture.clone();
    if let Some(device) = device_override {
        capture_config.device = Some(device.to_string());
    }

    let client = CatalogClient::new(&config.catalog)?;
    let mut controller = ScanSessionController::new(WedgeCapture::new());

    eprintln!("Scanning: waiting for a barcode on stdin (Ctrl-D to cancel)...");
    let token = slot.begin_lookup();

    match controller.run(&capture_config, &client).await {
        Ok(Some((barcode, record))) => {
            slot.publish(token, barcode, record);
        }
        Ok(None) => {
            eprintln!("Scan cancelled, no barcode captured.");
            return Ok(());
        }
        Err(e) => {
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
