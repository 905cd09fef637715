//! Capture error types.

use bitewise_catalog::CatalogError;
use thiserror::Error;

/// Errors surfaced by the scan session.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// A start request arrived while a session was already running.
    #[error("a scan session is already running")]
    AlreadyScanning,

    /// The capture device could not be started.
    #[error("capture device failed to start: {reason}")]
    StartFailed {
        /// What the device reported
        reason: String,
    },

    /// The lookup triggered by a decoded barcode failed.
    #[error(transparent)]
    Lookup(#[from] CatalogError),
}

/// Result type alias using `CaptureError`.
pub type Result<T> = std::result::Result<T, CaptureError>;
