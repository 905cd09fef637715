//! CLI-specific error types and exit code mapping.

use bitewise_capture::CaptureError;
use bitewise_catalog::CatalogError;
use bitewise_core::ConfigError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to standard Unix exit codes.
/// Every variant is recoverable: the process exits nonzero with a message
/// and re-invocation is the retry.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Malformed manual input: a barcode must be one or more digits.
    #[error("invalid barcode: {0}")]
    InvalidBarcode(String),

    /// Remote catalog lookup failed or found nothing.
    #[error(transparent)]
    Lookup(#[from] CatalogError),

    /// Scan session failure.
    #[error("scan failed: {0}")]
    Capture(#[from] CaptureError),

    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                          |
    /// |------|----------------------------------|
    /// | 0    | Success                          |
    /// | 1    | General error                    |
    /// | 2    | Invalid input / configuration    |
    /// | 3    | Product not found                |
    /// | 4    | Lookup failed (transport/parse)  |
    /// | 5    | Capture session failure          |
    /// | 10   | IO error                         |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidBarcode(_) | Self::Config(_) => 2,
            Self::Lookup(e) => lookup_exit_code(e),
            Self::Capture(CaptureError::Lookup(e)) => lookup_exit_code(e),
            Self::Capture(_) => 5,
            Self::Io(_) => 10,
            Self::JsonSerialize(_) => 1,
        }
    }
}

fn lookup_exit_code(error: &CatalogError) -> i32 {
    if error.is_not_found() {
        3
    } else {
        4
    }
}
