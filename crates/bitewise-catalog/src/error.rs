//! Catalog error types.

use thiserror::Error;

/// Errors surfaced by a catalog lookup.
///
/// [`CatalogError::NotFound`] is the "valid response, no matching product"
/// case; every other variant is a lookup failure (transport, HTTP status,
/// or wire decoding). All are recoverable at the caller's boundary by
/// re-triggering the lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog answered but has no product for the barcode.
    #[error("no product found for barcode {barcode}")]
    NotFound {
        /// The barcode that was looked up
        barcode: String,
    },

    /// Transport failure: connection, DNS, or timeout.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success HTTP status.
    #[error("catalog returned HTTP {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be decoded into the expected envelope.
    #[error("malformed catalog response: {reason}")]
    Malformed {
        /// What failed to decode
        reason: String,
    },
}

impl CatalogError {
    /// Check whether this is the not-found case rather than a failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias using `CatalogError`.
pub type Result<T> = std::result::Result<T, CatalogError>;
