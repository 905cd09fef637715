//! Bitewise Catalog - Remote product catalog client.
//!
//! This crate resolves a barcode to a [`bitewise_core::ProductRecord`] via a
//! single HTTP GET against a public product catalog. There is no retry, no
//! cache, and no deduplication: each lookup is independent, and a failed
//! attempt is terminal until the caller re-triggers it.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitewise_catalog::{CatalogClient, ProductCatalog};
//! use bitewise_core::{Barcode, CatalogConfig};
//!
//! let client = CatalogClient::new(&CatalogConfig::default())?;
//! let barcode = Barcode::new("5449000000996")?;
//! let record = client.lookup(&barcode).await?;
//! println!("{}", record.name);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod client;
pub mod error;
#[allow(missing_docs)]
pub mod wire;

// Re-export commonly used types
pub use client::{CatalogClient, ProductCatalog};
pub use error::{CatalogError, Result};
pub use wire::LookupEnvelope;
