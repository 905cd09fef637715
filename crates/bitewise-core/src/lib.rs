//! Bitewise Core - Foundation crate for the Bitewise food scanner.
//!
//! This crate provides the shared types, error handling, and configuration
//! management that all other Bitewise crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared domain types (`Barcode`, `ProductRecord`, `Nutrients`)
//!
//! # Example
//!
//! ```rust
//! use bitewise_core::{AppConfig, Barcode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let barcode = Barcode::new("5449000000996")?;
//! assert_eq!(barcode.as_str(), "5449000000996");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, CaptureConfig, CatalogConfig, GeneralConfig};
pub use error::{BitewiseError, ConfigError, ConfigResult, Result};
pub use types::{Barcode, Nutrient, Nutrients, ProductRecord};
