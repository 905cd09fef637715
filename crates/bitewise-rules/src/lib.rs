//! Bitewise Rules - Dietary suitability rule evaluation.
//!
//! This crate holds the restricted-ingredient reference data and the two
//! pure classification functions of the pipeline:
//!
//! - [`classify`] maps a product's ingredients text to per-category
//!   suitability verdicts (vegan, vegetarian, halal)
//! - [`ProcessingLevel`] maps the catalog's NOVA group code to a
//!   human-readable processing description
//!
//! Both are total functions: they never fail and never touch the network.
//!
//! # Example
//!
//! ```rust
//! use bitewise_rules::{classify_text, ProcessingLevel};
//!
//! let verdict = classify_text("water, sugar, gelatin");
//! assert!(!verdict.vegan);
//! assert_eq!(verdict.violation_reason.as_deref(), Some("gelatin"));
//!
//! let level = ProcessingLevel::from_group(Some(4));
//! assert_eq!(level.description(), "Ultra-processed foods");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classifier;
pub mod processing;
pub mod restricted;

// Re-export commonly used types
pub use classifier::{classify, classify_text, matched_keywords, DietaryVerdict};
pub use processing::ProcessingLevel;
pub use restricted::DietCategory;
