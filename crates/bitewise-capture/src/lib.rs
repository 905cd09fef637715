//! Bitewise Capture - Barcode scan session management.
//!
//! The live barcode-capture widget is an external collaborator: it is driven
//! through the [`CaptureDevice`] trait and all this crate trusts from it is
//! the stream of decoded-text events it emits. [`ScanSessionController`]
//! owns the session lifecycle around it:
//!
//! - Idle → Scanning on an explicit start
//! - each decoded value is validated as an all-digits barcode; invalid
//!   emissions are logged and capture continues
//! - the first valid value ends the session, releases the device, and is
//!   forwarded to the product catalog
//! - however the Scanning state is exited (valid decode, explicit stop, or
//!   drop), the device is released exactly once
//!
//! [`WedgeCapture`] is the shipped device implementation: a keyboard-wedge
//! scanner typing decoded codes into stdin, one per line.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod controller;
pub mod device;
pub mod error;
pub mod wedge;

// Re-export commonly used types
pub use controller::{ScanSessionController, ScanState};
pub use device::{CaptureDevice, CaptureEvent};
pub use error::{CaptureError, Result};
pub use wedge::WedgeCapture;
