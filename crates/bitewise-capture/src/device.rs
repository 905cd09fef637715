//! Capture device abstraction.

use crate::error::Result;
use bitewise_core::CaptureConfig;
use tokio::sync::mpsc;

/// An event emitted by a running capture device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// The device decoded a candidate barcode (not yet validated).
    Decoded(String),
    /// A non-fatal device warning (e.g. a frame decode miss).
    ///
    /// Warnings are logged and swallowed; they never interrupt a session.
    Warning(String),
}

/// The external barcode-capture collaborator.
///
/// The device runs its own polling loop outside the session's control and
/// reports through the event channel returned by [`start`](Self::start).
/// Implementations must make [`release`](Self::release) idempotent: the
/// controller guarantees at most one call per session, but a device must
/// also tolerate a release with no session running.
pub trait CaptureDevice: Send {
    /// Start capturing and return the device's event channel.
    ///
    /// Called exactly once per Scanning-session entry.
    fn start(&mut self, config: &CaptureConfig) -> Result<mpsc::Receiver<CaptureEvent>>;

    /// Tear down the capture resources.
    ///
    /// Called exactly once per Scanning-session exit.
    fn release(&mut self);
}
