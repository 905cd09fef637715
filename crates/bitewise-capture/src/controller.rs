//! Scan session state machine.

use crate::device::{CaptureDevice, CaptureEvent};
use crate::error::{CaptureError, Result};
use bitewise_catalog::ProductCatalog;
use bitewise_core::{Barcode, CaptureConfig, ProductRecord};
use tokio::sync::mpsc;

/// The two states of a scan session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No capture session is running.
    Idle,
    /// The capture device is live and emitting events.
    Scanning,
}

/// Manages the lifecycle of one capture device across scan sessions.
///
/// The underlying capture handle is initialized exactly once per session
/// entry and torn down exactly once per session exit, whichever path exits
/// it: a valid decode, an explicit [`stop`](Self::stop), or dropping the
/// controller mid-session.
pub struct ScanSessionController<D: CaptureDevice> {
    device: D,
    state: ScanState,
    events: Option<mpsc::Receiver<CaptureEvent>>,
}

impl<D: CaptureDevice> ScanSessionController<D> {
    /// Create a new controller around a capture device.
    #[must_use]
    pub fn new(device: D) -> Self {
        Self {
            device,
            state: ScanState::Idle,
            events: None,
        }
    }

    /// Get the current session state.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Check whether a session is running.
    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.state == ScanState::Scanning
    }

    /// Start a scan session (Idle → Scanning).
    ///
    /// # Errors
    /// Returns [`CaptureError::AlreadyScanning`] if a session is running,
    /// or the device's start failure.
    pub fn start(&mut self, config: &CaptureConfig) -> Result<()> {
        if self.is_scanning() {
            return Err(CaptureError::AlreadyScanning);
        }

        let events = self.device.start(config)?;
        self.events = Some(events);
        self.state = ScanState::Scanning;
        tracing::info!("scan session started");
        Ok(())
    }

    /// Stop the session and release the capture device (Scanning → Idle).
    ///
    /// Returns `true` if a session was running. Safe to call repeatedly;
    /// only the first call after a start releases the device.
    pub fn stop(&mut self) -> bool {
        if !self.is_scanning() {
            return false;
        }
        self.teardown();
        tracing::info!("scan session stopped");
        true
    }

    /// Feed one decoded emission through the state machine.
    ///
    /// A valid all-digits value ends the session (device released, state
    /// Idle) and is returned for lookup. Invalid values are logged and
    /// ignored; capture continues. Emissions while Idle are ignored.
    pub fn handle_emission(&mut self, raw: &str) -> Option<Barcode> {
        if !self.is_scanning() {
            tracing::debug!(value = %raw, "ignoring emission outside a scan session");
            return None;
        }

        match Barcode::new(raw) {
            Ok(barcode) => {
                tracing::info!(barcode = %barcode, "barcode decoded");
                self.teardown();
                Some(barcode)
            }
            Err(_) => {
                tracing::warn!(value = %raw, "ignoring non-numeric decode");
                None
            }
        }
    }

    /// Run a full scan session: start the device, consume its events until
    /// a valid barcode arrives, and resolve it against the catalog.
    ///
    /// Device warnings are logged and swallowed. Returns `Ok(None)` when the
    /// device closes its event channel before any valid decode.
    pub async fn run(
        &mut self,
        config: &CaptureConfig,
        catalog: &dyn ProductCatalog,
    ) -> Result<Option<(Barcode, ProductRecord)>> {
        self.start(config)?;

        loop {
            let event = match self.events.as_mut() {
                Some(events) => events.recv().await,
                None => None,
            };

            match event {
                Some(CaptureEvent::Warning(message)) => {
                    tracing::warn!(%message, "capture device warning");
                }
                Some(CaptureEvent::Decoded(raw)) => {
                    if let Some(barcode) = self.handle_emission(&raw) {
                        let record = catalog.lookup(&barcode).await?;
                        return Ok(Some((barcode, record)));
                    }
                }
                None => {
                    tracing::debug!("capture device closed its event channel");
                    self.stop();
                    return Ok(None);
                }
            }
        }
    }

    /// Release the device and return to Idle. Callers must have checked
    /// that the session is running.
    fn teardown(&mut self) {
        self.device.release();
        self.events = None;
        self.state = ScanState::Idle;
    }
}

impl<D: CaptureDevice> Drop for ScanSessionController<D> {
    fn drop(&mut self) {
        if self.is_scanning() {
            tracing::debug!("releasing capture device on drop");
            self.teardown();
        }
    }
}
