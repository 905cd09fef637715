//! Keyboard-wedge capture device.
//!
//! USB barcode scanners in keyboard-wedge mode type the decoded value
//! followed by a newline. This device reads stdin line by line on a
//! dedicated thread and forwards each non-empty line as a decoded event.

use crate::device::{CaptureDevice, CaptureEvent};
use crate::error::Result;
use bitewise_core::CaptureConfig;
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Channel capacity for decoded events; a wedge emits at human scan pace.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Capture device reading decoded values from stdin.
#[derive(Default)]
pub struct WedgeCapture {
    stop: Option<Arc<AtomicBool>>,
}

impl WedgeCapture {
    /// Create a new keyboard-wedge device.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CaptureDevice for WedgeCapture {
    fn start(&mut self, _config: &CaptureConfig) -> Result<mpsc::Receiver<CaptureEvent>> {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        self.stop = Some(stop.clone());

        // stdin reads block; keep them off the async runtime.
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                if stop.load(Ordering::Relaxed) {
                    break;
                }
                match line {
                    Ok(text) => {
                        let text = text.trim().to_string();
                        if text.is_empty() {
                            continue;
                        }
                        if tx.blocking_send(CaptureEvent::Decoded(text)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = tx.blocking_send(CaptureEvent::Warning(e.to_string()));
                        break;
                    }
                }
            }
            tracing::debug!("wedge capture thread finished");
        });

        tracing::debug!("wedge capture started, reading stdin");
        Ok(rx)
    }

    fn release(&mut self) {
        // Idempotent: the flag is taken on first release. The reader thread
        // exits on the next line or when the receiver side is dropped.
        if let Some(stop) = self.stop.take() {
            stop.store(true, Ordering::Relaxed);
            tracing::debug!("wedge capture released");
        }
    }
}
