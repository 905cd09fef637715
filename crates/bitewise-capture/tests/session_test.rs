//! End-to-end scan session tests: scripted device events through the
//! controller into a recording catalog stub.

use async_trait::async_trait;
use bitewise_capture::{CaptureDevice, CaptureEvent, ScanSessionController, ScanState};
use bitewise_catalog::{CatalogError, ProductCatalog};
use bitewise_core::{Barcode, CaptureConfig, Nutrients, ProductRecord};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

struct ScriptedDevice {
    script: Vec<CaptureEvent>,
    releases: Arc<AtomicUsize>,
}

impl ScriptedDevice {
    fn new(script: Vec<CaptureEvent>) -> (Self, Arc<AtomicUsize>) {
        let releases = Arc::new(AtomicUsize::new(0));
        (
            Self {
                script,
                releases: releases.clone(),
            },
            releases,
        )
    }
}

impl CaptureDevice for ScriptedDevice {
    fn start(
        &mut self,
        _config: &CaptureConfig,
    ) -> bitewise_capture::Result<mpsc::Receiver<CaptureEvent>> {
        let (tx, rx) = mpsc::channel(16);
        let script = std::mem::take(&mut self.script);
        tokio::spawn(async move {
            for event in script {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            // Sender drops here; the channel closes after the script.
        });
        Ok(rx)
    }

    fn release(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Catalog stub that records every barcode it is asked about.
struct RecordingCatalog {
    calls: Mutex<Vec<String>>,
    fail_not_found: bool,
}

impl RecordingCatalog {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_not_found: false,
        }
    }

    fn not_found() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_not_found: true,
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl ProductCatalog for RecordingCatalog {
    async fn lookup(&self, barcode: &Barcode) -> bitewise_catalog::Result<ProductRecord> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(barcode.as_str().to_string());

        if self.fail_not_found {
            return Err(CatalogError::NotFound {
                barcode: barcode.as_str().to_string(),
            });
        }

        Ok(ProductRecord {
            name: "Stub Product".to_string(),
            ingredients_text: Some("water".to_string()),
            labels_tags: None,
            analysis_tags: None,
            nova_group: Some(1),
            image_url: None,
            nutrients: Nutrients::default(),
        })
    }
}

#[tokio::test]
async fn invalid_then_valid_decode_looks_up_once() {
    let (device, releases) = ScriptedDevice::new(vec![
        CaptureEvent::Decoded("abc123".to_string()),
        CaptureEvent::Decoded("012345678905".to_string()),
        // Anything after the valid decode must never be looked up
        CaptureEvent::Decoded("999999999999".to_string()),
    ]);
    let mut controller = ScanSessionController::new(device);
    let catalog = RecordingCatalog::new();

    let (barcode, record) = controller
        .run(&CaptureConfig::default(), &catalog)
        .await
        .expect("session succeeds")
        .expect("a product was resolved");

    assert_eq!(barcode.as_str(), "012345678905");
    assert_eq!(record.name, "Stub Product");
    assert_eq!(catalog.calls(), vec!["012345678905".to_string()]);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert_eq!(controller.state(), ScanState::Idle);
}

#[tokio::test]
async fn warnings_are_swallowed() {
    let (device, releases) = ScriptedDevice::new(vec![
        CaptureEvent::Warning("frame decode miss".to_string()),
        CaptureEvent::Warning("frame decode miss".to_string()),
        CaptureEvent::Decoded("5449000000996".to_string()),
    ]);
    let mut controller = ScanSessionController::new(device);
    let catalog = RecordingCatalog::new();

    let record = controller
        .run(&CaptureConfig::default(), &catalog)
        .await
        .expect("session succeeds");

    assert!(record.is_some());
    assert_eq!(catalog.calls(), vec!["5449000000996".to_string()]);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn exhausted_device_ends_session_without_lookup() {
    let (device, releases) =
        ScriptedDevice::new(vec![CaptureEvent::Decoded("not-a-code".to_string())]);
    let mut controller = ScanSessionController::new(device);
    let catalog = RecordingCatalog::new();

    let record = controller
        .run(&CaptureConfig::default(), &catalog)
        .await
        .expect("session ends cleanly");

    assert!(record.is_none());
    assert!(catalog.calls().is_empty());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert_eq!(controller.state(), ScanState::Idle);
}

#[tokio::test]
async fn lookup_failure_propagates_after_release() {
    let (device, releases) =
        ScriptedDevice::new(vec![CaptureEvent::Decoded("0000000000000".to_string())]);
    let mut controller = ScanSessionController::new(device);
    let catalog = RecordingCatalog::not_found();

    let err = controller
        .run(&CaptureConfig::default(), &catalog)
        .await
        .expect_err("lookup failure surfaces");

    assert!(matches!(
        err,
        bitewise_capture::CaptureError::Lookup(CatalogError::NotFound { .. })
    ));
    // The device was already released by the valid decode
    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert_eq!(controller.state(), ScanState::Idle);
}

#[tokio::test]
async fn session_can_be_rerun_after_completion() {
    let (device, releases) = ScriptedDevice::new(vec![CaptureEvent::Decoded(
        "012345678905".to_string(),
    )]);
    let mut controller = ScanSessionController::new(device);
    let catalog = RecordingCatalog::new();

    let first = controller
        .run(&CaptureConfig::default(), &catalog)
        .await
        .expect("first session");
    assert!(first.is_some());

    // The scripted device is exhausted; a second run ends without a decode.
    let second = controller
        .run(&CaptureConfig::default(), &catalog)
        .await
        .expect("second session");
    assert!(second.is_none());

    assert_eq!(catalog.calls().len(), 1);
    assert_eq!(releases.load(Ordering::SeqCst), 2);
}
