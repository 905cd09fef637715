//! Session state: the product-record slot.
//!
//! One record slot shared by the session, replaced wholesale on each
//! resolved lookup. Lookups take a monotonically increasing token when they
//! begin; a result may only be published under the most recently issued
//! token, so a stale in-flight lookup that resolves after a newer request
//! began is ignored rather than flickering onto the display.

use bitewise_core::{Barcode, ProductRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// A resolved product held by the session.
#[derive(Debug, Clone)]
pub struct ResolvedProduct {
    /// The barcode that was looked up.
    pub barcode: Barcode,
    /// The record the catalog returned.
    pub record: ProductRecord,
}

/// Single-writer slot for the most recently resolved product.
#[derive(Debug, Default)]
pub struct ProductSlot {
    current: RwLock<Option<ResolvedProduct>>,
    issued: AtomicU64,
}

impl ProductSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new lookup and get its token.
    ///
    /// Issuing a token supersedes every earlier in-flight lookup.
    pub fn begin_lookup(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish a resolved record under a token.
    ///
    /// Returns `false` (and leaves the slot untouched) when the token has
    /// been superseded by a newer `begin_lookup`.
    pub fn publish(&self, token: u64, barcode: Barcode, record: ProductRecord) -> bool {
        if token != self.issued.load(Ordering::SeqCst) {
            tracing::debug!(token, "dropping stale lookup result");
            return false;
        }

        let mut current = self.current.write().expect("product slot lock");
        *current = Some(ResolvedProduct { barcode, record });
        true
    }

    /// Clear the slot, e.g. when a lookup fails and a stale record would
    /// otherwise linger on the display.
    pub fn clear(&self) {
        let mut current = self.current.write().expect("product slot lock");
        *current = None;
    }

    /// Get the currently displayed product, if any.
    pub fn current(&self) -> Option<ResolvedProduct> {
        self.current.read().expect("product slot lock").clone()
    }
}
