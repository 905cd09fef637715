//! HTTP catalog client.

use crate::error::{CatalogError, Result};
use crate::wire::LookupEnvelope;
use async_trait::async_trait;
use bitewise_core::{Barcode, CatalogConfig, ProductRecord};
use std::time::Duration;

/// A source of product records keyed by barcode.
///
/// The production implementation is [`CatalogClient`]; tests and the scan
/// session inject stubs through this trait.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Resolve a barcode to its product record.
    ///
    /// One attempt per call: no retry, no cache. Failure is terminal for
    /// this lookup and must be re-triggered by the caller.
    async fn lookup(&self, barcode: &Barcode) -> Result<ProductRecord>;
}

/// HTTP client for the remote product catalog.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Override the base URL (primarily for tests against a local stub).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the lookup URL for a barcode.
    fn product_url(&self, barcode: &Barcode) -> String {
        format!("{}/api/v0/product/{}.json", self.base_url, barcode)
    }
}

#[async_trait]
impl ProductCatalog for CatalogClient {
    async fn lookup(&self, barcode: &Barcode) -> Result<ProductRecord> {
        let url = self.product_url(barcode);
        tracing::debug!(barcode = %barcode, url = %url, "looking up product");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(barcode = %barcode, status = status.as_u16(), "catalog lookup rejected");
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let envelope: LookupEnvelope =
            response
                .json()
                .await
                .map_err(|e| CatalogError::Malformed {
                    reason: e.to_string(),
                })?;

        if !envelope.is_found() {
            tracing::debug!(barcode = %barcode, "product not in catalog");
            return Err(CatalogError::NotFound {
                barcode: barcode.as_str().to_string(),
            });
        }

        let record = envelope
            .product
            .expect("product present when envelope.is_found()")
            .into_record();

        tracing::debug!(barcode = %barcode, name = %record.name, "product resolved");
        Ok(record)
    }
}
