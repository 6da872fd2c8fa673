//! Aptos fullnode REST client.
//!
//! Fetches single committed transactions by hash or ledger version. The raw
//! JSON record is returned as-is; variant discrimination and field parsing
//! live in [`crate::domain`].

use color_eyre::Result;
use serde_json::Value;

use crate::domain::{ExplorerError, Network};

pub mod http;

use http::{HttpClient, HttpConfig};

// ============================================================================
// Aptos Client
// ============================================================================

/// Client for a single Aptos fullnode.
#[derive(Debug, Clone)]
pub struct AptosClient {
    http: HttpClient,
    base_url: String,
}

impl AptosClient {
    /// Create a client for the given network's public fullnode.
    #[must_use]
    pub fn new(network: Network) -> Self {
        Self {
            http: HttpClient::with_config(HttpConfig::default()),
            base_url: network.fullnode_url().to_string(),
        }
    }

    /// Fetch a committed transaction by its hash.
    ///
    /// Returns `Ok(None)` when the fullnode does not know the transaction.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid input, network failures, or an
    /// unparseable response body.
    pub async fn get_transaction_by_hash(&self, hash: &str) -> Result<Option<Value>> {
        if !hash.starts_with("0x") {
            return Err(
                ExplorerError::invalid_input("transaction hash must start with 0x").into_report(),
            );
        }

        let url = format!("{}/transactions/by_hash/{}", self.base_url, hash);
        self.fetch_transaction(&url).await
    }

    /// Fetch a committed transaction by its ledger version.
    ///
    /// Returns `Ok(None)` when the version does not exist on this fullnode.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures or an unparseable response body.
    pub async fn get_transaction_by_version(&self, version: u64) -> Result<Option<Value>> {
        let url = format!("{}/transactions/by_version/{}", self.base_url, version);
        self.fetch_transaction(&url).await
    }

    async fn fetch_transaction(&self, url: &str) -> Result<Option<Value>> {
        tracing::debug!("fetching {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ExplorerError::Network)?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ExplorerError::parse(format!(
                "fullnode returned status {}",
                response.status()
            ))
            .into_report());
        }

        let json: Value = response
            .json()
            .await
            .map_err(|_| ExplorerError::parse("failed to parse transaction JSON").into_report())?;

        Ok(Some(json))
    }

    /// The fullnode base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// ============================================================================
// Tests
// ============================================================================
