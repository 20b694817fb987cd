//! endoflife.date API client

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{EOL_API_BASE_URL, REQUEST_TIMEOUT_SECS};
use crate::lifecycle::types::LifecycleRecord;
use crate::provider::error::ProviderError;
use crate::provider::LifecycleProvider;

/// Client for the endoflife.date API
pub struct EndOfLifeClient {
    client: reqwest::Client,
    base_url: String,
}

impl EndOfLifeClient {
    /// Creates a client with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("eol-audit")
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for EndOfLifeClient {
    fn default() -> Self {
        Self::new(EOL_API_BASE_URL)
    }
}

#[async_trait::async_trait]
impl LifecycleProvider for EndOfLifeClient {
    async fn fetch_cycles(
        &self,
        product: &str,
    ) -> Result<Option<Vec<LifecycleRecord>>, ProviderError> {
        let url = format!("{}/{}.json", self.base_url, product);
        debug!("fetching lifecycle data: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        // Unknown products are a classification outcome, not an error.
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            warn!("endoflife.date returned status {}: {}", status, url);
            return Err(ProviderError::InvalidResponse(format!(
                "Unexpected status: {status}"
            )));
        }

        let records: Vec<LifecycleRecord> = response.json().await.map_err(|e| {
            warn!("Failed to parse endoflife.date response: {}", e);
            ProviderError::InvalidResponse(e.to_string())
        })?;

        Ok(Some(records))
    }
}
