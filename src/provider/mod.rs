//! Lifecycle data providers
//!
//! A provider retrieves the lifecycle records for a product. The engine
//! consumes the materialized record list synchronously; retries, timeouts,
//! and transport concerns live here, not in the engine.
//!
//! # Modules
//!
//! - [`endoflife`]: Client for the endoflife.date API
//! - [`error`]: Provider error types

pub mod endoflife;
pub mod error;

#[cfg(test)]
use mockall::automock;

use crate::lifecycle::types::LifecycleRecord;
use crate::provider::error::ProviderError;

/// Trait for fetching a product's lifecycle records
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait LifecycleProvider: Send + Sync {
    /// Fetches all lifecycle records for a product.
    ///
    /// # Returns
    /// * `Ok(Some(records))` - Records in provider order (observed newest-first)
    /// * `Ok(None)` - The product is not in the provider's database
    /// * `Err(ProviderError)` - Transport or decoding failure
    async fn fetch_cycles(&self, product: &str)
        -> Result<Option<Vec<LifecycleRecord>>, ProviderError>;
}
