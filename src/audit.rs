//! Audit pipeline: image reference → lifecycle data → classification

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::image::{ImageError, ImageRef};
use crate::lifecycle::{classify, overall_latest, resolve, EolReport, LifecycleRecord};
use crate::provider::endoflife::EndOfLifeClient;
use crate::provider::error::ProviderError;
use crate::provider::LifecycleProvider;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to parse image: {0}")]
    Image(#[from] ImageError),

    #[error("failed to fetch lifecycle data: {0}")]
    Provider(#[from] ProviderError),
}

/// Audits container images against a lifecycle data provider
pub struct Auditor<P: LifecycleProvider> {
    provider: P,
}

impl Auditor<EndOfLifeClient> {
    pub fn new() -> Self {
        Self::with_provider(EndOfLifeClient::default())
    }
}

impl Default for Auditor<EndOfLifeClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: LifecycleProvider> Auditor<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Audits one image reference as of `today`.
    ///
    /// An unknown product or unresolvable version yields an UNKNOWN report,
    /// not an error; errors are reserved for malformed input and provider
    /// failures.
    pub async fn audit(&self, image: &str, today: NaiveDate) -> Result<EolReport, AuditError> {
        let image = ImageRef::parse(image)?;
        info!(
            "auditing product '{}' version '{}'",
            image.product, image.version
        );

        let Some(records) = self.provider.fetch_cycles(&image.product).await? else {
            return Ok(EolReport::product_not_found(&image.product, &image.version));
        };

        Ok(evaluate(&image.product, &image.version, &records, today))
    }
}

/// Pure evaluation path: derives the overall latest version, resolves the
/// requested version, and classifies the result.
pub fn evaluate(
    product: &str,
    version: &str,
    records: &[LifecycleRecord],
    today: NaiveDate,
) -> EolReport {
    let latest = overall_latest(records);

    match resolve(version, records) {
        Some(record) => classify(record, product, latest, today),
        None => EolReport::version_not_found(product, version, latest),
    }
}
