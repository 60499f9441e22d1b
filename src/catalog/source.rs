use std::time::Duration;

use async_trait::async_trait;
use log::warn;

use super::types::{CatalogError, ChampionRecord};

/// Anything that can produce the champion catalog.
///
/// The TUI only talks to this trait; `DataDragonClient` is the real
/// implementation and tests plug in canned sources.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// Fetches the full catalog, one outbound request per call.
    async fn fetch_champions(&self) -> Result<Vec<ChampionRecord>, CatalogError>;
}

/// Runs one fetch against `source`, bounded by `timeout`.
///
/// A timeout is reported as `CatalogError::Timeout` so the caller always
/// ends up in a non-loading state.
pub async fn fetch_with_timeout(
    source: &dyn CatalogSource,
    timeout: Duration,
) -> Result<Vec<ChampionRecord>, CatalogError> {
    match tokio::time::timeout(timeout, source.fetch_champions()).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                "Catalog fetch from '{}' timed out after {}s",
                source.name(),
                timeout.as_secs()
            );
            Err(CatalogError::Timeout(timeout.as_secs()))
        }
    }
}
