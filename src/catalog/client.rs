//! Data Dragon client.
//!
//! Data Dragon is Riot's static CDN for game data. The champion list lives at
//! `/cdn/{version}/data/{locale}/champion.json` and images hang off the same
//! host, so one `CatalogEndpoint` builds every URL the app needs.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::CatalogSource;
use super::types::{CatalogError, CatalogResponse, ChampionRecord};

/// Catalog data version. Pinned, never discovered at runtime.
pub const DATA_VERSION: &str = "14.2.1";
pub const DEFAULT_BASE_URL: &str = "https://ddragon.leagueoflegends.com";
pub const DEFAULT_LOCALE: &str = "en_US";

/// Host, version and locale of the catalog plus the URL layout on top of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoint {
    pub base_url: String,
    pub version: String,
    pub locale: String,
}

impl Default for CatalogEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_LOCALE)
    }
}

impl CatalogEndpoint {
    pub fn new(base_url: &str, locale: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            version: DATA_VERSION.to_string(),
            locale: locale.to_string(),
        }
    }

    pub fn champion_data_url(&self) -> String {
        format!(
            "{}/cdn/{}/data/{}/champion.json",
            self.base_url, self.version, self.locale
        )
    }

    /// Small square portrait shown next to list entries.
    pub fn square_icon_url(&self, champion_id: &str) -> String {
        format!(
            "{}/cdn/{}/img/champion/{}.png",
            self.base_url, self.version, champion_id
        )
    }

    /// Large loading-screen art. This path is not versioned on the CDN.
    pub fn loading_splash_url(&self, champion_id: &str) -> String {
        format!(
            "{}/cdn/img/champion/loading/{}_0.jpg",
            self.base_url, champion_id
        )
    }
}

pub struct DataDragonClient {
    endpoint: CatalogEndpoint,
    client: reqwest::Client,
}

impl DataDragonClient {
    pub fn new(endpoint: CatalogEndpoint) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &CatalogEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for DataDragonClient {
    fn name(&self) -> &str {
        "ddragon"
    }

    async fn fetch_champions(&self) -> Result<Vec<ChampionRecord>, CatalogError> {
        let url = self.endpoint.champion_data_url();
        info!("Fetching champion catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error: {} - {}", status, err_body);
            return Err(CatalogError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let catalog: CatalogResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let records = catalog.into_records();
        info!("Decoded {} champions", records.len());
        Ok(records)
    }
}
