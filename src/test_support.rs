//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{CatalogEndpoint, CatalogError, CatalogSource, ChampionRecord};

/// A source that answers with a fixed list of records.
pub struct StaticSource(pub Vec<ChampionRecord>);

#[async_trait]
impl CatalogSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_champions(&self) -> Result<Vec<ChampionRecord>, CatalogError> {
        Ok(self.0.clone())
    }
}

/// A source that always fails with the given error.
pub struct FailingSource(pub CatalogError);

#[async_trait]
impl CatalogSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_champions(&self) -> Result<Vec<ChampionRecord>, CatalogError> {
        Err(self.0.clone())
    }
}

pub fn aatrox() -> ChampionRecord {
    ChampionRecord {
        id: "Aatrox".to_string(),
        name: "Aatrox".to_string(),
        title: "the Darkin Blade".to_string(),
        blurb: "Once honored defenders of Shurima against the Void...".to_string(),
    }
}

pub fn ahri() -> ChampionRecord {
    ChampionRecord {
        id: "Ahri".to_string(),
        name: "Ahri".to_string(),
        title: "the Nine-Tailed Fox".to_string(),
        blurb: "Innately connected to the magic of the spirit realm...".to_string(),
    }
}

/// Creates a test App backed by an empty StaticSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(
        Arc::new(StaticSource(Vec::new())),
        CatalogEndpoint::default(),
    )
}
