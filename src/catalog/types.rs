use std::collections::HashMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

/// One playable champion as listed in the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChampionRecord {
    pub id: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
}

/// Entry inside the `data` map. Data Dragon ships many more fields
/// (stats, tags, image, ...); everything unknown is ignored.
#[derive(Deserialize, Debug)]
struct RawChampion {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    blurb: String,
}

/// Top-level shape of `champion.json`.
#[derive(Deserialize, Debug)]
pub struct CatalogResponse {
    data: HashMap<String, RawChampion>,
}

impl CatalogResponse {
    /// Flattens the keyed `data` object into a list sorted by id.
    ///
    /// Exactly one record is produced per key and the map key is the
    /// record's id, so ids are unique even if an inner `id` disagrees.
    pub fn into_records(self) -> Vec<ChampionRecord> {
        let mut records: Vec<ChampionRecord> = self
            .data
            .into_iter()
            .map(|(key, raw)| {
                if let Some(inner) = raw.id.as_deref()
                    && inner != key
                {
                    debug!("Champion key {} carries id {}, using the key", key, inner);
                }
                ChampionRecord {
                    id: key,
                    name: raw.name,
                    title: raw.title,
                    blurb: raw.blurb,
                }
            })
            .collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }
}

/// Errors that can occur while loading the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not a catalog document.
    Parse(String),
    /// No answer within the configured request timeout.
    Timeout(u64),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
            CatalogError::Timeout(secs) => write!(f, "request timed out after {secs}s"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// What the Home screen knows about the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Vec<ChampionRecord>),
    Failed(String),
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    /// Records available for display. Empty while loading or after a failure.
    pub fn records(&self) -> &[ChampionRecord] {
        match self {
            CatalogState::Loaded(records) => records,
            CatalogState::Loading | CatalogState::Failed(_) => &[],
        }
    }
}
