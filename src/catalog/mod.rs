pub mod client;
pub mod source;
pub mod types;

pub use client::{CatalogEndpoint, DATA_VERSION, DataDragonClient};
pub use source::{CatalogSource, fetch_with_timeout};
pub use types::{CatalogError, CatalogState, ChampionRecord};
