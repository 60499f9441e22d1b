//! # Application State
//!
//! Core business state for champdex. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CatalogSource>  // where the catalog comes from
//! ├── endpoint: CatalogEndpoint       // image URL builder
//! ├── catalog: CatalogState           // loading / loaded / failed
//! ├── activation: u64                 // current Home activation
//! ├── nav: Navigator                  // drawer / stack / tab position
//! ├── request_timeout: Duration       // bound on one catalog load
//! └── status_message: String          // header status text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{CatalogEndpoint, CatalogSource, CatalogState};
use crate::core::config::{DEFAULT_REQUEST_TIMEOUT_SECS, ResolvedConfig};
use crate::core::navigation::Navigator;

pub struct App {
    pub source: Arc<dyn CatalogSource>,
    pub endpoint: CatalogEndpoint,
    pub catalog: CatalogState,
    /// Incremented each time the Home screen (re)activates. A load result is
    /// only applied if it was started by the current activation.
    pub activation: u64,
    pub nav: Navigator,
    pub request_timeout: Duration,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn CatalogSource>, endpoint: CatalogEndpoint) -> Self {
        Self {
            source,
            endpoint,
            catalog: CatalogState::Loading,
            activation: 0,
            nav: Navigator::new(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            status_message: String::new(),
        }
    }

    pub fn from_config(source: Arc<dyn CatalogSource>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(source, config.endpoint());
        app.request_timeout = config.request_timeout;
        app
    }
}
