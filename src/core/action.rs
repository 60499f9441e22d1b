//! # Actions
//!
//! Everything that can happen in champdex becomes an `Action`.
//! User presses Enter on a champion? That's `Action::SelectChampion(record)`.
//! Catalog request finishes? That's `Action::CatalogLoaded { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing the I/O the caller has to perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::catalog::{CatalogError, CatalogState, ChampionRecord};
use crate::core::navigation::{DrawerBranch, Tab};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Home screen became live (startup or manual reload).
    ActivateHome,
    CatalogLoaded {
        activation: u64,
        result: Result<Vec<ChampionRecord>, CatalogError>,
    },
    SelectChampion(ChampionRecord),
    /// Direct navigation to Detail, bypassing the list. No key is bound to
    /// it; a `None` payload renders the "No champion selected." fallback.
    OpenDetail(Option<ChampionRecord>),
    GoBack,
    ToggleDrawer,
    OpenBranch(DrawerBranch),
    SelectTab(Tab),
    Quit,
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a catalog fetch tagged with this activation.
    LoadCatalog { activation: u64 },
    Quit,
}

fn champion_count(n: usize) -> String {
    if n == 1 {
        String::from("1 champion")
    } else {
        format!("{} champions", n)
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ActivateHome => {
            app.activation += 1;
            app.catalog = CatalogState::Loading;
            app.status_message = String::from("Loading...");
            info!("Home activated (activation {})", app.activation);
            Effect::LoadCatalog {
                activation: app.activation,
            }
        }
        Action::CatalogLoaded { activation, result } => {
            if activation != app.activation {
                debug!(
                    "Dropping catalog result from activation {} (current {})",
                    activation, app.activation
                );
                return Effect::None;
            }
            match result {
                Ok(records) => {
                    info!("Catalog loaded: {} champions", records.len());
                    app.status_message = champion_count(records.len());
                    app.catalog = CatalogState::Loaded(records);
                }
                Err(e) => {
                    warn!("Catalog load failed: {}", e);
                    app.status_message = String::from("Load failed");
                    app.catalog = CatalogState::Failed(e.to_string());
                }
            }
            Effect::None
        }
        Action::SelectChampion(record) => {
            app.nav.select_record(record);
            Effect::None
        }
        Action::OpenDetail(payload) => {
            app.nav.open_detail(payload);
            Effect::None
        }
        Action::GoBack => {
            app.nav.go_back();
            Effect::None
        }
        Action::ToggleDrawer => {
            app.nav.toggle_drawer();
            Effect::None
        }
        Action::OpenBranch(branch) => {
            app.nav.open_branch(branch);
            Effect::None
        }
        Action::SelectTab(tab) => {
            app.nav.select_tab(tab);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
