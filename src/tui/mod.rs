//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events, terminal resize,
//!   or when a background action arrives.
//!
//! ## Catalog Loads
//!
//! `Effect::LoadCatalog` spawns a tokio task that reports back through an
//! `mpsc` channel. Starting a new load aborts the previous task, and
//! `update()` drops results whose activation is no longer current.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crate::catalog::{CatalogSource, DataDragonClient, fetch_with_timeout};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ChampionListEvent, ChampionListState, DetailEvent, DetailState, DrawerEvent, DrawerState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub champion_list: ChampionListState,
    pub detail: DetailState,
    pub drawer: DrawerState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            champion_list: ChampionListState::new(),
            detail: DetailState::new(),
            drawer: DrawerState::new(),
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn CatalogSource> = Arc::new(DataDragonClient::new(config.endpoint()));
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the in-flight catalog load, if any
    let mut active_load: Option<tokio::task::AbortHandle> = None;

    // Mounting the Home screen starts the first load.
    let effect = update(&mut app, Action::ActivateHome);
    apply_effect(effect, &app, &tx, &mut active_load);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.champion_list.sync_len(app.catalog.records().len());

        let animating = app.catalog.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(&app, &mut tui, event) else {
                continue;
            };
            debug!("Dispatching {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &app, &tx, &mut active_load) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (catalog results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            apply_effect(effect, &app, &tx, &mut active_load);
        }
    }

    if let Some(handle) = active_load.take() {
        handle.abort();
    }
    ratatui::restore();
    info!("champdex shutting down");
    Ok(())
}

/// Perform the I/O an `Effect` asks for. Returns true when the app should quit.
fn apply_effect(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
    active_load: &mut Option<tokio::task::AbortHandle>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::LoadCatalog { activation } => {
            if let Some(previous) = active_load.take() {
                debug!("Aborting superseded catalog load");
                previous.abort();
            }
            *active_load = Some(spawn_catalog_load(
                app.source.clone(),
                activation,
                app.request_timeout,
                tx.clone(),
            ));
            false
        }
    }
}

/// Translate a terminal event into a core action, updating presentation
/// state along the way. Drawer input wins over the screen underneath.
pub fn route_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if app.nav.is_drawer_open() {
        return match tui.drawer.handle_event(&event)? {
            DrawerEvent::Open(branch) => Some(Action::OpenBranch(branch)),
            DrawerEvent::Dismiss => Some(Action::ToggleDrawer),
        };
    }

    if event == TuiEvent::ToggleDrawer {
        tui.drawer.focus(app.nav.branch());
        return Some(Action::ToggleDrawer);
    }

    match app.nav.current() {
        Screen::Home => match event {
            TuiEvent::NextTab | TuiEvent::PrevTab => Some(Action::SelectTab(app.nav.tab().next())),
            _ => match tui.champion_list.handle_event(&event)? {
                ChampionListEvent::Select(index) => {
                    let record = app.catalog.records().get(index)?.clone();
                    tui.detail.reset();
                    Some(Action::SelectChampion(record))
                }
                ChampionListEvent::Reload => Some(Action::ActivateHome),
            },
        },
        Screen::Feed => match event {
            TuiEvent::NextTab | TuiEvent::PrevTab => Some(Action::SelectTab(app.nav.tab().next())),
            _ => None,
        },
        Screen::Detail(_) => match tui.detail.handle_event(&event)? {
            DetailEvent::Back => Some(Action::GoBack),
        },
        Screen::Sobre => None,
    }
}

/// Spawn one catalog fetch for `activation`. The result comes back as
/// `Action::CatalogLoaded` on `tx`.
pub fn spawn_catalog_load(
    source: Arc<dyn CatalogSource>,
    activation: u64,
    timeout: Duration,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!(
        "Spawning catalog load from '{}' (activation {})",
        source.name(),
        activation
    );
    let handle = tokio::spawn(async move {
        let result = fetch_with_timeout(source.as_ref(), timeout).await;
        if tx
            .send(Action::CatalogLoaded { activation, result })
            .is_err()
        {
            warn!(
                "Failed to deliver catalog result for activation {}: receiver dropped",
                activation
            );
        }
    });
    handle.abort_handle()
}
