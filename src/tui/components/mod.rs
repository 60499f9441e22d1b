//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields:
//! - `Header`: top bar with menu glyph, screen title and status
//! - `TabBar`: Home / Feed switcher under the Tabs screen
//! - `InfoCard`: static text card for Feed and Sobre
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it each
//! frame and renders:
//! - `ChampionListState` / `ChampionList`: the Home catalog list
//! - `DetailState` / `ChampionDetail`: scrollable champion card
//! - `DrawerState` / `Drawer`: side panel with the drawer branches
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! ChampionList::new(&mut tui.champion_list, &app.catalog, spinner_frame).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! ChampionList::render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── header.rs           (top bar)
//! ├── tab_bar.rs          (bottom tabs)
//! ├── info_card.rs        (Feed / About)
//! ├── champion_list.rs    (Home list)
//! ├── champion_detail.rs  (Detail screen)
//! └── drawer.rs           (side panel)
//! ```

pub mod champion_detail;
pub mod champion_list;
pub mod drawer;
mod header;
mod info_card;
mod tab_bar;

pub use champion_detail::{ChampionDetail, DetailEvent, DetailState};
pub use champion_list::{ChampionList, ChampionListEvent, ChampionListState};
pub use drawer::{Drawer, DrawerEvent, DrawerState};
pub use header::Header;
pub use info_card::InfoCard;
pub use tab_bar::TabBar;
