//! # Core Application Logic
//!
//! This module contains champdex's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • Navigator (screens)  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No network. No UI.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │  catalog   │
//!          │  Adapter   │                │  (reqwest) │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`navigation`]: Drawer / stack / tab topology
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod navigation;
pub mod state;
