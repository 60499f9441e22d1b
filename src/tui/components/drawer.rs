//! # Drawer Component
//!
//! Side panel listing the drawer branches. Opened and closed with `m`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DrawerState` lives in `TuiState`
//! - `Drawer` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::navigation::DrawerBranch;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the drawer panel.
pub struct DrawerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Point the cursor at the active branch when the panel opens.
    pub fn focus(&mut self, branch: DrawerBranch) {
        self.selected = DrawerBranch::ALL
            .iter()
            .position(|b| *b == branch)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected));
    }
}

/// Events emitted by the drawer.
#[derive(Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    Open(DrawerBranch),
    Dismiss,
}

impl EventHandler for DrawerState {
    type Event = DrawerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DrawerEvent> {
        match event {
            TuiEvent::Back | TuiEvent::ToggleDrawer => Some(DrawerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(DrawerBranch::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => DrawerBranch::ALL
                .get(self.selected)
                .map(|branch| DrawerEvent::Open(*branch)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the drawer panel.
pub struct Drawer<'a> {
    state: &'a mut DrawerState,
    active: DrawerBranch,
}

impl<'a> Drawer<'a> {
    pub fn new(state: &'a mut DrawerState, active: DrawerBranch) -> Self {
        Self { state, active }
    }
}

impl Component for Drawer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [panel, _] =
            Layout::horizontal([Constraint::Length(28), Constraint::Min(0)]).areas(area);

        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Menu ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Open  Esc Close ").centered())
            .padding(Padding::new(1, 1, 1, 0));

        let items: Vec<ListItem> = DrawerBranch::ALL
            .iter()
            .enumerate()
            .map(|(i, branch)| {
                let is_active = *branch == self.active;
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Blue)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_active { " *" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(branch.label(), style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, panel, &mut self.state.list_state);
    }
}
