//! # Champion List Component
//!
//! The Home tab: a spinner while the catalog loads, then one card per
//! champion (name over title). Enter on a card emits `Select(index)`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ChampionListState` lives in `TuiState`
//! - `ChampionList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::catalog::{CatalogState, ChampionRecord};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Persistent selection state for the Home list.
pub struct ChampionListState {
    pub selected: usize,
    pub list_state: ListState,
    /// Number of records currently shown, refreshed each loop iteration.
    item_count: usize,
}

impl Default for ChampionListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChampionListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
            item_count: 0,
        }
    }

    /// Keep the selection inside `0..count` after the catalog changes.
    pub fn sync_len(&mut self, count: usize) {
        self.item_count = count;
        if count == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(count - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// Events emitted by the champion list.
#[derive(Debug, PartialEq, Eq)]
pub enum ChampionListEvent {
    Select(usize),
    Reload,
}

impl EventHandler for ChampionListState {
    type Event = ChampionListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ChampionListEvent> {
        match event {
            TuiEvent::CursorUp => {
                if self.item_count > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.item_count > 0 {
                    self.selected = (self.selected + 1).min(self.item_count - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit if self.item_count > 0 => {
                Some(ChampionListEvent::Select(self.selected))
            }
            TuiEvent::Reload => Some(ChampionListEvent::Reload),
            _ => None,
        }
    }
}

/// Transient render wrapper for the Home list.
pub struct ChampionList<'a> {
    state: &'a mut ChampionListState,
    catalog: &'a CatalogState,
    spinner_frame: usize,
}

impl<'a> ChampionList<'a> {
    pub fn new(
        state: &'a mut ChampionListState,
        catalog: &'a CatalogState,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            catalog,
            spinner_frame,
        }
    }

    fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
        let height = lines.len() as u16;
        let [middle] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, middle);
    }

    fn card(record: &ChampionRecord, width: usize, selected: bool) -> ListItem<'static> {
        let (name_style, title_style) = if selected {
            let style = Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED);
            (style, style)
        } else {
            (
                Style::default().add_modifier(Modifier::BOLD),
                Style::default().fg(Color::DarkGray),
            )
        };
        let name = format!("{:<width$}", truncate_str(&record.name, width), width = width);
        let title = format!("{:<width$}", truncate_str(&record.title, width), width = width);
        ListItem::new(vec![
            Line::from(Span::styled(name, name_style)),
            Line::from(Span::styled(title, title_style)),
            Line::default(),
        ])
    }
}

impl Component for ChampionList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.catalog {
            CatalogState::Loading => {
                let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
                Self::render_centered(
                    frame,
                    area,
                    vec![
                        Line::from(Span::styled(glyph, Style::default().fg(Color::Blue))),
                        Line::from("Loading champions..."),
                    ],
                );
            }
            CatalogState::Failed(message) => {
                Self::render_centered(
                    frame,
                    area,
                    vec![
                        Line::from(Span::styled(
                            "Could not load champions.",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(
                            message.clone(),
                            Style::default().fg(Color::DarkGray),
                        )),
                        Line::default(),
                        Line::from("Press r to reload"),
                    ],
                );
            }
            CatalogState::Loaded(records) if records.is_empty() => {
                Self::render_centered(frame, area, vec![Line::from("No champions found.")]);
            }
            CatalogState::Loaded(records) => {
                let block = Block::default()
                    .borders(Borders::NONE)
                    .padding(Padding::horizontal(1));
                let width = area.width.saturating_sub(2) as usize;
                let items: Vec<ListItem> = records
                    .iter()
                    .enumerate()
                    .map(|(i, record)| Self::card(record, width, i == self.state.selected))
                    .collect();
                let list = List::new(items).block(block);
                frame.render_stateful_widget(list, area, &mut self.state.list_state);
            }
        }
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::aatrox;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut ChampionListState, catalog: &CatalogState) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ChampionList::new(state, catalog, 0).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_shows_indicator() {
        let mut state = ChampionListState::new();
        let text = render(&mut state, &CatalogState::Loading);
        assert!(text.contains("Loading champions..."));
    }

    #[test]
    fn test_loaded_shows_name_and_title() {
        let catalog = CatalogState::Loaded(vec![aatrox()]);
        let mut state = ChampionListState::new();
        state.sync_len(1);
        let text = render(&mut state, &catalog);
        assert!(text.contains("Aatrox"));
        assert!(text.contains("the Darkin Blade"));
    }

    #[test]
    fn test_failed_shows_message() {
        let catalog = CatalogState::Failed("network error: refused".to_string());
        let mut state = ChampionListState::new();
        let text = render(&mut state, &catalog);
        assert!(text.contains("Could not load champions."));
        assert!(text.contains("network error: refused"));
    }

    #[test]
    fn test_empty_catalog() {
        let mut state = ChampionListState::new();
        let text = render(&mut state, &CatalogState::Loaded(Vec::new()));
        assert!(text.contains("No champions found."));
    }

    #[test]
    fn test_navigation_and_select() {
        let mut state = ChampionListState::new();
        state.sync_len(2);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.selected, 1);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(ChampionListEvent::Select(1))
        );
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(ChampionListEvent::Select(0))
        );
    }

    #[test]
    fn test_submit_on_empty_list_does_nothing() {
        let mut state = ChampionListState::new();
        state.sync_len(0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(
            state.handle_event(&TuiEvent::Reload),
            Some(ChampionListEvent::Reload)
        );
    }

    #[test]
    fn test_sync_len_clamps_selection() {
        let mut state = ChampionListState::new();
        state.sync_len(5);
        state.selected = 4;
        state.sync_len(2);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Aatrox", 10), "Aatrox");
        assert_eq!(truncate_str("the Darkin Blade", 8), "the D...");
        assert_eq!(truncate_str("abc", 2), "..");
    }
}
