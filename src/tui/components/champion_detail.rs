//! # Champion Detail Component
//!
//! Shows the record carried by the Detail stack entry: name, title, blurb
//! and the image URLs built from its id. The body scrolls when the blurb
//! doesn't fit.
//!
//! Height is measured up front with `textwrap` (same trick as the message
//! list) so the `ScrollView` can be sized before anything is drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::{CatalogEndpoint, ChampionRecord};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const NO_CHAMPION_SELECTED: &str = "No champion selected.";

/// Persistent scroll state for the detail body.
#[derive(Default)]
pub struct DetailState {
    pub scroll_state: ScrollViewState,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever a different record is shown.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DetailEvent {
    Back,
}

impl EventHandler for DetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Back => return Some(DetailEvent::Back),
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

pub struct ChampionDetail<'a> {
    state: &'a mut DetailState,
    record: Option<&'a ChampionRecord>,
    endpoint: &'a CatalogEndpoint,
}

impl<'a> ChampionDetail<'a> {
    pub fn new(
        state: &'a mut DetailState,
        record: Option<&'a ChampionRecord>,
        endpoint: &'a CatalogEndpoint,
    ) -> Self {
        Self {
            state,
            record,
            endpoint,
        }
    }

    /// Every line of the card body, already wrapped to `width`.
    fn body_lines(
        record: &ChampionRecord,
        endpoint: &CatalogEndpoint,
        width: usize,
    ) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        lines.extend(wrap_styled(
            &record.name,
            width,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ));
        lines.extend(wrap_styled(
            &record.title,
            width,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::default());
        lines.extend(wrap_styled(&record.blurb, width, Style::default()));
        lines.push(Line::default());

        let dim = Style::default().fg(Color::DarkGray);
        lines.extend(wrap_styled(
            &format!("Icon    {}", endpoint.square_icon_url(&record.id)),
            width,
            dim,
        ));
        lines.extend(wrap_styled(
            &format!("Splash  {}", endpoint.loading_splash_url(&record.id)),
            width,
            dim,
        ));
        lines
    }
}

impl Component for ChampionDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(" Esc Back  PgUp/PgDn Scroll ").centered())
            .padding(Padding::horizontal(1));

        let Some(record) = self.record else {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let [middle] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(inner);
            let fallback = Paragraph::new(NO_CHAMPION_SELECTED)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(fallback, middle);
            return;
        };

        let block = block.title(Span::styled(
            format!(" {} ", record.name),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One column is reserved for the scrollbar.
        let content_width = inner.width.saturating_sub(1);
        if content_width == 0 {
            return;
        }
        let lines = Self::body_lines(record, self.endpoint, content_width as usize);
        let total_height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, total_height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// Wrap `text` to `width` columns, one styled `Line` per wrapped row.
fn wrap_styled(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    let options = textwrap::Options::new(width.max(1))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let wrapped = textwrap::wrap(text, options);
    if wrapped.is_empty() {
        return vec![Line::default()];
    }
    wrapped
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}
