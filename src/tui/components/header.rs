//! # Header Component
//!
//! Top app bar: menu glyph, screen title and a status message.
//!
//! Stateless. All three props come from different places:
//! - `title`: derived from the current screen (branch, stack top)
//! - `status_message`: core App state (catalog progress)
//! - `drawer_open`: navigator state, flips the menu glyph
//!
//! ```text
//! ≡ Champions                                   | 168 champions
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Header {
    pub title: String,
    pub status_message: String,
    pub drawer_open: bool,
}

impl Header {
    pub fn new(title: String, status_message: String, drawer_open: bool) -> Self {
        Self {
            title,
            status_message,
            drawer_open,
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let menu = if self.drawer_open { "× " } else { "≡ " };
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(30)]).areas(area);

        let title = Line::from(vec![
            Span::styled(menu, Style::default().fg(Color::Blue)),
            Span::styled(
                self.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), left);

        if !self.status_message.is_empty() {
            let status = Paragraph::new(format!("| {}", self.status_message))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right);
            frame.render_widget(status, right);
        }
    }
}
