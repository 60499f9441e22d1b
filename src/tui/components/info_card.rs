//! Static text card used by the Feed tab and the Sobre branch.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

impl InfoCard {
    pub fn feed() -> Self {
        Self {
            icon: "◉",
            title: "Feed",
            body: "Example of another tab (Feed).",
        }
    }

    pub fn about() -> Self {
        Self {
            icon: "ⓘ",
            title: "About the App",
            body: "Terminal champion browser built on ratatui, using the official \
                   League of Legends data API (Data Dragon).",
        }
    }
}

impl Component for InfoCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(vec![
                Span::styled(format!(" {} ", self.icon), Style::default().fg(Color::Blue)),
                Span::styled(
                    format!("{} ", self.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]))
            .padding(Padding::uniform(1));

        // Card height follows the text, capped by the screen.
        let inner_width = area.width.saturating_sub(4).max(1);
        let paragraph = Paragraph::new(self.body).wrap(Wrap { trim: true });
        let height = (paragraph.line_count(inner_width) as u16 + 4).min(area.height);
        let [card, _] =
            Layout::vertical([Constraint::Length(height), Constraint::Min(0)]).areas(area);

        frame.render_widget(paragraph.block(block), card);
    }
}
