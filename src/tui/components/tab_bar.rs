//! Bottom tab bar for the Tabs screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs};

use crate::core::navigation::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub active: Tab,
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Tab::ALL.iter().map(|t| format!(" {} ", t.label()));
        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│")
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(tabs, area);
    }
}
