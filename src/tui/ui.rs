use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ChampionDetail, ChampionList, Drawer, Header, InfoCard, TabBar,
};

/// Header text for the screen in front of the user.
pub fn screen_title(screen: &Screen<'_>) -> String {
    match screen {
        Screen::Home | Screen::Feed => "Champions".to_string(),
        Screen::Detail(Some(record)) => record.name.clone(),
        Screen::Detail(None) => "Details".to_string(),
        Screen::Sobre => "About".to_string(),
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let screen = app.nav.current();
    let on_tabs = matches!(screen, Screen::Home | Screen::Feed);
    let tab_height = if on_tabs { 2 } else { 0 };

    let [header_area, body_area, tab_area] =
        Layout::vertical([Length(1), Min(0), Length(tab_height)]).areas(frame.area());

    Header::new(
        screen_title(&screen),
        app.status_message.clone(),
        app.nav.is_drawer_open(),
    )
    .render(frame, header_area);

    let body = pad(body_area);
    match screen {
        Screen::Home => {
            ChampionList::new(&mut tui.champion_list, &app.catalog, spinner_frame)
                .render(frame, body);
        }
        Screen::Feed => InfoCard::feed().render(frame, body),
        Screen::Detail(record) => {
            ChampionDetail::new(&mut tui.detail, record, &app.endpoint).render(frame, body);
        }
        Screen::Sobre => InfoCard::about().render(frame, body),
    }

    if on_tabs {
        TabBar {
            active: app.nav.tab(),
        }
        .render(frame, tab_area);
    }

    if app.nav.is_drawer_open() {
        Drawer::new(&mut tui.drawer, app.nav.branch()).render(frame, body_area);
    }
}

/// Screen container margin.
fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(1),
    }
    .intersection(area)
}
