use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C, quits from anywhere
    Submit,
    Back,
    CursorUp,
    CursorDown,
    ScrollPageUp,
    ScrollPageDown,
    NextTab,
    PrevTab,
    ToggleDrawer,
    Reload,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('m')) => Some(TuiEvent::ToggleDrawer),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Reload),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) | (_, KeyCode::Backspace) => Some(TuiEvent::Back),
        (_, KeyCode::Tab) | (_, KeyCode::Right) => Some(TuiEvent::NextTab),
        (_, KeyCode::BackTab) | (_, KeyCode::Left) => Some(TuiEvent::PrevTab),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}
