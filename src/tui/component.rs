use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may borrow persistent
/// state owned by `TuiState`, and render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so components can update presentation state
/// (selection, scroll offsets) during the render pass, in line with
/// ratatui's `StatefulWidget` pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
