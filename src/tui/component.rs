use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that can draw itself into part of the frame.
///
/// Screens are built fresh every frame from props (the translator, the
/// plan, the active tab). Anything that must survive between frames, like
/// the itinerary scroll offset, is borrowed mutably from `TuiState`, which
/// is why `render` takes `&mut self`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw input into a screen-level event (`NavEvent`, `PlannerEvent`,
/// `TripDetailsEvent`, ...). Returning `None` means the input was not
/// meant for this component.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
