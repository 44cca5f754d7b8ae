use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit, // Ctrl+C, quits from anywhere

    // Navigation
    SelectIndex(usize), // 1-5 keys, zero-based
    NextTab,            // Tab
    PrevTab,            // Shift+Tab
    ToggleLanguage,     // l

    // Screen-local events
    Submit,
    Back, // Backspace or b
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    ScrollUp,
    ScrollDown,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a raw crossterm event to a `TuiEvent`.
pub fn translate(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals (Windows) report releases too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('l')) => Some(TuiEvent::ToggleLanguage),
        (_, KeyCode::Char('b')) | (_, KeyCode::Backspace) => Some(TuiEvent::Back),
        (_, KeyCode::Char(c @ '1'..='5')) => Some(TuiEvent::SelectIndex(c as usize - '1' as usize)),
        (_, KeyCode::BackTab) => Some(TuiEvent::PrevTab),
        (KeyModifiers::SHIFT, KeyCode::Tab) => Some(TuiEvent::PrevTab),
        (_, KeyCode::Tab) => Some(TuiEvent::NextTab),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Submit),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_number_keys_select_index() {
        assert_eq!(
            translate(key(KeyCode::Char('1'), KeyModifiers::NONE)),
            Some(TuiEvent::SelectIndex(0))
        );
        assert_eq!(
            translate(key(KeyCode::Char('5'), KeyModifiers::NONE)),
            Some(TuiEvent::SelectIndex(4))
        );
        assert_eq!(translate(key(KeyCode::Char('6'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(
            translate(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(TuiEvent::NextTab)
        );
        assert_eq!(
            translate(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::PrevTab)
        );
    }

    #[test]
    fn test_back_keys() {
        assert_eq!(
            translate(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(TuiEvent::Back)
        );
        assert_eq!(
            translate(key(KeyCode::Char('b'), KeyModifiers::NONE)),
            Some(TuiEvent::Back)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(release), None);
    }

    #[test]
    fn test_left_click_reports_position() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 30,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click), Some(TuiEvent::MouseClick(12, 30)));
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
