//! Event helpers shared across views.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};

/// Trait for types that support scrolling.
///
/// Provides a unified interface for scroll operations across views.
pub trait Scrollable {
    fn scroll_down(&mut self);
    fn scroll_up(&mut self);
    fn scroll_page_down(&mut self);
    fn scroll_page_up(&mut self);
}

/// Handles scroll navigation keys for any Scrollable type.
///
/// Returns `true` if the key was handled, `false` otherwise.
pub fn handle_scroll_key<S: Scrollable>(state: &mut S, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_down();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_up();
            true
        }
        KeyCode::PageDown => {
            state.scroll_page_down();
            true
        }
        KeyCode::PageUp => {
            state.scroll_page_up();
            true
        }
        _ => false,
    }
}

/// Checks if the event is the quit key (`q`, unmodified).
///
/// Views that are capturing text input suppress this via
/// [`View::captures_input`](crate::ui::views::View::captures_input);
/// [`is_interrupt_event`] always quits.
pub fn is_quit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers,
            ..
        }) if modifiers.is_empty()
    )
}

/// Checks for ctrl-c, which quits regardless of focus.
pub fn is_interrupt_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL)
    )
}

/// Whether a mouse coordinate falls inside a rect.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Maps the 1/2/3 keys to the scenario preset values.
pub fn preset_for_key(key: KeyCode) -> Option<u8> {
    match key {
        KeyCode::Char('1') => Some(crate::meter::PRESETS[0]),
        KeyCode::Char('2') => Some(crate::meter::PRESETS[1]),
        KeyCode::Char('3') => Some(crate::meter::PRESETS[2]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit_event() {
        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(is_quit_event(&quit));

        // A modified q is not quit; the demo input may see ctrl/alt chords.
        let alt_q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT));
        assert!(!is_quit_event(&alt_q));

        let not_quit = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(!is_quit_event(&not_quit));
    }

    #[test]
    fn test_is_interrupt_event() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(is_interrupt_event(&ctrl_c));

        let plain_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!is_interrupt_event(&plain_c));
    }

    #[test]
    fn test_preset_for_key() {
        assert_eq!(preset_for_key(KeyCode::Char('1')), Some(25));
        assert_eq!(preset_for_key(KeyCode::Char('2')), Some(60));
        assert_eq!(preset_for_key(KeyCode::Char('3')), Some(90));
        assert_eq!(preset_for_key(KeyCode::Char('4')), None);
        assert_eq!(preset_for_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_hit_edges() {
        let rect = Rect::new(10, 5, 20, 1);
        assert!(hit(rect, 10, 5));
        assert!(hit(rect, 29, 5));
        assert!(!hit(rect, 30, 5));
        assert!(!hit(rect, 9, 5));
        assert!(!hit(rect, 15, 6));
    }

    struct MockScrollable {
        down: usize,
        up: usize,
    }

    impl Scrollable for MockScrollable {
        fn scroll_down(&mut self) {
            self.down += 1;
        }
        fn scroll_up(&mut self) {
            self.up += 1;
        }
        fn scroll_page_down(&mut self) {
            self.down += 10;
        }
        fn scroll_page_up(&mut self) {
            self.up += 10;
        }
    }

    #[test]
    fn test_handle_scroll_key() {
        let mut state = MockScrollable { down: 0, up: 0 };

        assert!(handle_scroll_key(&mut state, KeyCode::Down));
        assert_eq!(state.down, 1);

        assert!(handle_scroll_key(&mut state, KeyCode::Char('k')));
        assert_eq!(state.up, 1);

        assert!(handle_scroll_key(&mut state, KeyCode::PageDown));
        assert_eq!(state.down, 11);

        assert!(!handle_scroll_key(&mut state, KeyCode::Char('x')));
    }
}
