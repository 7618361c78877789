//! State for the landing page view.

use ratatui::layout::Rect;
use tui_widgets::scrollview::ScrollViewState;

use crate::{content::PERSONAS, demo, ui::events::Scrollable};

/// Longest question the demo input accepts.
const INPUT_LIMIT: usize = 80;

/// State for the landing page: scroll position, persona selection, the
/// demo input, and the rects needed to route mouse events.
///
/// `meter_panel` and `demo_input` are in page content coordinates;
/// `page` is the on-screen area the scroll view rendered into. Mouse
/// events are translated from screen to content space before hit-testing,
/// so hotspots stay valid wherever the page is scrolled.
#[derive(Default)]
pub struct LandingState {
    pub scroll: ScrollViewState,
    pub selected_persona: usize,
    pub input: String,
    pub input_focused: bool,
    pub response: Option<&'static str>,
    /// Screen area of the scrollable page; `None` until the first draw.
    pub page: Option<Rect>,
    /// Content-space rect of the meter panel.
    pub meter_panel: Option<Rect>,
    /// Content-space rect of the demo input line.
    pub demo_input: Option<Rect>,
}

impl LandingState {
    /// Translates a screen coordinate into page content space, if it falls
    /// inside the page area.
    pub fn to_content(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        let page = self.page?;
        if !page.contains(ratatui::layout::Position::new(column, row)) {
            return None;
        }
        let offset = self.scroll.offset();
        Some((
            column - page.x + offset.x,
            row - page.y + offset.y,
        ))
    }

    /// Content-space X for drag moves: unlike [`to_content`](Self::to_content)
    /// this never rejects, so a drag that leaves the page keeps updating and
    /// saturates at the track edges.
    pub fn to_content_x(&self, column: u16) -> Option<f64> {
        let page = self.page?;
        let offset = self.scroll.offset();
        Some(f64::from(column) - f64::from(page.x) + f64::from(offset.x))
    }

    pub fn next_persona(&mut self) {
        self.selected_persona = (self.selected_persona + 1) % PERSONAS.len();
    }

    pub fn prev_persona(&mut self) {
        self.selected_persona = (self.selected_persona + PERSONAS.len() - 1) % PERSONAS.len();
    }

    pub fn push_char(&mut self, c: char) {
        if self.input.chars().count() < INPUT_LIMIT {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Answers the typed question from the fixed table.
    pub fn submit(&mut self) {
        self.response = Some(demo::respond(&self.input));
    }
}

impl Scrollable for LandingState {
    fn scroll_down(&mut self) {
        self.scroll.scroll_down();
    }
    fn scroll_up(&mut self) {
        self.scroll.scroll_up();
    }
    fn scroll_page_down(&mut self) {
        self.scroll.scroll_page_down();
    }
    fn scroll_page_up(&mut self) {
        self.scroll.scroll_page_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_content_requires_a_measured_page() {
        let state = LandingState::default();
        assert_eq!(state.to_content(5, 5), None);
        assert_eq!(state.to_content_x(5), None);
    }

    #[test]
    fn test_to_content_translates_by_page_origin_and_scroll() {
        let mut state = LandingState {
            page: Some(Rect::new(2, 1, 80, 30)),
            ..Default::default()
        };
        assert_eq!(state.to_content(2, 1), Some((0, 0)));
        assert_eq!(state.to_content(12, 6), Some((10, 5)));
        // Outside the page area.
        assert_eq!(state.to_content(1, 1), None);
        assert_eq!(state.to_content(12, 31), None);

        // Scrolling shifts the row mapping.
        state.scroll.scroll_down();
        let (_, row) = state.to_content(12, 6).unwrap();
        assert_eq!(row, 6);
    }

    #[test]
    fn test_to_content_x_can_go_past_the_page_edge() {
        let state = LandingState {
            page: Some(Rect::new(4, 0, 80, 30)),
            ..Default::default()
        };
        // Left of the page maps to a negative content X.
        assert_eq!(state.to_content_x(0), Some(-4.0));
        assert_eq!(state.to_content_x(10), Some(6.0));
    }

    #[test]
    fn test_persona_selection_wraps() {
        let mut state = LandingState::default();
        state.prev_persona();
        assert_eq!(state.selected_persona, PERSONAS.len() - 1);
        state.next_persona();
        assert_eq!(state.selected_persona, 0);
    }

    #[test]
    fn test_input_editing_and_submit() {
        let mut state = LandingState::default();
        for c in "Am I Overspending".chars() {
            state.push_char(c);
        }
        state.backspace();
        state.push_char('g');
        state.submit();

        assert_eq!(
            state.response,
            Some("You're 2,100 PKR over budget this month. Maybe skip a few Careem rides? 😉")
        );
    }

    #[test]
    fn test_input_is_bounded() {
        let mut state = LandingState::default();
        for _ in 0..200 {
            state.push_char('x');
        }
        assert_eq!(state.input.chars().count(), 80);
    }
}
