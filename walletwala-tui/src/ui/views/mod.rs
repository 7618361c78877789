//! View implementations for the terminal pages.
//!
//! Each view is a self-contained unit with its own state and rendering logic.

mod landing;
mod meter;

use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

pub use landing::LandingView;
pub use meter::MeterView;

/// Trait for top-level screens.
///
/// Views handle events and render themselves to the terminal.
pub trait View: Send {
    /// Handles an input event.
    ///
    /// Returns `true` if the event was consumed and a redraw is needed.
    fn on_event(&mut self, ev: &Event) -> bool;

    /// Periodic animation tick (the chat-carousel cadence).
    ///
    /// Returns `true` if a redraw is needed.
    fn on_tick(&mut self) -> bool {
        false
    }

    /// Whether printable keys are currently text input. While true the
    /// app loop must not treat `q` as quit.
    fn captures_input(&self) -> bool {
        false
    }

    /// Renders the view to the given frame area.
    fn draw(&mut self, f: &mut Frame, area: Rect);
}

/// Creates a view by name.
///
/// # Arguments
/// * `name` - View name: "landing" or "meter"
///
/// # Returns
/// Boxed view instance. Defaults to LandingView for unknown names.
pub fn make_view(name: &str) -> Box<dyn View> {
    match name.to_ascii_lowercase().as_str() {
        "meter" | "mood" => Box::new(MeterView::default()),
        "landing" | "page" => Box::new(LandingView::default()),
        _ => Box::new(LandingView::default()),
    }
}
