//! Standalone mood meter screen.
//!
//! The same meter panel as on the landing page, alone and centered. Mouse
//! down on the track starts a drag session with an immediate position
//! update; drag events keep updating while the session is active; any
//! button release or a lost terminal focus ends it.

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::{
    content::{METER_SUBTITLE, METER_TITLE},
    meter::MoodMeter,
    ui::{
        components::{
            draw_help_bar, heading, meter_hints, meter_layout, preset_at, subheading,
            MeterLayout, MeterPanel, METER_PANEL_HEIGHT,
        },
        events::{hit, preset_for_key},
        layout::centered,
    },
};

use super::View;

/// Widest the panel gets on large terminals.
const PANEL_MAX_WIDTH: u16 = 72;

/// Meter view: the interactive mood meter, full screen.
#[derive(Default)]
pub struct MeterView {
    meter: MoodMeter,
    /// Panel layout from the last draw; `None` until first laid out.
    layout: Option<MeterLayout>,
}

impl MeterView {
    fn on_mouse(&mut self, m: &MouseEvent) -> bool {
        match m.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(layout) = &self.layout else {
                    return false;
                };
                if hit(layout.track, m.column, m.row) {
                    self.meter.begin_drag();
                    return self.meter.set_from_pointer(f64::from(m.column));
                }
                if let Some(preset) = preset_at(layout, m.column, m.row) {
                    self.meter.set_preset(preset);
                    return true;
                }
                false
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                // Live drag state, checked per move.
                if self.meter.is_dragging() {
                    self.meter.set_from_pointer(f64::from(m.column))
                } else {
                    false
                }
            }
            MouseEventKind::Up(_) => {
                let was_dragging = self.meter.is_dragging();
                self.meter.end_drag();
                was_dragging
            }
            _ => false,
        }
    }
}

impl View for MeterView {
    fn on_event(&mut self, ev: &Event) -> bool {
        match ev {
            Event::Key(k) => match preset_for_key(k.code) {
                Some(preset) => {
                    self.meter.set_preset(preset);
                    true
                }
                None => false,
            },
            Event::Mouse(m) => self.on_mouse(m),
            // Drag ended abnormally: release the session anyway.
            Event::FocusLost => {
                self.meter.end_drag();
                false
            }
            _ => false,
        }
    }

    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let [help_area, _, title_area, subtitle_area, _, body] = Layout::vertical([
            Constraint::Length(1), // help bar
            Constraint::Length(1),
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        draw_help_bar(f, help_area, &meter_hints());
        f.render_widget(heading(METER_TITLE), title_area);
        f.render_widget(subheading(METER_SUBTITLE), subtitle_area);

        let panel = Rect {
            height: METER_PANEL_HEIGHT.min(body.height),
            ..centered(body, PANEL_MAX_WIDTH)
        };
        f.render_widget(MeterPanel::new(&self.meter), panel);

        // Measure the track for pointer-to-percentage conversion; the
        // layout is the single source for both drawing and hit-testing.
        let layout = meter_layout(panel);
        self.meter
            .measure(f64::from(layout.track.x), f64::from(layout.track.width));
        self.layout = Some(layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meter::PRESETS;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_preset_keys_update_meter() {
        let mut view = MeterView::default();
        assert!(view.on_event(&key('3')));
        assert_eq!(view.meter.mood(), PRESETS[2]);
        assert!(view.on_event(&key('1')));
        assert_eq!(view.meter.mood(), PRESETS[0]);
    }

    #[test]
    fn test_mouse_ignored_before_first_draw() {
        let mut view = MeterView::default();
        let down = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!view.on_event(&down));
        assert!(!view.meter.is_dragging());
    }

    #[test]
    fn test_focus_lost_ends_drag() {
        let mut view = MeterView::default();
        view.meter.begin_drag();
        view.on_event(&Event::FocusLost);
        assert!(!view.meter.is_dragging());
    }
}
