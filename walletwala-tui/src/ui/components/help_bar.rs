//! Inline context-aware help bar component.

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::colors;

/// Draws a context-aware inline help bar at the given area.
///
/// Takes a slice of (key, description) tuples and renders them as:
/// `key:desc │ key:desc │ ...`
pub fn draw_help_bar(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    let separator = Span::styled(" │ ", Style::default().fg(colors::FAINT));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(separator.clone());
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors::BRAND_LIGHT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(":{}", desc),
            Style::default().fg(colors::MUTED),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
        area,
    );
}

/// Help hints for the landing page.
pub fn landing_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j/k", "scroll"),
        ("drag", "mood"),
        ("1/2/3", "presets"),
        ("←/→", "personas"),
        ("/", "ask"),
        ("q", "quit"),
    ]
}

/// Help hints while the demo input has focus.
pub fn demo_input_hints() -> Vec<(&'static str, &'static str)> {
    vec![("Enter", "ask"), ("Esc", "done")]
}

/// Help hints for the standalone meter screen.
pub fn meter_hints() -> Vec<(&'static str, &'static str)> {
    vec![("drag", "mood"), ("1/2/3", "presets"), ("q", "quit")]
}
