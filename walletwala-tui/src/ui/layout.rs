//! Layout utilities shared across views.

use ratatui::layout::{Constraint, Layout, Rect};

/// Gap between side-by-side cards.
pub const COL_GAP: u16 = 2;

/// Centers a content column of at most `max_width` inside `area`.
///
/// Narrow terminals get the full width; wide ones get a centered band,
/// like the page's `max-w` containers.
pub fn centered(area: Rect, max_width: u16) -> Rect {
    if area.width <= max_width {
        return area;
    }
    let x = area.x + (area.width - max_width) / 2;
    Rect {
        x,
        width: max_width,
        ..area
    }
}

/// Splits a row into three equal buttons with gaps between them.
pub fn preset_split(area: Rect) -> [Rect; 3] {
    let [a, _, b, _, c] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(COL_GAP),
        Constraint::Fill(1),
        Constraint::Length(COL_GAP),
        Constraint::Fill(1),
    ])
    .areas(area);
    [a, b, c]
}

/// Splits an area into `n` equal columns with gaps, returned left to right.
pub fn card_row(area: Rect, n: u16) -> Vec<Rect> {
    let mut constraints = Vec::with_capacity(n as usize * 2);
    for i in 0..n {
        if i > 0 {
            constraints.push(Constraint::Length(COL_GAP));
        }
        constraints.push(Constraint::Fill(1));
    }
    Layout::horizontal(constraints)
        .split(area)
        .iter()
        .step_by(2)
        .copied()
        .collect()
}
