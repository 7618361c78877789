//! Section chrome shared by the landing page sections.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Paragraph},
};

use crate::ui::colors;

/// Centered bold section heading.
pub fn heading(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD))
}

/// Centered gray line under a heading.
pub fn subheading(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::MUTED))
}

/// Rounded card border used by the smaller content cards.
pub fn card() -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::FAINT))
}
