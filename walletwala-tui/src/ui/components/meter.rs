//! The mood meter panel: mood display, draggable track, amounts and the
//! three scenario buttons.
//!
//! Rendering and hit-testing share one pure layout function so the rects
//! the event router checks are exactly the rects that were drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::{
    content::{METER_TIP, MOOD_SCALE, PRESET_LABELS},
    meter::{format_amount, MoodMeter, MoodTier, PRESETS, TOTAL_BUDGET_PKR},
    ui::{
        colors,
        components::gauge::{make_gauge, GaugeStyle},
        layout::preset_split,
    },
};

/// Total height of the panel including its border.
pub const METER_PANEL_HEIGHT: u16 = 17;

/// Horizontal inset between the border and the content (border + padding).
const INSET_X: u16 = 3;

/// Where each piece of the panel lands inside a given area.
pub struct MeterLayout {
    pub emoji: Rect,
    pub headline: Rect,
    pub advice: Rect,
    pub scale: Rect,
    pub track: Rect,
    pub spent: Rect,
    pub remaining: Rect,
    pub presets: [Rect; 3],
    pub tip: Rect,
}

/// Computes the panel layout for `area`. Pure; used by both rendering and
/// mouse hit-testing.
pub fn meter_layout(area: Rect) -> MeterLayout {
    let inner = area.inner(Margin::new(INSET_X, 1));
    let [emoji, headline, advice, _, scale, track, spent, remaining, _, presets_row, tip] =
        Layout::vertical([
            Constraint::Length(1), // emoji
            Constraint::Length(1), // headline
            Constraint::Length(1), // advice
            Constraint::Length(1),
            Constraint::Length(1), // scale legend
            Constraint::Length(1), // track
            Constraint::Length(1), // spent
            Constraint::Length(1), // remaining
            Constraint::Length(1),
            Constraint::Length(4), // preset buttons
            Constraint::Length(2), // tip
        ])
        .areas(inner);

    MeterLayout {
        emoji,
        headline,
        advice,
        scale,
        track,
        spent,
        remaining,
        presets: preset_split(presets_row),
        tip,
    }
}

/// Returns the preset value under a mouse coordinate, if any.
pub fn preset_at(layout: &MeterLayout, column: u16, row: u16) -> Option<u8> {
    layout
        .presets
        .iter()
        .zip(PRESETS)
        .find(|(rect, _)| crate::ui::events::hit(**rect, column, row))
        .map(|(_, preset)| preset)
}

/// Widget rendering the full meter panel from the current meter state.
pub struct MeterPanel<'a> {
    meter: &'a MoodMeter,
}

impl<'a> MeterPanel<'a> {
    pub fn new(meter: &'a MoodMeter) -> Self {
        Self { meter }
    }
}

impl Widget for MeterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tier = self.meter.tier();
        let mood = self.meter.mood();
        let projection = self.meter.projection();
        let layout = meter_layout(area);

        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::FAINT))
            .render(area, buf);

        let tier_color = match tier {
            MoodTier::Happy => colors::BRAND_LIGHT,
            MoodTier::Okay => colors::WARN,
            MoodTier::Broke => colors::DANGER,
        };

        Paragraph::new(tier.emoji())
            .alignment(Alignment::Center)
            .render(layout.emoji, buf);
        Paragraph::new(tier.headline())
            .alignment(Alignment::Center)
            .style(Style::default().fg(tier_color).add_modifier(Modifier::BOLD))
            .render(layout.headline, buf);
        Paragraph::new(tier.advice())
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::MUTED))
            .render(layout.advice, buf);

        draw_scale(layout.scale, buf);
        draw_track(layout.track, buf, mood, tier);

        let spent = Line::from(vec![
            Span::styled("Spent: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                format!("{} PKR", format_amount(projection.spent)),
                Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" of ", Style::default().fg(colors::MUTED)),
            Span::styled(
                format!("{} PKR", format_amount(TOTAL_BUDGET_PKR)),
                Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" budget", Style::default().fg(colors::MUTED)),
        ]);
        Paragraph::new(spent)
            .alignment(Alignment::Center)
            .render(layout.spent, buf);

        let remaining = Line::from(vec![
            Span::styled("Remaining: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                format!("{} PKR", format_amount(projection.remaining)),
                Style::default()
                    .fg(colors::BRAND_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(remaining)
            .alignment(Alignment::Center)
            .render(layout.remaining, buf);

        for (i, rect) in layout.presets.iter().enumerate() {
            draw_preset_button(*rect, buf, i, tier);
        }

        Paragraph::new(METER_TIP)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(colors::ACCENT))
            .render(layout.tip, buf);
    }
}

/// Scale legend: 😁 Rich on the left, 😐 Okay centered, 😰 Broke right.
fn draw_scale(area: Rect, buf: &mut Buffer) {
    let [left, mid, right] =
        Layout::horizontal([Constraint::Fill(1); 3]).areas(area);
    let style = Style::default().fg(colors::MUTED);

    Paragraph::new(MOOD_SCALE[0]).style(style).render(left, buf);
    Paragraph::new(MOOD_SCALE[1])
        .alignment(Alignment::Center)
        .style(style)
        .render(mid, buf);
    Paragraph::new(MOOD_SCALE[2])
        .alignment(Alignment::Right)
        .style(style)
        .render(right, buf);
}

/// Gauge fill plus the drag handle.
fn draw_track(area: Rect, buf: &mut Buffer, mood: u8, tier: MoodTier) {
    make_gauge(
        &format!("{mood}%"),
        f64::from(mood),
        GaugeStyle::for_tier(tier),
    )
    .render(area, buf);

    if area.width > 0 {
        let x = area.x + handle_offset(mood, area.width);
        buf.set_string(
            x,
            area.y,
            "●",
            Style::default()
                .fg(Color::White)
                .bg(colors::CARD_BG)
                .add_modifier(Modifier::BOLD),
        );
    }
}

/// Handle cell offset within a track of `width` cells: 0 lands on the
/// first cell, 100 on the last.
fn handle_offset(mood: u8, width: u16) -> u16 {
    (((u32::from(mood) * u32::from(width.saturating_sub(1))) + 50) / 100) as u16
}

/// One scenario button; highlighted when the current mood falls in the
/// button's tier.
fn draw_preset_button(area: Rect, buf: &mut Buffer, index: usize, current: MoodTier) {
    let (emoji, label) = PRESET_LABELS[index];
    let preset_tier = MoodTier::from_mood(PRESETS[index]);
    let active = preset_tier == current;

    let border_color = if active {
        match preset_tier {
            MoodTier::Happy => colors::BRAND_LIGHT,
            MoodTier::Okay => colors::WARN,
            MoodTier::Broke => colors::DANGER,
        }
    } else {
        colors::FAINT
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    block.render(area, buf);

    let [emoji_row, label_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    Paragraph::new(emoji)
        .alignment(Alignment::Center)
        .render(emoji_row, buf);

    let mut label_style = Style::default().fg(colors::MUTED);
    if active {
        label_style = Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD);
    }
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(label_style)
        .render(label_row, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_area() -> Rect {
        Rect::new(0, 0, 70, METER_PANEL_HEIGHT)
    }

    #[test]
    fn test_layout_keeps_track_inside_panel() {
        let area = panel_area();
        let layout = meter_layout(area);

        assert!(layout.track.x >= area.x + INSET_X);
        assert_eq!(layout.track.width, area.width - 2 * INSET_X);
        assert_eq!(layout.track.height, 1);
        assert!(layout.track.bottom() < area.bottom());
    }

    #[test]
    fn test_layout_presets_do_not_overlap() {
        let layout = meter_layout(panel_area());
        let [a, b, c] = layout.presets;

        assert!(a.width > 0 && b.width > 0 && c.width > 0);
        assert!(a.right() <= b.x);
        assert!(b.right() <= c.x);
        assert_eq!(a.height, 4);
    }

    #[test]
    fn test_preset_at_maps_buttons_to_values() {
        let layout = meter_layout(panel_area());

        let [a, _, c] = layout.presets;
        assert_eq!(preset_at(&layout, a.x, a.y), Some(25));
        assert_eq!(preset_at(&layout, c.x + 1, c.y + 1), Some(90));
        // The track is not a preset button.
        assert_eq!(preset_at(&layout, layout.track.x, layout.track.y), None);
    }

    #[test]
    fn test_handle_offset_spans_full_track() {
        assert_eq!(handle_offset(0, 50), 0);
        assert_eq!(handle_offset(100, 50), 49);
        assert_eq!(handle_offset(50, 51), 25);
    }

    #[test]
    fn test_render_draws_handle_on_track() {
        let area = panel_area();
        let mut buf = Buffer::empty(area);
        let meter = MoodMeter::default();

        MeterPanel::new(&meter).render(area, &mut buf);

        let layout = meter_layout(area);
        let x = layout.track.x + handle_offset(meter.mood(), layout.track.width);
        let cell = buf.cell((x, layout.track.y)).expect("handle cell in buffer");
        assert_eq!(cell.symbol(), "●");
    }
}
