//! Landing page view.
//!
//! The whole page as one scrollable column of sections:
//!
//! ```text
//! hero (chat carousel + phone mockup)
//! how it works
//! personas
//! mood meter          ← the interactive part
//! live demo
//! features
//! testimonials
//! CTA banner
//! footer
//! ```
//!
//! Sections are drawn into a scroll view at fixed content offsets; mouse
//! events are translated from screen to content coordinates before
//! hit-testing, so the meter keeps working wherever the page is scrolled.

mod state;

use crate::ui::events::Scrollable;
use chrono::{Datelike, Local};
use crossterm::event::{Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect, Size},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_widgets::scrollview::ScrollView;

use crate::{
    carousel::Carousel,
    content::{
        ChatMessage, CHAT_MESSAGES, CTA_BUTTON, CTA_SUBTITLE, CTA_TITLE, DEMO_EMPTY_HINT,
        DEMO_PLACEHOLDER, DEMO_SUBTITLE, DEMO_SUGGESTIONS, DEMO_TITLE, FEATURES,
        FEATURES_SUBTITLE, FEATURES_TITLE, FOOTER_COLUMNS, FOOTER_TAGLINE, HERO_BADGE,
        HERO_CTA_PRIMARY, HERO_CTA_SECONDARY, HERO_SUBTITLE, HERO_TITLE, HOW_IT_WORKS,
        HOW_SUBTITLE, HOW_TITLE, METER_SUBTITLE, METER_TITLE, PERSONAS, PERSONAS_SUBTITLE,
        PERSONAS_TITLE, PHONE_CONVERSATION, TESTIMONIALS, TESTIMONIALS_TITLE,
    },
    meter::MoodMeter,
    ui::{
        colors,
        components::{
            card, demo_input_hints, draw_help_bar, heading, landing_hints, meter_layout,
            preset_at, subheading, MeterPanel, METER_PANEL_HEIGHT,
        },
        events::{handle_scroll_key, hit, preset_for_key},
        layout::{card_row, centered},
    },
};

use super::View;
use state::LandingState;

/// Widest the content band gets on large terminals.
const CONTENT_MAX_WIDTH: u16 = 100;

/// Blank rows between sections.
const SECTION_GAP: u16 = 2;

// Section heights, in content rows.
const HERO_H: u16 = 16;
const HOW_H: u16 = 8;
const PERSONAS_H: u16 = 13;
const METER_H: u16 = 3 + METER_PANEL_HEIGHT;
const DEMO_H: u16 = 15;
const FEATURES_H: u16 = 14;
const TESTIMONIALS_H: u16 = 9;
const CTA_H: u16 = 7;
const FOOTER_H: u16 = 10;

const TOTAL_CONTENT_HEIGHT: u16 = HERO_H
    + HOW_H
    + PERSONAS_H
    + METER_H
    + DEMO_H
    + FEATURES_H
    + TESTIMONIALS_H
    + CTA_H
    + FOOTER_H
    + 8 * SECTION_GAP;

/// The full landing page.
pub struct LandingView {
    meter: MoodMeter,
    carousel: Carousel,
    state: LandingState,
}

impl Default for LandingView {
    fn default() -> Self {
        Self {
            meter: MoodMeter::default(),
            carousel: Carousel::new(CHAT_MESSAGES.len()),
            state: LandingState::default(),
        }
    }
}

impl LandingView {
    fn on_key(&mut self, code: KeyCode) -> bool {
        if self.state.input_focused {
            return self.on_input_key(code);
        }
        match code {
            KeyCode::Char('/') => {
                self.state.input_focused = true;
                true
            }
            KeyCode::Left => {
                self.state.prev_persona();
                true
            }
            KeyCode::Right => {
                self.state.next_persona();
                true
            }
            code => {
                if let Some(preset) = preset_for_key(code) {
                    self.meter.set_preset(preset);
                    return true;
                }
                handle_scroll_key(&mut self.state, code)
            }
        }
    }

    /// Key handling while the demo input owns the keyboard.
    fn on_input_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.state.input_focused = false;
                true
            }
            KeyCode::Enter => {
                self.state.submit();
                true
            }
            KeyCode::Backspace => {
                self.state.backspace();
                true
            }
            KeyCode::Char(c) => {
                self.state.push_char(c);
                true
            }
            _ => false,
        }
    }

    fn on_mouse(&mut self, m: &MouseEvent) -> bool {
        match m.kind {
            MouseEventKind::ScrollDown => {
                self.state.scroll_down();
                true
            }
            MouseEventKind::ScrollUp => {
                self.state.scroll_up();
                true
            }
            MouseEventKind::Down(MouseButton::Left) => self.on_left_down(m.column, m.row),
            MouseEventKind::Drag(MouseButton::Left) => {
                // Live drag state, checked per move; coordinates outside
                // the track saturate in the conversion.
                if self.meter.is_dragging() {
                    match self.state.to_content_x(m.column) {
                        Some(x) => self.meter.set_from_pointer(x),
                        None => false,
                    }
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

    fn on_left_down(&mut self, column: u16, row: u16) -> bool {
        let Some((col, crow)) = self.state.to_content(column, row) else {
            return false;
        };

        if let Some(panel) = self.state.meter_panel {
            let layout = meter_layout(panel);
            if hit(layout.track, col, crow) {
                self.meter.begin_drag();
                self.meter.set_from_pointer(f64::from(col));
                return true;
            }
            if let Some(preset) = preset_at(&layout, col, crow) {
                self.meter.set_preset(preset);
                return true;
            }
        }

        if let Some(input) = self.state.demo_input {
            if hit(input, col, crow) {
                self.state.input_focused = true;
                return true;
            }
        }

        // Clicking anywhere else gives the keyboard back to the page.
        if self.state.input_focused {
            self.state.input_focused = false;
            return true;
        }
        false
    }
}

impl View for LandingView {
    fn on_event(&mut self, ev: &Event) -> bool {
        match ev {
            Event::Key(k) => self.on_key(k.code),
            Event::Mouse(m) => self.on_mouse(m),
            // Drag ended abnormally: release the session anyway.
            Event::FocusLost => {
                let was_dragging = self.meter.is_dragging();
                self.meter.end_drag();
                self.state.input_focused = false;
                was_dragging
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    fn on_tick(&mut self) -> bool {
        self.carousel.advance();
        true
    }

    fn captures_input(&self) -> bool {
        self.state.input_focused
    }

    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let [page_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let hints = if self.state.input_focused {
            demo_input_hints()
        } else {
            landing_hints()
        };
        draw_help_bar(f, help_area, &hints);

        // Reserve the rightmost column for the scrollbar.
        let width = page_area.width.saturating_sub(1);
        if width == 0 || page_area.height == 0 {
            return;
        }

        let mut sv = ScrollView::new(Size::new(width, TOTAL_CONTENT_HEIGHT));
        let mut y = 0u16;
        let mut next = |h: u16| {
            let rect = Rect::new(0, y, width, h);
            y += h + SECTION_GAP;
            rect
        };

        draw_hero(&mut sv, next(HERO_H), self.carousel.index());
        draw_how_it_works(&mut sv, next(HOW_H));
        draw_personas(&mut sv, next(PERSONAS_H), self.state.selected_persona);
        let panel = draw_meter_section(&mut sv, next(METER_H), &self.meter);
        let input = draw_demo(
            &mut sv,
            next(DEMO_H),
            &self.state.input,
            self.state.input_focused,
            self.state.response,
        );
        draw_features(&mut sv, next(FEATURES_H));
        draw_testimonials(&mut sv, next(TESTIMONIALS_H));
        draw_cta(&mut sv, next(CTA_H));
        draw_footer(&mut sv, next(FOOTER_H));

        f.render_stateful_widget(sv, page_area, &mut self.state.scroll);

        // Refresh the hotspots and the track measurement from this frame's
        // layout; until the first draw they are unset and pointer input is
        // a no-op.
        self.state.page = Some(page_area);
        self.state.meter_panel = Some(panel);
        self.state.demo_input = Some(input);
        let track = meter_layout(panel).track;
        self.meter
            .measure(f64::from(track.x), f64::from(track.width));
    }
}

// ── Sections ──────────────────────────────────────────────────────────────

/// Hero: badge, title, rotating chat bubbles, CTAs, phone mockup.
fn draw_hero(sv: &mut ScrollView, area: Rect, active_message: usize) {
    let band = centered(area, CONTENT_MAX_WIDTH);
    let (left, phone) = if band.width >= 80 {
        let [left, _, right] = Layout::horizontal([
            Constraint::Fill(3),
            Constraint::Length(4),
            Constraint::Fill(2),
        ])
        .areas(band);
        (left, Some(right))
    } else {
        (band, None)
    };

    let [badge, _, title, subtitle, _, chat, _, cta] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(left);

    sv.render_widget(
        Paragraph::new(HERO_BADGE).style(
            Style::default()
                .fg(colors::BRAND_LIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        badge,
    );

    // Last word of the title gets the brand color, as on the page.
    let (title_head, title_accent) = HERO_TITLE.split_at(HERO_TITLE.rfind(' ').unwrap_or(0));
    let title_line = Line::from(vec![
        Span::styled(
            title_head,
            Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            title_accent,
            Style::default()
                .fg(colors::BRAND_LIGHT)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    sv.render_widget(Paragraph::new(title_line), title);

    sv.render_widget(
        Paragraph::new(HERO_SUBTITLE)
            .style(Style::default().fg(colors::MUTED))
            .wrap(Wrap { trim: true }),
        subtitle,
    );

    for (i, msg) in CHAT_MESSAGES.iter().enumerate() {
        let row = Rect {
            y: chat.y + i as u16 * 2,
            height: 1,
            ..chat
        };
        sv.render_widget(chat_bubble(msg, i == active_message), row);
    }

    let ctas = Line::from(vec![
        Span::styled(
            format!(" {HERO_CTA_PRIMARY} "),
            Style::default()
                .fg(Color::Black)
                .bg(colors::BRAND_LIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[ {HERO_CTA_SECONDARY} ]"),
            Style::default().fg(colors::BRAND_LIGHT),
        ),
    ]);
    sv.render_widget(Paragraph::new(ctas), cta);

    if let Some(phone) = phone {
        draw_phone_mockup(sv, phone);
    }
}

/// One hero chat bubble; the active one is highlighted, the rest dimmed.
fn chat_bubble(msg: &ChatMessage, active: bool) -> Paragraph<'static> {
    let style = if !active {
        Style::default().fg(colors::FAINT)
    } else if msg.from_bot {
        Style::default()
            .fg(colors::BRAND_LIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
    };
    Paragraph::new(format!("{} {}", msg.emoji, msg.text)).style(style)
}

/// Phone mockup with the sample bilingual conversation.
fn draw_phone_mockup(sv: &mut ScrollView, area: Rect) {
    let block = card().title(" WalletWala 💬 ").title_style(
        Style::default()
            .fg(colors::BRAND_LIGHT)
            .add_modifier(Modifier::BOLD),
    );
    let inner = block.inner(area);
    sv.render_widget(block, area);

    for (i, (text, from_bot)) in PHONE_CONVERSATION.iter().enumerate() {
        let row = Rect {
            y: inner.y + i as u16 * 3,
            height: 3,
            ..inner
        };
        if row.y >= inner.bottom() {
            break;
        }
        let style = if *from_bot {
            Style::default().fg(colors::BRAND_LIGHT)
        } else {
            Style::default().fg(colors::MUTED)
        };
        sv.render_widget(
            Paragraph::new(*text).style(style).wrap(Wrap { trim: true }),
            row,
        );
    }
}

fn draw_how_it_works(sv: &mut ScrollView, area: Rect) {
    let band = centered(area, CONTENT_MAX_WIDTH);
    let [head, sub, _, cards] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
    ])
    .areas(band);

    sv.render_widget(heading(HOW_TITLE), head);
    sv.render_widget(subheading(HOW_SUBTITLE), sub);

    for (rect, (title, desc)) in card_row(cards, 3).into_iter().zip(HOW_IT_WORKS) {
        let block = card();
        let inner = block.inner(rect);
        sv.render_widget(block, rect);

        let [title_row, desc_rows] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(2)]).areas(inner);
        sv.render_widget(
            Paragraph::new(title)
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)),
            title_row,
        );
        sv.render_widget(
            Paragraph::new(desc)
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors::MUTED))
                .wrap(Wrap { trim: true }),
            desc_rows,
        );
    }
}

/// Persona cards as tabs; the selected one reveals its example and tip.
fn draw_personas(sv: &mut ScrollView, area: Rect, selected: usize) {
    let band = centered(area, CONTENT_MAX_WIDTH);
    let [head, sub, _, tabs_row, _, detail] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(8),
    ])
    .areas(band);

    sv.render_widget(heading(PERSONAS_TITLE), head);
    sv.render_widget(subheading(PERSONAS_SUBTITLE), sub);

    let titles: Vec<Line> = PERSONAS
        .iter()
        .map(|p| Line::from(format!("{} {}", p.icon, p.title)))
        .collect();
    sv.render_widget(
        Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(colors::MUTED))
            .highlight_style(
                Style::default()
                    .fg(colors::BRAND_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
        tabs_row,
    );

    let persona = &PERSONAS[selected];
    let block = card().title(format!(" {} {} ", persona.icon, persona.title));
    let inner = block.inner(detail);
    sv.render_widget(block, detail);

    let [subtitle, _, example, tip] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    sv.render_widget(
        Paragraph::new(persona.subtitle).style(Style::default().fg(colors::MUTED)),
        subtitle,
    );
    for (i, line) in persona.example.iter().enumerate() {
        let row = Rect {
            y: example.y + i as u16,
            height: 1,
            ..example
        };
        sv.render_widget(
            Paragraph::new(format!("  {line}")).style(Style::default().fg(colors::TEXT)),
            row,
        );
    }
    sv.render_widget(
        Paragraph::new(persona.tip).style(Style::default().fg(colors::BRAND_LIGHT)),
        tip,
    );
}

/// Meter section; returns the panel rect in content coordinates.
fn draw_meter_section(sv: &mut ScrollView, area: Rect, meter: &MoodMeter) -> Rect {
    let band = centered(area, CONTENT_MAX_WIDTH);
    let [head, sub, _, panel_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(METER_PANEL_HEIGHT),
    ])
    .areas(band);

    sv.render_widget(heading(METER_TITLE), head);
    sv.render_widget(subheading(METER_SUBTITLE), sub);

    let panel = centered(panel_row, 72);
    sv.render_widget(MeterPanel::new(meter), panel);
    panel
}

/// Demo box; returns the input line rect in content coordinates.
fn draw_demo(
    sv: &mut ScrollView,
    area: Rect,
    input: &str,
    focused: bool,
    response: Option<&'static str>,
) -> Rect {
    let band = centered(area, 64);
    let [head, sub, _, card_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(12),
    ])
    .areas(band);

    sv.render_widget(heading(DEMO_TITLE), head);
    sv.render_widget(subheading(DEMO_SUBTITLE), sub);

    let block = card();
    let inner = block.inner(card_area);
    sv.render_widget(block, card_area);

    let [response_rows, _, input_row, _, try_row, suggestions] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(inner);

    match response {
        Some(text) => sv.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(colors::BRAND_LIGHT))
                .wrap(Wrap { trim: true }),
            response_rows,
        ),
        None => sv.render_widget(
            Paragraph::new(DEMO_EMPTY_HINT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors::FAINT)),
            response_rows,
        ),
    }

    let prompt = if focused {
        Line::from(vec![
            Span::styled("❯ ", Style::default().fg(colors::BRAND_LIGHT)),
            Span::styled(input.to_owned(), Style::default().fg(colors::TEXT)),
            Span::styled("█", Style::default().fg(colors::BRAND_LIGHT)),
        ])
    } else if input.is_empty() {
        Line::from(Span::styled(
            DEMO_PLACEHOLDER,
            Style::default().fg(colors::FAINT),
        ))
    } else {
        Line::from(vec![
            Span::styled("❯ ", Style::default().fg(colors::FAINT)),
            Span::styled(input.to_owned(), Style::default().fg(colors::MUTED)),
        ])
    };
    sv.render_widget(
        Paragraph::new(prompt).style(Style::default().bg(colors::CARD_BG)),
        input_row,
    );

    sv.render_widget(
        Paragraph::new("Try asking:").style(Style::default().fg(colors::MUTED)),
        try_row,
    );
    for (i, suggestion) in DEMO_SUGGESTIONS.iter().enumerate() {
        let row = Rect {
            y: suggestions.y + i as u16,
            height: 1,
            ..suggestions
        };
        sv.render_widget(
            Paragraph::new(format!("• \"{suggestion}\"")).style(Style::default().fg(colors::FAINT)),
            row,
        );
    }

    input_row
}

fn draw_features(sv: &mut ScrollView, area: Rect) {
    let band = centered(area, CONTENT_MAX_WIDTH);
    let [head, sub, _, row1, _, row2] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(5),
    ])
    .areas(band);

    sv.render_widget(heading(FEATURES_TITLE), head);
    sv.render_widget(subheading(FEATURES_SUBTITLE), sub);

    for (rect, (title, desc)) in card_row(row1, 3)
        .into_iter()
        .chain(card_row(row2, 3))
        .zip(FEATURES)
    {
        let block = card();
        let inner = block.inner(rect);
        sv.render_widget(block, rect);

        let [title_row, desc_rows] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(2)]).areas(inner);
        sv.render_widget(
            Paragraph::new(title)
                .style(Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)),
            title_row,
        );
        sv.render_widget(
            Paragraph::new(desc)
                .style(Style::default().fg(colors::MUTED))
                .wrap(Wrap { trim: true }),
            desc_rows,
        );
    }
}

fn draw_testimonials(sv: &mut ScrollView, area: Rect) {
    let band = centered(area, CONTENT_MAX_WIDTH);
    let [head, _, cards] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(7),
    ])
    .areas(band);

    sv.render_widget(heading(TESTIMONIALS_TITLE), head);

    for (rect, t) in card_row(cards, 2).into_iter().zip(TESTIMONIALS.iter()) {
        let block = card();
        let inner = block.inner(rect);
        sv.render_widget(block, rect);

        let [stars, quote, author] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        sv.render_widget(
            Paragraph::new("★★★★★").style(Style::default().fg(colors::STARS)),
            stars,
        );
        sv.render_widget(
            Paragraph::new(t.quote)
                .style(Style::default().fg(colors::TEXT).add_modifier(Modifier::ITALIC))
                .wrap(Wrap { trim: true }),
            quote,
        );
        sv.render_widget(
            Paragraph::new(t.author).style(Style::default().fg(colors::MUTED)),
            author,
        );
    }
}

fn draw_cta(sv: &mut ScrollView, area: Rect) {
    sv.render_widget(
        Block::default().style(Style::default().bg(colors::BRAND)),
        area,
    );

    let [_, title, sub, _, button] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    sv.render_widget(
        Paragraph::new(CTA_TITLE)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(colors::BRAND)
                    .add_modifier(Modifier::BOLD),
            ),
        title,
    );
    sv.render_widget(
        Paragraph::new(CTA_SUBTITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(colors::BRAND)),
        sub,
    );
    sv.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" 📱 {CTA_BUTTON} "),
            Style::default()
                .fg(colors::BRAND)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        button,
    );
}

fn draw_footer(sv: &mut ScrollView, area: Rect) {
    let band = centered(area, CONTENT_MAX_WIDTH);
    let [divider, _, columns, _, bottom, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(band);

    sv.render_widget(
        Paragraph::new("─".repeat(band.width as usize))
            .style(Style::default().fg(colors::FAINT)),
        divider,
    );

    let cols = card_row(columns, 4);

    // Brand column.
    footer_line(sv, cols[0], 0, "💬 WalletWala", colors::BRAND_LIGHT, true);
    sv.render_widget(
        Paragraph::new(FOOTER_TAGLINE)
            .style(Style::default().fg(colors::MUTED))
            .wrap(Wrap { trim: true }),
        Rect {
            y: cols[0].y + 1,
            height: 3,
            ..cols[0]
        },
    );

    // Link columns.
    for (col, (title, links)) in cols[1..3].iter().zip(FOOTER_COLUMNS) {
        footer_line(sv, *col, 0, title, colors::TEXT, true);
        for (i, link) in links.iter().enumerate() {
            footer_line(sv, *col, i as u16 + 1, link, colors::MUTED, false);
        }
    }

    // Social column.
    footer_line(sv, cols[3], 0, "Connect", colors::TEXT, true);
    footer_line(sv, cols[3], 1, "Instagram · LinkedIn · Twitter", colors::MUTED, false);

    sv.render_widget(
        Paragraph::new(format!("Made with ♥ in Pakistan · © {}", Local::now().year()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::MUTED)),
        bottom,
    );
}

/// One line inside a footer column.
fn footer_line(
    sv: &mut ScrollView,
    col: Rect,
    row: u16,
    text: &str,
    color: Color,
    bold: bool,
) {
    if row >= col.height {
        return;
    }
    let mut style = Style::default().fg(color);
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    sv.render_widget(
        Paragraph::new(text.to_owned()).style(style),
        Rect {
            y: col.y + row,
            height: 1,
            ..col
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Simulates a draw having measured the page and the meter panel.
    fn measured_view() -> LandingView {
        let mut view = LandingView::default();
        let page = Rect::new(0, 0, 100, 40);
        let panel = Rect::new(14, 50, 72, METER_PANEL_HEIGHT);
        view.state.page = Some(page);
        view.state.meter_panel = Some(panel);
        let track = meter_layout(panel).track;
        view.meter
            .measure(f64::from(track.x), f64::from(track.width));
        view
    }

    #[test]
    fn test_preset_keys_set_mood() {
        let mut view = LandingView::default();
        assert!(view.on_event(&key(KeyCode::Char('2'))));
        assert_eq!(view.meter.mood(), 60);
    }

    #[test]
    fn test_typed_digits_go_to_the_input_when_focused() {
        let mut view = LandingView::default();
        assert!(view.on_event(&key(KeyCode::Char('/'))));
        assert!(view.captures_input());

        view.on_event(&key(KeyCode::Char('1')));
        assert_eq!(view.state.input, "1");
        // The meter did not move.
        assert_eq!(view.meter.mood(), crate::meter::INITIAL_MOOD);

        view.on_event(&key(KeyCode::Esc));
        assert!(!view.captures_input());
    }

    #[test]
    fn test_drag_on_track_updates_mood() {
        let mut view = measured_view();
        let track = meter_layout(view.state.meter_panel.unwrap()).track;

        // The panel sits at content y=50; scroll it into view first.
        for _ in 0..40 {
            view.state.scroll.scroll_down();
        }
        let offset_y = view.state.scroll.offset().y;
        let screen_row = track.y - offset_y;

        view.on_event(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            track.x,
            screen_row,
        ));
        assert!(view.meter.is_dragging());
        assert_eq!(view.meter.mood(), 0);

        // Drag far right of the track: saturates at 100.
        view.on_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 99, screen_row));
        assert_eq!(view.meter.mood(), 100);

        view.on_event(&mouse(MouseEventKind::Up(MouseButton::Left), 99, screen_row));
        assert!(!view.meter.is_dragging());

        // Further drags are ignored once the session ended.
        view.on_event(&mouse(MouseEventKind::Drag(MouseButton::Left), track.x, screen_row));
        assert_eq!(view.meter.mood(), 100);
    }

    #[test]
    fn test_mouse_before_first_draw_is_ignored() {
        let mut view = LandingView::default();
        assert!(!view.on_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 10)));
        assert!(!view.meter.is_dragging());
        assert_eq!(view.meter.mood(), crate::meter::INITIAL_MOOD);
    }

    #[test]
    fn test_carousel_ticks_through_messages() {
        let mut view = LandingView::default();
        assert_eq!(view.carousel.index(), 0);
        assert!(view.on_tick());
        assert_eq!(view.carousel.index(), 1);
        for _ in 0..3 {
            view.on_tick();
        }
        assert_eq!(view.carousel.index(), 0);
    }

    #[test]
    fn test_total_height_covers_all_sections() {
        // Every section plus the gaps between them.
        assert!(TOTAL_CONTENT_HEIGHT > HERO_H + METER_H + FOOTER_H);
    }
}
