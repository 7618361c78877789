//! Reusable gauge widget factory.

use ratatui::{
    style::{palette::tailwind, Color, Style},
    widgets::Gauge,
};

use crate::meter::MoodTier;

/// Predefined gauge color schemes.
#[derive(Clone, Copy)]
pub enum GaugeStyle {
    Happy,
    Okay,
    Broke,
    Custom(Color),
}

impl GaugeStyle {
    /// Fill color for the mood tier, mirroring the page's green/amber/red
    /// track gradient.
    pub fn for_tier(tier: MoodTier) -> Self {
        match tier {
            MoodTier::Happy => GaugeStyle::Happy,
            MoodTier::Okay => GaugeStyle::Okay,
            MoodTier::Broke => GaugeStyle::Broke,
        }
    }

    fn color(self) -> Color {
        match self {
            GaugeStyle::Happy => tailwind::GREEN.c500,
            GaugeStyle::Okay => tailwind::AMBER.c400,
            GaugeStyle::Broke => tailwind::RED.c500,
            GaugeStyle::Custom(c) => c,
        }
    }
}

/// Creates a styled gauge widget with consistent appearance.
///
/// # Arguments
/// * `label` - Text shown on the track (e.g., "35%")
/// * `percent` - Value as percentage (0.0 - 100.0)
/// * `style` - Color scheme to use
pub fn make_gauge(label: &str, percent: f64, style: GaugeStyle) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(style.color()).bg(tailwind::GRAY.c800))
        .label(label.to_owned())
        .use_unicode(true)
        .percent(percent.clamp(0.0, 100.0) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_style_tracks_tier() {
        assert_eq!(GaugeStyle::for_tier(MoodTier::Happy).color(), tailwind::GREEN.c500);
        assert_eq!(GaugeStyle::for_tier(MoodTier::Okay).color(), tailwind::AMBER.c400);
        assert_eq!(GaugeStyle::for_tier(MoodTier::Broke).color(), tailwind::RED.c500);
        assert_eq!(GaugeStyle::Custom(Color::Red).color(), Color::Red);
    }
}
