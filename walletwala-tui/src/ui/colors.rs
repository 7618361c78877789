//! Brand colors.
//!
//! Matches the page's palette (greens for the brand, amber/red for the
//! warmer mood tiers). All UI components should use these constants for
//! consistent theming.

use ratatui::style::{palette::tailwind, Color};

pub const BRAND: Color = tailwind::GREEN.c600;
pub const BRAND_LIGHT: Color = tailwind::GREEN.c400;
pub const ACCENT: Color = tailwind::BLUE.c400;
pub const WARN: Color = tailwind::AMBER.c400;
pub const DANGER: Color = tailwind::RED.c500;
pub const TEXT: Color = tailwind::GRAY.c200;
pub const MUTED: Color = tailwind::GRAY.c400;
pub const FAINT: Color = tailwind::GRAY.c600;
pub const CARD_BG: Color = tailwind::GRAY.c800;
pub const STARS: Color = tailwind::YELLOW.c400;
