//! Reusable UI widgets.

mod gauge;
mod help_bar;
mod meter;
mod section;

pub use gauge::{make_gauge, GaugeStyle};
pub use help_bar::{demo_input_hints, draw_help_bar, landing_hints, meter_hints};
pub use meter::{meter_layout, preset_at, MeterLayout, MeterPanel, METER_PANEL_HEIGHT};
pub use section::{card, heading, subheading};
