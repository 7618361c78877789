//! UI module for the terminal landing page.
//!
//! Ratatui-based rendering plus crossterm input routing. The meter track
//! is measured from the same layout that draws it, so pointer coordinates
//! convert to percentages against exactly what is on screen.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           app.rs                                │
//! │  input thread ── tokio::select loop ── Terminal<Crossterm>      │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          views/                                 │
//! │  View trait ─── LandingView ─── MeterView                       │
//! │       │               │                                         │
//! │       │         LandingState (scroll, input, hotspots)          │
//! └───────┼─────────────────────────────────────────────────────────┘
//!         │
//!         ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       components/                               │
//! │  MeterPanel ─── Gauge ─── HelpBar ─── Section chrome            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `views` - View trait and implementations (Landing, Meter)
//! - `components` - Reusable widgets (MeterPanel, Gauge, HelpBar)
//! - `events` - Quit/scroll/hit-test helpers
//! - `layout` - Centered bands and card rows
//! - `colors` - Brand color constants

pub mod colors;
pub mod components;
pub mod events;
pub mod layout;
pub mod views;
