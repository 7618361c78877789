//! Mood meter state and derivations.
//!
//! `MoodMeter` owns the single mutable value behind the "wallet mood"
//! section: an integer percentage of budget consumed. Pointer input,
//! preset buttons and the drag session all funnel into it, and the
//! rendering layer reads the derived tier and budget projection back out.
//!
//! The coordinate math is pure and lives in [`position_to_mood`]; the
//! controller only adds the track measurement gate and the drag session.

mod drag;
mod projection;
mod tier;

pub use drag::{DragSession, DragState};
pub use projection::{format_amount, project, BudgetProjection};
pub use tier::MoodTier;

/// Fixed monthly budget the projection is computed against, in PKR.
pub const TOTAL_BUDGET_PKR: u32 = 30_000;

/// Meter value on load.
pub const INITIAL_MOOD: u8 = 35;

/// The three scenario presets: under budget, on track, overspent.
pub const PRESETS: [u8; 3] = [25, 60, 90];

/// Measured horizontal extent of the meter track, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub left: f64,
    pub width: f64,
}

/// Converts a pointer X coordinate into a clamped 0–100 value.
///
/// Pointers left of the track saturate to 0, right of it to 100; the
/// caller guarantees `container_width > 0`.
pub fn position_to_mood(container_left: f64, container_width: f64, pointer_x: f64) -> u8 {
    let raw = (pointer_x - container_left) / container_width * 100.0;
    raw.round().clamp(0.0, 100.0) as u8
}

/// Owns the mood value, the drag session and the current track measurement.
#[derive(Debug)]
pub struct MoodMeter {
    mood: u8,
    drag: DragSession,
    track: Option<Track>,
}

impl Default for MoodMeter {
    fn default() -> Self {
        Self {
            mood: INITIAL_MOOD,
            drag: DragSession::default(),
            track: None,
        }
    }
}

impl MoodMeter {
    /// Current value, always in 0–100.
    pub fn mood(&self) -> u8 {
        self.mood
    }

    /// Tier derived from the current value.
    pub fn tier(&self) -> MoodTier {
        MoodTier::from_mood(self.mood)
    }

    /// Spent/remaining derived from the current value.
    pub fn projection(&self) -> BudgetProjection {
        project(self.mood, TOTAL_BUDGET_PKR)
    }

    /// Records where the track was laid out this frame. A non-positive
    /// width clears the measurement, making pointer updates no-ops.
    pub fn measure(&mut self, left: f64, width: f64) {
        self.track = (width > 0.0).then_some(Track { left, width });
    }

    /// Forgets the track position, e.g. when it scrolls out of view.
    pub fn clear_measurement(&mut self) {
        self.track = None;
    }

    /// Applies a pointer X coordinate against the measured track.
    ///
    /// Returns whether the value changed. With no measurement this is a
    /// silent no-op; out-of-range pointers clamp.
    pub fn set_from_pointer(&mut self, pointer_x: f64) -> bool {
        let Some(track) = self.track else {
            return false;
        };
        let next = position_to_mood(track.left, track.width, pointer_x);
        let changed = next != self.mood;
        self.mood = next;
        changed
    }

    /// Jumps straight to one of the scenario presets.
    pub fn set_preset(&mut self, value: u8) {
        self.mood = value.min(100);
    }

    pub fn begin_drag(&mut self) {
        self.drag.begin();
    }

    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_saturates_at_edges() {
        assert_eq!(position_to_mood(10.0, 50.0, 10.0), 0);
        assert_eq!(position_to_mood(10.0, 50.0, 0.0), 0);
        assert_eq!(position_to_mood(10.0, 50.0, -400.0), 0);
        assert_eq!(position_to_mood(10.0, 50.0, 60.0), 100);
        assert_eq!(position_to_mood(10.0, 50.0, 900.0), 100);
    }

    #[test]
    fn test_position_rounds_to_integer() {
        // 33 of 200 → 16.5 → 17 with half-up rounding.
        assert_eq!(position_to_mood(0.0, 200.0, 33.0), 17);
        assert_eq!(position_to_mood(0.0, 200.0, 100.0), 50);
    }

    #[test]
    fn test_end_to_end_example() {
        let mut meter = MoodMeter::default();
        meter.measure(0.0, 200.0);
        meter.set_from_pointer(50.0);

        assert_eq!(meter.mood(), 25);
        assert_eq!(meter.tier(), MoodTier::Happy);
        let p = meter.projection();
        assert_eq!(p.spent, 7_500);
        assert_eq!(p.remaining, 22_500);
    }

    #[test]
    fn test_unmeasured_track_is_a_noop() {
        let mut meter = MoodMeter::default();
        assert!(!meter.set_from_pointer(50.0));
        assert_eq!(meter.mood(), INITIAL_MOOD);
    }

    #[test]
    fn test_zero_width_measurement_is_rejected() {
        let mut meter = MoodMeter::default();
        meter.measure(5.0, 0.0);
        assert!(!meter.set_from_pointer(50.0));
        assert_eq!(meter.mood(), INITIAL_MOOD);

        meter.measure(5.0, 40.0);
        meter.clear_measurement();
        assert!(!meter.set_from_pointer(50.0));
        assert_eq!(meter.mood(), INITIAL_MOOD);
    }

    #[test]
    fn test_presets_are_exact() {
        let mut meter = MoodMeter::default();

        meter.set_preset(25);
        assert_eq!(meter.mood(), 25);
        assert_eq!(meter.tier(), MoodTier::Happy);

        meter.set_preset(60);
        assert_eq!(meter.mood(), 60);
        assert_eq!(meter.tier(), MoodTier::Okay);

        meter.set_preset(90);
        assert_eq!(meter.mood(), 90);
        assert_eq!(meter.tier(), MoodTier::Broke);
    }

    #[test]
    fn test_drag_lifecycle_leaves_no_residue() {
        let mut meter = MoodMeter::default();
        meter.measure(0.0, 100.0);

        meter.begin_drag();
        assert!(meter.is_dragging());
        meter.set_from_pointer(80.0);
        meter.set_from_pointer(20.0);
        meter.end_drag();
        assert!(!meter.is_dragging());
        assert_eq!(meter.mood(), 20);

        // Moves after the session ended are routed nowhere: the router
        // checks live drag state, so the value stays put.
        if meter.is_dragging() {
            meter.set_from_pointer(95.0);
        }
        assert_eq!(meter.mood(), 20);
    }
}
