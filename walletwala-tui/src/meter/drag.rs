//! Pointer-drag session state.

/// Lifecycle of a pointer drag on the meter track.
///
/// ```text
/// Idle ──pointer down──▶ Dragging ──pointer up / cancel──▶ Idle
///                          │  ▲
///                          └──┘ pointer move (position updates)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Transient interaction state for one pointer/touch drag.
///
/// Exists logically between a pointer-down and the matching up/cancel.
/// While active, move events are routed to the meter; once ended, further
/// moves must produce no state change.
#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Enters `Dragging`. A second down event while already dragging is a
    /// no-op re-entry.
    pub fn begin(&mut self) {
        self.state = DragState::Dragging;
    }

    /// Returns to `Idle` unconditionally. Safe to call on every exit path,
    /// including abnormal ones (button released off-track, focus lost),
    /// and when no drag is in progress.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }

    /// Live drag state. Checked at move-time by the event router, never
    /// captured ahead of time.
    pub fn is_active(&self) -> bool {
        self.state == DragState::Dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_is_idempotent() {
        let mut drag = DragSession::default();
        drag.begin();
        drag.begin();
        assert!(drag.is_active());
    }

    #[test]
    fn test_end_is_unconditional() {
        let mut drag = DragSession::default();
        drag.end();
        assert!(!drag.is_active());

        drag.begin();
        drag.end();
        drag.end();
        assert!(!drag.is_active());
    }

    #[test]
    fn test_full_lifecycle() {
        let mut drag = DragSession::default();
        assert_eq!(drag.state, DragState::Idle);
        drag.begin();
        assert_eq!(drag.state, DragState::Dragging);
        drag.end();
        assert_eq!(drag.state, DragState::Idle);
    }
}
