// SPDX-License-Identifier: MPL-2.0
//! Drag session state machine for the comparison widget.
//!
//! States: `Idle` and `Dragging`. A session begins on press (which also
//! commits the position at the press coordinate), absorbs move events into a
//! single pending slot, and ends on release anywhere in the window. Pending
//! updates are committed at most once per redraw frame; the most recent value
//! wins and intermediate values are dropped.

use super::position::{position_from_pointer, SliderPosition};
use iced::Rectangle;

/// The drag session: inactive, or active with the widget bounds captured at
/// session start (refreshed whenever a move passes through the widget).
#[derive(Debug, Clone, Copy, Default)]
enum Session {
    #[default]
    Idle,
    Dragging {
        bounds: Rectangle,
    },
}

/// Converts pointer and range-input events into a clamped boundary position.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    position: SliderPosition,
    session: Session,
    /// Single pending-update slot; overwritten by each new move event.
    pending: Option<SliderPosition>,
}

impl DragController {
    /// Current committed position.
    #[must_use]
    pub fn position(&self) -> SliderPosition {
        self.position
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.session, Session::Dragging { .. })
    }

    /// Starts a session and immediately commits the position at `pointer_x`.
    /// Unusable geometry leaves the position untouched but still arms the
    /// session, so the widget keeps tracking once geometry becomes available.
    pub fn begin_drag(&mut self, pointer_x: f32, bounds: Rectangle) {
        self.session = Session::Dragging { bounds };
        self.pending = None;
        if let Some(position) = position_from_pointer(pointer_x, bounds) {
            self.position = position;
        }
    }

    /// Stages a recompute from `pointer_x` into the pending slot.
    ///
    /// No-op while idle. `fresh_bounds` carries the widget geometry when the
    /// move passed through the widget itself; moves routed globally reuse the
    /// session bounds.
    pub fn update_drag(&mut self, pointer_x: f32, fresh_bounds: Option<Rectangle>) {
        let Session::Dragging { bounds } = &mut self.session else {
            return;
        };

        if let Some(fresh) = fresh_bounds {
            *bounds = fresh;
        }

        if let Some(position) = position_from_pointer(pointer_x, *bounds) {
            self.pending = Some(position);
        }
    }

    /// Applies the most recent staged update, if any. Returns whether the
    /// committed position changed. Called once per redraw frame.
    pub fn commit_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(position) if position != self.position => {
                self.position = position;
                true
            }
            _ => false,
        }
    }

    /// Ends the session; any in-flight staged recompute is discarded.
    pub fn end_drag(&mut self) {
        self.session = Session::Idle;
        self.pending = None;
    }

    /// Range-input path: clamps and commits without requiring a session.
    /// Also clears any staged drag value so it cannot overwrite this one on
    /// the next frame.
    pub fn set_direct(&mut self, value: f32) {
        self.position = SliderPosition::new(value);
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(x: f32, width: f32) -> Rectangle {
        Rectangle {
            x,
            y: 0.0,
            width,
            height: 320.0,
        }
    }

    #[test]
    fn starts_idle_at_center() {
        let controller = DragController::default();
        assert!(!controller.is_dragging());
        assert_eq!(controller.position().value(), 50.0);
    }

    #[test]
    fn begin_drag_commits_immediately() {
        let mut controller = DragController::default();
        controller.begin_drag(100.0, bounds(0.0, 400.0));
        assert!(controller.is_dragging());
        assert_eq!(controller.position().value(), 25.0);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut controller = DragController::default();
        controller.update_drag(100.0, Some(bounds(0.0, 400.0)));
        assert!(!controller.commit_pending());
        assert_eq!(controller.position().value(), 50.0);
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let mut controller = DragController::default();
        controller.begin_drag(200.0, bounds(0.0, 400.0));
        controller.end_drag();
        controller.update_drag(300.0, None);
        assert!(!controller.commit_pending());
        assert_eq!(controller.position().value(), 50.0);
    }

    #[test]
    fn rapid_moves_coalesce_to_most_recent() {
        let mut controller = DragController::default();
        controller.begin_drag(0.0, bounds(0.0, 400.0));

        controller.update_drag(40.0, None);
        controller.update_drag(80.0, None);
        controller.update_drag(120.0, None);

        assert!(controller.commit_pending());
        assert_eq!(controller.position().value(), 30.0);

        // Slot is drained; a second frame with no moves applies nothing.
        assert!(!controller.commit_pending());
    }

    #[test]
    fn end_drag_discards_pending_update() {
        let mut controller = DragController::default();
        controller.begin_drag(200.0, bounds(0.0, 400.0));
        controller.update_drag(400.0, None);
        controller.end_drag();

        assert!(!controller.commit_pending());
        assert_eq!(controller.position().value(), 50.0);
    }

    #[test]
    fn global_moves_reuse_session_bounds() {
        let mut controller = DragController::default();
        controller.begin_drag(200.0, bounds(0.0, 400.0));

        // Pointer left the widget; no fresh geometry available.
        controller.update_drag(450.0, None);
        assert!(controller.commit_pending());
        assert_eq!(controller.position().value(), 100.0);
    }

    #[test]
    fn fresh_bounds_replace_session_bounds() {
        let mut controller = DragController::default();
        controller.begin_drag(200.0, bounds(0.0, 400.0));

        // Layout shifted; the widget reports new geometry with the move.
        controller.update_drag(300.0, Some(bounds(200.0, 400.0)));
        assert!(controller.commit_pending());
        assert_eq!(controller.position().value(), 25.0);
    }

    #[test]
    fn set_direct_is_independent_of_session_state() {
        let mut controller = DragController::default();
        controller.set_direct(37.5);
        assert_eq!(controller.position().value(), 37.5);

        controller.begin_drag(200.0, bounds(0.0, 400.0));
        controller.update_drag(0.0, None);
        controller.set_direct(80.0);
        assert_eq!(controller.position().value(), 80.0);

        // The staged drag value was cleared and cannot overwrite the direct set.
        assert!(!controller.commit_pending());
        assert_eq!(controller.position().value(), 80.0);
    }

    #[test]
    fn set_direct_clamps() {
        let mut controller = DragController::default();
        controller.set_direct(150.0);
        assert_eq!(controller.position().value(), 100.0);
        controller.set_direct(-3.0);
        assert_eq!(controller.position().value(), 0.0);
    }

    #[test]
    fn zero_width_geometry_short_circuits() {
        let mut controller = DragController::default();
        controller.begin_drag(100.0, bounds(0.0, 0.0));
        assert_eq!(controller.position().value(), 50.0);

        controller.update_drag(100.0, None);
        assert!(!controller.commit_pending());
        assert_eq!(controller.position().value(), 50.0);
    }

    #[test]
    fn scenario_from_worked_example() {
        // Width 400, left 0: press at 100 → 25; move to 450 → 100 (clamped);
        // range input "37.5" → 37.5.
        let mut controller = DragController::default();
        controller.begin_drag(100.0, bounds(0.0, 400.0));
        assert_eq!(controller.position().value(), 25.0);

        controller.update_drag(450.0, None);
        assert!(controller.commit_pending());
        assert_eq!(controller.position().value(), 100.0);

        controller.end_drag();
        controller.set_direct(37.5);
        assert_eq!(controller.position().value(), 37.5);
    }
}
