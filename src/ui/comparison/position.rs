// SPDX-License-Identifier: MPL-2.0
//! Boundary position math for the comparison widget.

use iced::Rectangle;

/// Boundary position as a percentage of the widget width, guaranteed to be
/// within [0, 100].
///
/// This type ensures that position values are always valid, eliminating the
/// need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPosition(f32);

/// Position the boundary starts at: the middle of the widget.
pub const DEFAULT_POSITION_PERCENT: f32 = 50.0;

impl SliderPosition {
    /// Creates a new position, clamping the value into [0, 100].
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(0.0, 100.0))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position as a fraction (100% → 1.0).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self(DEFAULT_POSITION_PERCENT)
    }
}

/// Converts an absolute pointer x-coordinate into a boundary position within
/// `bounds`.
///
/// Returns `None` when the geometry is unusable (zero or negative width), in
/// which case the position simply does not update.
#[must_use]
pub fn position_from_pointer(pointer_x: f32, bounds: Rectangle) -> Option<SliderPosition> {
    if bounds.width <= 0.0 {
        return None;
    }

    Some(SliderPosition::new(
        (pointer_x - bounds.x) / bounds.width * 100.0,
    ))
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
    fn default_position_is_centered() {
        assert_eq!(SliderPosition::default().value(), 50.0);
    }

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(SliderPosition::new(-12.0).value(), 0.0);
        assert_eq!(SliderPosition::new(145.0).value(), 100.0);
        assert_eq!(SliderPosition::new(37.5).value(), 37.5);
    }

    #[test]
    fn pointer_inside_bounds_maps_linearly() {
        // Container width 400px, left offset 0; pointer at x=100 → 25%.
        let position = position_from_pointer(100.0, bounds(0.0, 400.0)).unwrap();
        assert_eq!(position.value(), 25.0);
    }

    #[test]
    fn pointer_right_of_bounds_clamps_to_hundred() {
        let position = position_from_pointer(450.0, bounds(0.0, 400.0)).unwrap();
        assert_eq!(position.value(), 100.0);
    }

    #[test]
    fn pointer_left_of_bounds_clamps_to_zero() {
        let position = position_from_pointer(-30.0, bounds(0.0, 400.0)).unwrap();
        assert_eq!(position.value(), 0.0);
    }

    #[test]
    fn offset_bounds_are_respected() {
        let position = position_from_pointer(300.0, bounds(200.0, 400.0)).unwrap();
        assert_eq!(position.value(), 25.0);
    }

    #[test]
    fn zero_width_bounds_short_circuit() {
        assert!(position_from_pointer(100.0, bounds(0.0, 0.0)).is_none());
        assert!(position_from_pointer(100.0, bounds(0.0, -5.0)).is_none());
    }

    #[test]
    fn fraction_matches_percent() {
        assert_eq!(SliderPosition::new(75.0).as_fraction(), 0.75);
    }
}
