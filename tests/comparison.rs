// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests for the comparison widget's position contract, driven
//! through the public component message flow.

use iced::Rectangle;
use uitrio::media::artwork;
use uitrio::ui::comparison::{self, position_from_pointer};

fn bounds(x: f32, width: f32) -> Rectangle {
    Rectangle {
        x,
        y: 0.0,
        width,
        height: 320.0,
    }
}

fn widget() -> comparison::State {
    let (before, after) = artwork::comparison_pair((148, 92, 235));
    comparison::State::new(before, after, "before layer", "after layer")
}

#[test]
fn pointer_mapping_is_linear_and_clamped() {
    let rect = bounds(0.0, 400.0);

    for (pointer_x, expected) in [
        (0.0, 0.0),
        (100.0, 25.0),
        (200.0, 50.0),
        (400.0, 100.0),
        (450.0, 100.0),
        (-25.0, 0.0),
    ] {
        let position = position_from_pointer(pointer_x, rect).expect("usable geometry");
        assert_eq!(position.value(), expected, "pointer at {pointer_x}");
    }
}

#[test]
fn widget_starts_centered() {
    let state = widget();
    assert_eq!(state.position().value(), 50.0);
    assert!(!state.is_dragging());
}

#[test]
fn press_drag_release_cycle() {
    let mut state = widget();

    // Press seeks immediately.
    state.update(comparison::Message::Pressed {
        x: 100.0,
        bounds: bounds(0.0, 400.0),
    });
    assert_eq!(state.position().value(), 25.0);

    // Rapid moves coalesce: only the final value lands on the frame tick.
    state.update(comparison::Message::Moved {
        x: 150.0,
        bounds: None,
    });
    state.update(comparison::Message::Moved {
        x: 250.0,
        bounds: None,
    });
    state.update(comparison::Message::Moved {
        x: 350.0,
        bounds: None,
    });
    assert_eq!(state.position().value(), 25.0);
    state.update(comparison::Message::FrameTick);
    assert_eq!(state.position().value(), 87.5);

    // Release ends the session; later moves are ignored.
    state.update(comparison::Message::Released);
    state.update(comparison::Message::Moved {
        x: 0.0,
        bounds: None,
    });
    state.update(comparison::Message::FrameTick);
    assert_eq!(state.position().value(), 87.5);
}

#[test]
fn release_discards_in_flight_update() {
    let mut state = widget();
    state.update(comparison::Message::Pressed {
        x: 200.0,
        bounds: bounds(0.0, 400.0),
    });
    state.update(comparison::Message::Moved {
        x: 400.0,
        bounds: None,
    });
    state.update(comparison::Message::Released);
    state.update(comparison::Message::FrameTick);
    assert_eq!(state.position().value(), 50.0);
}

#[test]
fn slider_path_is_exact_and_session_free() {
    let mut state = widget();
    state.update(comparison::Message::SliderChanged(37.5));
    assert_eq!(state.position().value(), 37.5);
    assert!(!state.is_dragging());

    // Out-of-range values clamp.
    state.update(comparison::Message::SliderChanged(130.0));
    assert_eq!(state.position().value(), 100.0);
}

#[test]
fn zero_width_geometry_degrades_silently() {
    let mut state = widget();
    state.update(comparison::Message::Pressed {
        x: 100.0,
        bounds: bounds(0.0, 0.0),
    });
    state.update(comparison::Message::Moved {
        x: 100.0,
        bounds: None,
    });
    state.update(comparison::Message::FrameTick);
    assert_eq!(state.position().value(), 50.0);
}

#[test]
fn global_release_ends_the_session_from_anywhere() {
    let mut state = widget();
    state.update(comparison::Message::Pressed {
        x: 200.0,
        bounds: bounds(0.0, 400.0),
    });
    assert!(state.is_dragging());

    let release = iced::Event::Mouse(iced::mouse::Event::ButtonReleased(
        iced::mouse::Button::Left,
    ));
    if let Some(message) = comparison::map_window_event(&release) {
        state.update(message);
    }
    assert!(!state.is_dragging());
}

#[test]
fn worked_scenario() {
    // Container width 400px, left offset 0; pointer at x=100 → 25;
    // pointer at x=450 → 100 (clamped); range input "37.5" → 37.5.
    let mut state = widget();
    state.update(comparison::Message::Pressed {
        x: 100.0,
        bounds: bounds(0.0, 400.0),
    });
    assert_eq!(state.position().value(), 25.0);

    state.update(comparison::Message::Moved {
        x: 450.0,
        bounds: None,
    });
    state.update(comparison::Message::FrameTick);
    assert_eq!(state.position().value(), 100.0);

    state.update(comparison::Message::Released);
    state.update(comparison::Message::SliderChanged(37.5));
    assert_eq!(state.position().value(), 37.5);
}
