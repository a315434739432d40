// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are acquired and released with the state that needs them:
//!
//! - A 100 ms animation tick runs only while something animates (typewriter,
//!   confetti, counters, wheel spin, dodge run) or a toast is visible.
//! - While a comparison drag session is active, a redraw-rate tick commits
//!   staged positions and a window-level listener tracks the pointer outside
//!   the widget. Both disappear the moment the session ends, on every exit
//!   path.
//! - While a dodge run is live, keyboard events are routed for the arrows.

use super::{App, Message, Screen};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Shared animation tick period.
const ANIMATION_TICK: Duration = Duration::from_millis(100);

/// Redraw-rate tick period for drag coalescing (~one display frame).
const FRAME_TICK: Duration = Duration::from_millis(16);

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    if needs_animation_tick(app) {
        subscriptions.push(time::every(ANIMATION_TICK).map(Message::Tick));
    }

    if app.comparison_dragging() {
        subscriptions.push(time::every(FRAME_TICK).map(Message::ComparisonFrame));
        subscriptions.push(event::listen_with(route_pointer_event));
    }

    if app.screen == Screen::Playground && app.playground.dodge_running() {
        subscriptions.push(event::listen_with(route_keyboard_event));
    }

    Subscription::batch(subscriptions)
}

fn needs_animation_tick(app: &App) -> bool {
    let screen_animates = match app.screen {
        Screen::Home => app.home.needs_ticks(),
        // The highlighted stat keeps rotating while the screen is shown.
        Screen::WhyUi => true,
        Screen::Playground => app.playground.needs_ticks(),
        _ => false,
    };

    screen_animates || app.notifications.has_visible()
}

/// Window-level pointer routing for an active drag session.
///
/// Releases and window-leave are routed regardless of capture status so a
/// release over another widget still ends the session; moves are routed only
/// when no widget captured them (the comparison canvas captures moves over
/// itself and reports fresh geometry with them).
fn route_pointer_event(
    event: event::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    use iced::{mouse, touch};

    match &event {
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | event::Event::Mouse(mouse::Event::CursorLeft)
        | event::Event::Touch(touch::Event::FingerLifted { .. })
        | event::Event::Touch(touch::Event::FingerLost { .. }) => {
            Some(Message::RawEvent(event))
        }
        event::Event::Mouse(mouse::Event::CursorMoved { .. })
        | event::Event::Touch(touch::Event::FingerMoved { .. }) => match status {
            event::Status::Ignored => Some(Message::RawEvent(event)),
            event::Status::Captured => None,
        },
        _ => None,
    }
}

/// Keyboard routing for the dodge game.
fn route_keyboard_event(
    event: event::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    if let event::Event::Keyboard(iced::keyboard::Event::KeyPressed { .. }) = &event {
        match status {
            event::Status::Ignored => Some(Message::RawEvent(event)),
            event::Status::Captured => None,
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{event, mouse, Point};

    fn window_id() -> iced::window::Id {
        iced::window::Id::unique()
    }

    #[test]
    fn releases_route_even_when_captured() {
        let event = event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let routed = route_pointer_event(event, event::Status::Captured, window_id());
        assert!(routed.is_some());
    }

    #[test]
    fn captured_moves_are_not_doubly_routed() {
        let event = event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::ORIGIN,
        });
        let routed = route_pointer_event(event.clone(), event::Status::Captured, window_id());
        assert!(routed.is_none());

        let routed = route_pointer_event(event, event::Status::Ignored, window_id());
        assert!(routed.is_some());
    }

    #[test]
    fn unrelated_events_are_not_routed() {
        let event = event::Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        assert!(route_pointer_event(event, event::Status::Ignored, window_id()).is_none());
    }
}
