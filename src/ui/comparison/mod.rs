// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison widget.
//!
//! Two stacked renderings of the same interface; the "before" layer stays
//! visible left of a draggable boundary. The boundary follows the pointer
//! while a drag session is active (anywhere in the window, not just over the
//! widget) and can also be driven by a discrete slider. Position updates from
//! fast pointer movement are coalesced to one per redraw frame.
//!
//! Instances are fully independent; each owns its position and session.

mod controller;
mod overlay;
mod position;

pub use controller::DragController;
pub use position::{position_from_pointer, SliderPosition, DEFAULT_POSITION_PERCENT};

use crate::i18n::fluent::I18n;
use crate::media::{self, artwork, RawImage};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::canvas::Canvas;
use iced::widget::image::Handle;
use iced::widget::{slider, text, Column, Image, Row, Stack};
use iced::{ContentFit, Element, Length, Rectangle};
use overlay::Overlay;

/// Messages emitted by the comparison widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// Press on the widget: starts a session and seeks to the press point.
    Pressed { x: f32, bounds: Rectangle },
    /// Pointer moved; `bounds` is present when the move passed through the
    /// widget (fresh geometry), absent when routed globally.
    Moved { x: f32, bounds: Option<Rectangle> },
    /// Pointer released or lost, anywhere in the window.
    Released,
    /// Redraw frame: commit the most recent staged position, if any.
    FrameTick,
    /// The discrete slider control was set.
    SliderChanged(f32),
}

/// Comparison widget state: drag controller plus the image pair and the
/// cached composite at the committed position.
pub struct State {
    controller: DragController,
    before: RawImage,
    after: RawImage,
    composite: Handle,
    /// Accessible descriptions of each layer, shown as the widget caption.
    before_description: String,
    after_description: String,
    /// Optional display label overrides; defaults come from the locale.
    before_label: Option<String>,
    after_label: Option<String>,
}

impl State {
    /// Creates a widget over a before/after pair.
    #[must_use]
    pub fn new(
        before: RawImage,
        after: RawImage,
        before_description: impl Into<String>,
        after_description: impl Into<String>,
    ) -> Self {
        let controller = DragController::default();
        let composite = media::to_handle(&artwork::compose_split(
            &before,
            &after,
            controller.position().value(),
        ));

        Self {
            controller,
            before,
            after,
            composite,
            before_description: before_description.into(),
            after_description: after_description.into(),
            before_label: None,
            after_label: None,
        }
    }

    /// Overrides the display labels rendered over the two layers.
    #[must_use]
    pub fn with_labels(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_label = Some(before.into());
        self.after_label = Some(after.into());
        self
    }

    /// Current committed boundary position.
    #[must_use]
    pub fn position(&self) -> SliderPosition {
        self.controller.position()
    }

    /// Whether a drag session is active. The application routes global mouse
    /// events to this widget and runs the frame tick exactly while this holds.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Handles a widget message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Pressed { x, bounds } => {
                self.controller.begin_drag(x, bounds);
                self.rebuild_composite();
            }
            Message::Moved { x, bounds } => {
                self.controller.update_drag(x, bounds);
            }
            Message::Released => {
                self.controller.end_drag();
            }
            Message::FrameTick => {
                if self.controller.commit_pending() {
                    self.rebuild_composite();
                }
            }
            Message::SliderChanged(value) => {
                self.controller.set_direct(value);
                self.rebuild_composite();
            }
        }
    }

    fn rebuild_composite(&mut self) {
        self.composite = media::to_handle(&artwork::compose_split(
            &self.before,
            &self.after,
            self.controller.position().value(),
        ));
    }

    /// Renders the widget: composited image, canvas overlay, caption, and the
    /// mirroring slider control.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let position = self.controller.position().value();

        let picture = Image::new(self.composite.clone())
            .content_fit(ContentFit::Fill)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::COMPARISON_HEIGHT));

        let overlay = Canvas::new(Overlay {
            position,
            before_label: self
                .before_label
                .clone()
                .unwrap_or_else(|| i18n.tr("comparison-before-label")),
            after_label: self
                .after_label
                .clone()
                .unwrap_or_else(|| i18n.tr("comparison-after-label")),
            hint: i18n.tr("comparison-drag-hint"),
            dragging: self.controller.is_dragging(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(sizing::COMPARISON_HEIGHT));

        let layers = Stack::new().push(picture).push(overlay);

        let caption = text(format!(
            "{} ↔ {}",
            self.before_description, self.after_description
        ))
        .size(typography::CAPTION);

        let position_slider = slider(0.0..=100.0, position, Message::SliderChanged)
            .step(0.1)
            .style(styles::slider::brand)
            .width(Length::Fill);

        let slider_row = Row::new()
            .spacing(spacing::SM)
            .push(position_slider)
            .push(text(format!("{position:.1}%")).size(typography::CAPTION));

        Column::new()
            .spacing(spacing::XS)
            .push(layers)
            .push(caption)
            .push(slider_row)
            .into()
    }
}

/// Maps a window-level event to a widget message while a session is active.
///
/// This is the "document-level listener": the application subscription calls
/// it only while [`State::is_dragging`] holds, so the routing is acquired on
/// session start and released on every exit path.
#[must_use]
pub fn map_window_event(event: &iced::Event) -> Option<Message> {
    use iced::{mouse, touch};

    match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::Moved {
            x: position.x,
            bounds: None,
        }),
        iced::Event::Touch(touch::Event::FingerMoved { position, .. }) => Some(Message::Moved {
            x: position.x,
            bounds: None,
        }),
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | iced::Event::Mouse(mouse::Event::CursorLeft)
        | iced::Event::Touch(touch::Event::FingerLifted { .. })
        | iced::Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::Released),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{mouse, Point};

    fn demo_state() -> State {
        let (before, after) = artwork::comparison_pair((148, 92, 235));
        State::new(before, after, "Cluttered layout", "Polished layout")
    }

    fn bounds(width: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width,
            height: sizing::COMPARISON_HEIGHT,
        }
    }

    #[test]
    fn press_seeks_immediately() {
        let mut state = demo_state();
        state.update(Message::Pressed {
            x: 100.0,
            bounds: bounds(400.0),
        });
        assert!(state.is_dragging());
        assert_eq!(state.position().value(), 25.0);
    }

    #[test]
    fn moves_only_apply_on_frame_tick() {
        let mut state = demo_state();
        state.update(Message::Pressed {
            x: 200.0,
            bounds: bounds(400.0),
        });
        state.update(Message::Moved {
            x: 300.0,
            bounds: None,
        });
        assert_eq!(state.position().value(), 50.0);

        state.update(Message::FrameTick);
        assert_eq!(state.position().value(), 75.0);
    }

    #[test]
    fn release_then_move_does_not_change_position() {
        let mut state = demo_state();
        state.update(Message::Pressed {
            x: 200.0,
            bounds: bounds(400.0),
        });
        state.update(Message::Released);
        state.update(Message::Moved {
            x: 0.0,
            bounds: None,
        });
        state.update(Message::FrameTick);
        assert_eq!(state.position().value(), 50.0);
    }

    #[test]
    fn slider_sets_exact_value_regardless_of_session() {
        let mut state = demo_state();
        state.update(Message::SliderChanged(37.5));
        assert_eq!(state.position().value(), 37.5);
    }

    #[test]
    fn instances_are_independent() {
        let mut a = demo_state();
        let b = demo_state();
        a.update(Message::SliderChanged(90.0));
        assert_eq!(a.position().value(), 90.0);
        assert_eq!(b.position().value(), 50.0);
    }

    #[test]
    fn window_event_mapping_covers_moves_and_releases() {
        let moved = map_window_event(&iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(42.0, 7.0),
        }));
        assert!(matches!(
            moved,
            Some(Message::Moved { x, bounds: None }) if x == 42.0
        ));

        let released = map_window_event(&iced::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )));
        assert!(matches!(released, Some(Message::Released)));

        let left = map_window_event(&iced::Event::Mouse(mouse::Event::CursorLeft));
        assert!(matches!(left, Some(Message::Released)));

        let ignored = map_window_event(&iced::Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Right,
        )));
        assert!(ignored.is_none());
    }
}
