// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay for the comparison widget: divider, handle, labels, and
//! pointer capture.

use super::Message;
use crate::ui::design_tokens::{palette, radius, sizing, typography};
use iced::widget::canvas::{self, Path, Stroke, Text};
use iced::widget::Action;
use iced::{mouse, touch, Color, Point, Rectangle, Size};

/// Canvas program drawn on top of the composited image.
pub struct Overlay {
    /// Boundary position in percent of the widget width.
    pub position: f32,
    /// Display label over the left (before) layer.
    pub before_label: String,
    /// Display label over the right (after) layer.
    pub after_label: String,
    /// Hint shown while the widget is not being dragged.
    pub hint: String,
    /// Whether a drag session is active.
    pub dragging: bool,
}

impl Overlay {
    fn label_pill(
        frame: &mut canvas::Frame,
        label: &str,
        top_left: Point,
        background: Color,
    ) -> f32 {
        let text_width = label.chars().count() as f32 * typography::CAPTION * 0.62;
        let pill_size = Size::new(text_width + 18.0, typography::CAPTION + 10.0);
        let pill = Path::rounded_rectangle(top_left, pill_size, radius::FULL.into());
        frame.fill(&pill, background);
        frame.fill_text(Text {
            content: label.to_owned(),
            position: Point::new(top_left.x + 9.0, top_left.y + 4.0),
            color: palette::WHITE,
            size: typography::CAPTION.into(),
            ..Text::default()
        });
        pill_size.width
    }
}

impl canvas::Program<Message> for Overlay {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position()?;
                if bounds.contains(position) {
                    return Some(
                        Action::publish(Message::Pressed {
                            x: position.x,
                            bounds,
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(*position) {
                    return Some(
                        Action::publish(Message::Pressed {
                            x: position.x,
                            bounds,
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position })
            | iced::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                // Geometry is read fresh from this widget pass; moves outside
                // the bounds reach the controller through the global routing.
                if self.dragging && bounds.contains(*position) {
                    return Some(
                        Action::publish(Message::Moved {
                            x: position.x,
                            bounds: Some(bounds),
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Touch(touch::Event::FingerLifted { .. })
            | iced::Event::Touch(touch::Event::FingerLost { .. }) => {
                if self.dragging {
                    return Some(Action::publish(Message::Released).and_capture());
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let divider_x = bounds.width * self.position / 100.0;

        // Divider line
        let divider = Path::rectangle(
            Point::new(divider_x - sizing::COMPARISON_DIVIDER / 2.0, 0.0),
            Size::new(sizing::COMPARISON_DIVIDER, bounds.height),
        );
        frame.fill(&divider, palette::WHITE);

        // Handle: white disc with a grip mark
        let handle_center = Point::new(divider_x, bounds.height / 2.0);
        let handle = Path::circle(handle_center, sizing::COMPARISON_HANDLE_RADIUS);
        frame.fill(&handle, palette::WHITE);
        frame.stroke(
            &handle,
            Stroke::default().with_width(2.0).with_color(palette::GRAY_200),
        );
        let grip = Path::rectangle(
            Point::new(handle_center.x - 1.5, handle_center.y - 6.0),
            Size::new(3.0, 12.0),
        );
        frame.fill(&grip, palette::GRAY_400);

        // Layer labels
        let margin = 12.0;
        Self::label_pill(
            &mut frame,
            &self.before_label,
            Point::new(margin, margin),
            palette::ERROR_500,
        );
        let after_width =
            self.after_label.chars().count() as f32 * typography::CAPTION * 0.62 + 18.0;
        Self::label_pill(
            &mut frame,
            &self.after_label,
            Point::new(bounds.width - after_width - margin, margin),
            palette::SUCCESS_500,
        );

        // Hint pill at the bottom, hidden while dragging
        if !self.dragging {
            let hint_width = self.hint.chars().count() as f32 * typography::CAPTION * 0.62 + 18.0;
            Self::label_pill(
                &mut frame,
                &self.hint,
                Point::new(
                    (bounds.width - hint_width) / 2.0,
                    bounds.height - margin - typography::CAPTION - 10.0,
                ),
                Color {
                    a: 0.55,
                    ..palette::BLACK
                },
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
