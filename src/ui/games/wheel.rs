// SPDX-License-Identifier: MPL-2.0
//! Spinning tip wheel.
//!
//! A spin picks 5–10 full turns plus a random final angle, then animates
//! toward it with an ease-out over the shared 100 ms tick. The segment under
//! the top pointer when the wheel stops is announced as the tip. Spinning
//! again while the wheel is still moving is refused.

use crate::content::DESIGN_TIPS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::canvas::{self, Canvas, Path, Stroke, Text};
use iced::widget::{button, container, text, Column};
use iced::{mouse, Element, Length, Point, Rectangle, Vector};
use rand::Rng;
use std::f32::consts::PI;

/// Number of wheel segments; one per design tip.
const SEGMENTS: usize = DESIGN_TIPS.len();

/// Animation length in shared 100 ms ticks (~3 s).
const SPIN_TICKS: u32 = 30;

#[derive(Debug, Clone)]
pub enum Message {
    Spin,
    /// Advance the animation; driven by the application tick.
    Tick,
}

#[derive(Debug)]
pub struct State {
    /// Current rotation in degrees (grows monotonically across spins).
    rotation: f32,
    /// Rotation at the start of the running spin.
    start: f32,
    /// Rotation the running spin will settle at.
    target: f32,
    /// Elapsed ticks of the running spin.
    elapsed: u32,
    spinning: bool,
    result: Option<usize>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rotation: 0.0,
            start: 0.0,
            target: 0.0,
            elapsed: 0,
            spinning: false,
            result: None,
        }
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    #[must_use]
    pub fn result(&self) -> Option<&'static str> {
        self.result.map(|index| DESIGN_TIPS[index])
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Spin => {
                if self.spinning {
                    return;
                }
                let mut rng = rand::thread_rng();
                let turns: u32 = rng.gen_range(5..=10);
                let extra: f32 = rng.gen_range(0.0..360.0);
                self.start = self.rotation;
                self.target = self.rotation + turns as f32 * 360.0 + extra;
                self.elapsed = 0;
                self.spinning = true;
                self.result = None;
            }
            Message::Tick => {
                if !self.spinning {
                    return;
                }
                self.elapsed += 1;
                let progress = (self.elapsed as f32 / SPIN_TICKS as f32).min(1.0);
                let eased = ease_out_cubic(progress);
                self.rotation = self.start + (self.target - self.start) * eased;

                if self.elapsed >= SPIN_TICKS {
                    self.rotation = self.target;
                    self.spinning = false;
                    self.result = Some(segment_at(self.rotation));
                }
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let wheel = Canvas::new(Wheel {
            rotation: self.rotation,
        })
        .width(Length::Fixed(sizing::WHEEL_DIAMETER))
        .height(Length::Fixed(sizing::WHEEL_DIAMETER));

        let spin_label = if self.spinning {
            i18n.tr("wheel-spinning-button")
        } else {
            i18n.tr("wheel-spin-button")
        };
        let mut spin = button(text(spin_label)).style(styles::button::primary);
        if !self.spinning {
            spin = spin.on_press(Message::Spin);
        }

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(wheel)
            .push(spin);

        if let Some(tip) = self.result() {
            content = content.push(
                container(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(text(i18n.tr("wheel-result-title")).size(typography::TITLE_SM))
                        .push(text(tip).size(typography::BODY)),
                )
                .padding(spacing::SM)
                .style(styles::container::card_selected),
            );
        }

        content.into()
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Segment under the pointer for a given rotation.
fn segment_at(rotation: f32) -> usize {
    let segment_angle = 360.0 / SEGMENTS as f32;
    ((rotation.rem_euclid(360.0) / segment_angle) as usize) % SEGMENTS
}

/// Canvas program drawing the wheel at its current rotation.
struct Wheel {
    rotation: f32,
}

impl<Message> canvas::Program<Message> for Wheel {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - 10.0;
        let segment_angle = 2.0 * PI / SEGMENTS as f32;

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(self.rotation.to_radians());

            for i in 0..SEGMENTS {
                let start = i as f32 * segment_angle - PI / 2.0;
                let color = if i % 2 == 0 {
                    palette::VIOLET_500
                } else {
                    palette::MAGENTA_500
                };

                // Sector as a fan of short chords
                let mut sector = canvas::path::Builder::new();
                sector.move_to(Point::ORIGIN);
                let steps = 12;
                for step in 0..=steps {
                    let angle = start + segment_angle * step as f32 / steps as f32;
                    sector.line_to(Point::new(radius * angle.cos(), radius * angle.sin()));
                }
                sector.close();
                frame.fill(&sector.build(), color);
            }
        });

        // Rim
        let rim = Path::circle(center, radius);
        frame.stroke(
            &rim,
            Stroke::default()
                .with_width(4.0)
                .with_color(palette::VIOLET_200),
        );

        // Short labels, placed in screen space so they stay legible
        for (i, tip) in DESIGN_TIPS.iter().enumerate() {
            let label: String = tip.split_whitespace().take(2).collect::<Vec<_>>().join(" ");
            let mid = (i as f32 + 0.5) * segment_angle - PI / 2.0 + self.rotation.to_radians();
            let position = Point::new(
                center.x + radius * 0.6 * mid.cos() - label.len() as f32 * 2.4,
                center.y + radius * 0.6 * mid.sin() - 5.0,
            );
            frame.fill_text(Text {
                content: label,
                position,
                color: palette::WHITE,
                size: 9.0.into(),
                ..Text::default()
            });
        }

        // Pointer at the top
        let mut pointer = canvas::path::Builder::new();
        pointer.move_to(Point::new(center.x - 8.0, center.y - radius - 6.0));
        pointer.line_to(Point::new(center.x + 8.0, center.y - radius - 6.0));
        pointer.line_to(Point::new(center.x, center.y - radius + 10.0));
        pointer.close();
        frame.fill(&pointer.build(), palette::WHITE);

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_arms_an_animation_toward_a_larger_rotation() {
        let mut state = State::new();
        state.update(Message::Spin);
        assert!(state.is_spinning());
        // 5–10 turns plus up to a full extra turn
        let delta = state.target - state.start;
        assert!((5.0 * 360.0..11.0 * 360.0).contains(&delta));
    }

    #[test]
    fn respin_is_refused_while_spinning() {
        let mut state = State::new();
        state.update(Message::Spin);
        let target = state.target;
        state.update(Message::Spin);
        assert_eq!(state.target, target);
    }

    #[test]
    fn animation_settles_with_a_result() {
        let mut state = State::new();
        state.update(Message::Spin);
        for _ in 0..SPIN_TICKS {
            state.update(Message::Tick);
        }
        assert!(!state.is_spinning());
        assert_eq!(state.rotation, state.target);
        assert!(state.result().is_some());
    }

    #[test]
    fn ticks_while_idle_are_ignored() {
        let mut state = State::new();
        state.update(Message::Tick);
        assert_eq!(state.rotation, 0.0);
    }

    #[test]
    fn segments_partition_the_circle() {
        assert_eq!(segment_at(0.0), 0);
        assert_eq!(segment_at(44.9), 0);
        assert_eq!(segment_at(45.0), 1);
        assert_eq!(segment_at(359.9), 7);
        assert_eq!(segment_at(360.0), 0);
        assert_eq!(segment_at(5.0 * 360.0 + 90.0), 2);
    }

    #[test]
    fn easing_starts_fast_and_settles() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
