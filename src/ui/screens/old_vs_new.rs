// SPDX-License-Identifier: MPL-2.0
//! Old-vs-new screen: workflow comparison rows, transformation prose, the
//! benefits grid, and the before/after comparison widget.

use crate::content::{TAKEAWAYS, WORKFLOW_SHIFTS};
use crate::i18n::fluent::I18n;
use crate::media::artwork;
use crate::ui::comparison;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{container, text, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Comparison(comparison::Message),
}

pub struct State {
    comparison: comparison::State,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        let (before, after) = artwork::comparison_pair((148, 92, 235));
        Self {
            comparison: comparison::State::new(
                before,
                after,
                "A cluttered, boxed-in interface",
                "The same interface with hierarchy and air",
            ),
        }
    }

    /// Whether the comparison widget has an active drag session; the
    /// application routes global mouse events and runs the redraw tick
    /// exactly while this holds.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.comparison.is_dragging()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Comparison(inner) => self.comparison.update(inner),
        }
    }

    /// Forwards a window-level event to the comparison widget while its
    /// session is active.
    pub fn handle_window_event(&mut self, event: &iced::Event) {
        if let Some(message) = comparison::map_window_event(event) {
            self.comparison.update(message);
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("old-vs-new-title")).size(typography::TITLE_LG))
            .push(text(i18n.tr("old-vs-new-subtitle")).size(typography::BODY_LG));

        let mut shifts = Column::new().spacing(spacing::SM);
        for shift in WORKFLOW_SHIFTS {
            shifts = shifts.push(
                container(
                    Row::new()
                        .spacing(spacing::MD)
                        .align_y(iced::alignment::Vertical::Center)
                        .push(
                            Column::new()
                                .spacing(spacing::XXS)
                                .width(Length::FillPortion(2))
                                .align_x(Horizontal::Center)
                                .push(
                                    container(
                                        text(i18n.tr("old-vs-new-old-badge"))
                                            .size(typography::CAPTION),
                                    )
                                    .padding([2.0, spacing::XS])
                                    .style(styles::container::badge(palette::ERROR_500)),
                                )
                                .push(text(shift.old).size(typography::BODY)),
                        )
                        .push(
                            text("→")
                                .size(typography::TITLE_MD)
                                .width(Length::FillPortion(1))
                                .align_x(Horizontal::Center),
                        )
                        .push(
                            Column::new()
                                .spacing(spacing::XXS)
                                .width(Length::FillPortion(2))
                                .align_x(Horizontal::Center)
                                .push(
                                    container(
                                        text(i18n.tr("old-vs-new-new-badge"))
                                            .size(typography::CAPTION),
                                    )
                                    .padding([2.0, spacing::XS])
                                    .style(styles::container::badge(palette::SUCCESS_500)),
                                )
                                .push(text(shift.new).size(typography::BODY)),
                        ),
                )
                .padding(spacing::MD)
                .width(Length::Fixed(680.0))
                .style(styles::container::card),
            );
        }

        let prose = container(
            Column::new()
                .spacing(spacing::SM)
                .push(text(i18n.tr("old-vs-new-prose-title")).size(typography::TITLE_MD))
                .push(text(i18n.tr("old-vs-new-prose-p1")).size(typography::BODY))
                .push(text(i18n.tr("old-vs-new-prose-p2")).size(typography::BODY))
                .push(text(i18n.tr("old-vs-new-prose-p3")).size(typography::BODY)),
        )
        .padding(spacing::LG)
        .width(Length::Fixed(680.0))
        .style(styles::container::card);

        let mut benefits = Row::new().spacing(spacing::MD);
        for takeaway in TAKEAWAYS {
            benefits = benefits.push(
                container(
                    Column::new()
                        .spacing(spacing::XS)
                        .align_x(Horizontal::Center)
                        .width(Length::Fixed(150.0))
                        .push(
                            text(takeaway.title)
                                .size(typography::BODY_LG)
                                .color(palette::VIOLET_400),
                        )
                        .push(text(takeaway.description).size(typography::CAPTION)),
                )
                .padding(spacing::MD)
                .style(styles::container::card),
            );
        }

        let comparison_section = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("old-vs-new-comparison-title")).size(typography::TITLE_MD))
            .push(
                container(self.comparison.view(i18n).map(Message::Comparison))
                    .width(Length::Fixed(640.0))
                    .padding(spacing::SM)
                    .style(styles::container::card),
            );

        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .padding([spacing::XL, spacing::LG])
            .push(header)
            .push(comparison_section)
            .push(shifts)
            .push(prose)
            .push(benefits)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Rectangle;

    #[test]
    fn fresh_screen_starts_centered_and_idle() {
        let state = State::new();
        assert!(!state.is_dragging());
        assert_eq!(state.comparison.position().value(), 50.0);
    }

    #[test]
    fn comparison_messages_are_forwarded() {
        let mut state = State::new();
        state.update(Message::Comparison(comparison::Message::Pressed {
            x: 100.0,
            bounds: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 400.0,
                height: 320.0,
            },
        }));
        assert!(state.is_dragging());
        assert_eq!(state.comparison.position().value(), 25.0);
    }

    #[test]
    fn window_events_reach_the_active_session() {
        let mut state = State::new();
        state.update(Message::Comparison(comparison::Message::Pressed {
            x: 200.0,
            bounds: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 400.0,
                height: 320.0,
            },
        }));

        state.handle_window_event(&iced::Event::Mouse(iced::mouse::Event::ButtonReleased(
            iced::mouse::Button::Left,
        )));
        assert!(!state.is_dragging());
    }
}
