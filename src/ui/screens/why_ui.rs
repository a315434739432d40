// SPDX-License-Identifier: MPL-2.0
//! Why-UI screen: animated stat counters, impact metrics, principles, and a
//! before/after case study.

use crate::content::{self, METRICS, PRINCIPLES, STATS};
use crate::i18n::fluent::I18n;
use crate::media::{self, artwork};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::{container, progress_bar, text, Column, Image, Row};
use iced::{Element, Length};

/// Ticks per counter animation (~2 s at 100 ms).
const COUNTER_TICKS: u32 = 20;

/// Ticks between highlighted-stat rotations (~3 s).
const HIGHLIGHT_TICKS: u32 = 30;

/// Size of the case-study artwork.
const CASE_STUDY_WIDTH: u32 = 320;
const CASE_STUDY_HEIGHT: u32 = 200;

#[derive(Debug, Clone)]
pub enum Message {
    /// Shared 100 ms tick while this screen is active.
    Tick,
}

pub struct State {
    /// Ticks since the screen was entered; drives the counters.
    elapsed: u32,
    highlighted: usize,
    case_before: Handle,
    case_after: Handle,
}

impl Default for State {
    fn default() -> Self {
        Self::new(false)
    }
}

impl State {
    /// With reduced motion the counters start at their targets.
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            elapsed: if reduced_motion { COUNTER_TICKS } else { 0 },
            highlighted: 0,
            case_before: media::to_handle(&artwork::cluttered_ui(
                CASE_STUDY_WIDTH,
                CASE_STUDY_HEIGHT,
            )),
            case_after: media::to_handle(&artwork::polished_ui(
                CASE_STUDY_WIDTH,
                CASE_STUDY_HEIGHT,
                (148, 92, 235),
            )),
        }
    }

    /// Counter value currently displayed for a stat target.
    #[must_use]
    fn counter_value(&self, target: u32) -> u32 {
        if self.elapsed >= COUNTER_TICKS {
            target
        } else {
            target * self.elapsed / COUNTER_TICKS
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick => {
                self.elapsed = self.elapsed.saturating_add(1);
                if self.elapsed % HIGHLIGHT_TICKS == 0 {
                    self.highlighted = (self.highlighted + 1) % STATS.len();
                }
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("why-ui-title")).size(typography::TITLE_LG))
            .push(text(i18n.tr("why-ui-subtitle")).size(typography::BODY_LG));

        let mut stat_row = Row::new().spacing(spacing::LG);
        for (index, stat) in STATS.iter().enumerate() {
            let value = self.counter_value(stat.value);
            let card = Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .width(Length::Fixed(220.0))
                .push(
                    text(format!("{}{}", value, stat.suffix))
                        .size(typography::TITLE_LG)
                        .color(palette::VIOLET_400),
                )
                .push(text(stat.title).size(typography::BODY_LG))
                .push(text(stat.description).size(typography::CAPTION));

            stat_row = stat_row.push(
                container(card)
                    .padding(spacing::MD)
                    .style(if self.highlighted == index {
                        styles::container::card_selected
                    } else {
                        styles::container::card
                    }),
            );
        }

        let mut metrics = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fixed(420.0))
            .push(text(i18n.tr("why-ui-metrics-title")).size(typography::TITLE_MD));
        for metric in METRICS {
            metrics = metrics
                .push(
                    Row::new()
                        .push(text(metric.label).width(Length::Fill))
                        .push(text(format!("{}%", metric.percent))),
                )
                .push(
                    progress_bar(0.0..=100.0, metric.percent as f32)
                        .girth(8.0)
                        .style(|_theme: &iced::Theme| progress_bar::Style {
                            background: iced::Background::Color(palette::GRAY_700),
                            bar: iced::Background::Color(palette::VIOLET_500),
                            border: Default::default(),
                        }),
                );
        }

        let mut principles = Column::new().spacing(spacing::LG);
        for (index, principle) in PRINCIPLES.iter().enumerate() {
            principles = principles.push(principle_card(i18n, index, principle));
        }

        let case_study = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("why-ui-case-study-title")).size(typography::TITLE_MD))
            .push(
                Row::new()
                    .spacing(spacing::LG)
                    .push(case_study_side(
                        i18n.tr("why-ui-case-before"),
                        self.case_before.clone(),
                        &[("why-ui-bounce-label", "68%"), ("why-ui-conversion-label", "2.1%")],
                        palette::ERROR_500,
                        i18n,
                    ))
                    .push(case_study_side(
                        i18n.tr("why-ui-case-after"),
                        self.case_after.clone(),
                        &[("why-ui-bounce-label", "23%"), ("why-ui-conversion-label", "8.7%")],
                        palette::SUCCESS_500,
                        i18n,
                    )),
            );

        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .padding([spacing::XL, spacing::LG])
            .push(header)
            .push(stat_row)
            .push(metrics)
            .push(principles)
            .push(case_study)
            .into()
    }
}

fn principle_card<'a>(
    i18n: &'a I18n,
    index: usize,
    principle: &'a content::Principle,
) -> Element<'a, Message> {
    let mut points = Column::new().spacing(spacing::XXS);
    for point in principle.points {
        points = points.push(text(format!("✓ {point}")).size(typography::BODY));
    }

    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            container(
                text(format!("{} {}", i18n.tr("why-ui-principle-label"), index + 1))
                    .size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge(palette::VIOLET_500)),
        )
        .push(text(principle.title).size(typography::TITLE_SM))
        .push(text(principle.description).size(typography::BODY))
        .push(points);

    container(body)
        .padding(spacing::LG)
        .width(Length::Fixed(640.0))
        .style(styles::container::card)
        .into()
}

fn case_study_side<'a>(
    title: String,
    artwork_handle: Handle,
    figures: &[(&'static str, &'static str)],
    accent: iced::Color,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(text(title).size(typography::BODY_LG).color(accent))
        .push(
            Image::new(artwork_handle)
                .width(Length::Fixed(CASE_STUDY_WIDTH as f32))
                .height(Length::Fixed(CASE_STUDY_HEIGHT as f32)),
        );

    for (key, value) in figures {
        column = column.push(
            Row::new()
                .spacing(spacing::SM)
                .push(text(i18n.tr(key)).size(typography::BODY))
                .push(
                    container(text(*value).size(typography::CAPTION))
                        .padding([2.0, spacing::XS])
                        .style(styles::container::badge(accent)),
                ),
        );
    }

    container(column)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_animate_from_zero_to_target() {
        let mut state = State::new(false);
        assert_eq!(state.counter_value(94), 0);

        for _ in 0..COUNTER_TICKS / 2 {
            state.update(Message::Tick);
        }
        let halfway = state.counter_value(94);
        assert!(halfway > 0 && halfway < 94);

        for _ in 0..COUNTER_TICKS {
            state.update(Message::Tick);
        }
        assert_eq!(state.counter_value(94), 94);
    }

    #[test]
    fn reduced_motion_starts_at_targets() {
        let state = State::new(true);
        assert_eq!(state.counter_value(85), 85);
    }

    #[test]
    fn highlight_rotates_through_all_stats() {
        let mut state = State::new(false);
        assert_eq!(state.highlighted, 0);

        for _ in 0..HIGHLIGHT_TICKS {
            state.update(Message::Tick);
        }
        assert_eq!(state.highlighted, 1);

        for _ in 0..HIGHLIGHT_TICKS * 2 {
            state.update(Message::Tick);
        }
        assert_eq!(state.highlighted, 0);
    }
}
