// SPDX-License-Identifier: MPL-2.0
//! Portfolio screen: filterable project grid, per-project case study with its
//! own comparison widget, and a random design-tip generator.

use crate::content::{Category, Project, PROJECTS, UI_TIPS};
use crate::i18n::fluent::I18n;
use crate::media::{self, artwork};
use crate::ui::comparison;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::{button, container, text, Column, Image, Row};
use iced::{Element, Length};
use rand::seq::SliceRandom;

/// Size of the project card thumbnails.
const THUMBNAIL_WIDTH: u32 = 260;
const THUMBNAIL_HEIGHT: u32 = 160;

/// Active portfolio filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Web,
    Mobile,
}

impl Filter {
    fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Web => project.category == Category::Web,
            Filter::Mobile => project.category == Category::Mobile,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Filter::All => "portfolio-filter-all",
            Filter::Web => "portfolio-filter-web",
            Filter::Mobile => "portfolio-filter-mobile",
        }
    }
}

const FILTERS: [Filter; 3] = [Filter::All, Filter::Web, Filter::Mobile];

#[derive(Debug, Clone)]
pub enum Message {
    FilterChanged(Filter),
    ProjectPressed(usize),
    CloseDetail,
    TipPressed,
    Comparison(comparison::Message),
}

/// Open project detail: which project, plus its own comparison instance.
struct Detail {
    project_index: usize,
    comparison: comparison::State,
}

pub struct State {
    filter: Filter,
    detail: Option<Detail>,
    tip: Option<&'static str>,
    thumbnails: Vec<Handle>,
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
            filter: Filter::All,
            detail: None,
            tip: None,
            thumbnails: PROJECTS
                .iter()
                .map(|project| {
                    media::to_handle(&artwork::polished_ui(
                        THUMBNAIL_WIDTH,
                        THUMBNAIL_HEIGHT,
                        project.accent,
                    ))
                })
                .collect(),
        }
    }

    /// Whether the open detail's comparison widget has an active session.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.detail
            .as_ref()
            .is_some_and(|detail| detail.comparison.is_dragging())
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::FilterChanged(filter) => {
                self.filter = filter;
            }
            Message::ProjectPressed(index) => {
                if index < PROJECTS.len() {
                    let project = &PROJECTS[index];
                    let (before, after) = artwork::comparison_pair(project.accent);
                    self.detail = Some(Detail {
                        project_index: index,
                        comparison: comparison::State::new(
                            before,
                            after,
                            project.challenge,
                            project.impact,
                        )
                        .with_labels("v1", "v2"),
                    });
                }
            }
            // Dropping the detail drops its comparison and any drag session
            // with it, releasing the global routing on this exit path too.
            Message::CloseDetail => {
                self.detail = None;
            }
            Message::TipPressed => {
                self.tip = UI_TIPS.choose(&mut rand::thread_rng()).copied();
            }
            Message::Comparison(inner) => {
                if let Some(detail) = &mut self.detail {
                    detail.comparison.update(inner);
                }
            }
        }
    }

    /// Forwards a window-level event to the open comparison while dragging.
    pub fn handle_window_event(&mut self, event: &iced::Event) {
        if let Some(detail) = &mut self.detail {
            if let Some(message) = comparison::map_window_event(event) {
                detail.comparison.update(message);
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("portfolio-title")).size(typography::TITLE_LG))
            .push(text(i18n.tr("portfolio-subtitle")).size(typography::BODY_LG));

        let mut filter_row = Row::new().spacing(spacing::SM);
        for filter in FILTERS {
            let count = PROJECTS.iter().filter(|p| filter.matches(p)).count();
            let label = format!("{} ({})", i18n.tr(filter.label_key()), count);
            let control = button(text(label).size(typography::BODY));
            let control = if self.filter == filter {
                control.style(styles::button::selected)
            } else {
                control
                    .style(styles::button::outline)
                    .on_press(Message::FilterChanged(filter))
            };
            filter_row = filter_row.push(control);
        }

        let mut grid = Row::new().spacing(spacing::MD);
        for (index, project) in PROJECTS.iter().enumerate() {
            if !self.filter.matches(project) {
                continue;
            }
            grid = grid.push(self.project_card(index, project));
        }

        let mut content = Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .padding([spacing::XL, spacing::LG])
            .push(header)
            .push(filter_row)
            .push(grid);

        if let Some(detail) = &self.detail {
            content = content.push(self.detail_panel(detail, i18n));
        }

        let mut tip_section = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(
                button(text(i18n.tr("portfolio-tip-button")))
                    .style(styles::button::accent)
                    .on_press(Message::TipPressed),
            );
        if let Some(tip) = self.tip {
            tip_section = tip_section.push(
                container(text(tip).size(typography::BODY))
                    .padding(spacing::SM)
                    .style(styles::container::card_selected),
            );
        }
        content = content.push(tip_section);

        content.into()
    }

    fn project_card<'a>(&'a self, index: usize, project: &'a Project) -> Element<'a, Message> {
        let mut technologies = Row::new().spacing(spacing::XXS);
        for tech in project.technologies {
            technologies = technologies.push(
                container(text(*tech).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::badge(palette::VIOLET_600)),
            );
        }

        let card = Column::new()
            .spacing(spacing::XS)
            .width(Length::Fixed(THUMBNAIL_WIDTH as f32))
            .push(
                Image::new(self.thumbnails[index].clone())
                    .width(Length::Fixed(THUMBNAIL_WIDTH as f32))
                    .height(Length::Fixed(THUMBNAIL_HEIGHT as f32)),
            )
            .push(text(project.title).size(typography::TITLE_SM))
            .push(text(project.description).size(typography::CAPTION))
            .push(technologies);

        let selected = self
            .detail
            .as_ref()
            .is_some_and(|detail| detail.project_index == index);

        button(container(card).padding(spacing::SM).style(if selected {
            styles::container::card_selected
        } else {
            styles::container::card
        }))
        .style(styles::button::flat)
        .on_press(Message::ProjectPressed(index))
        .into()
    }

    fn detail_panel<'a>(&'a self, detail: &'a Detail, i18n: &'a I18n) -> Element<'a, Message> {
        let project = &PROJECTS[detail.project_index];

        let facts = Column::new()
            .spacing(spacing::XS)
            .push(fact_row(i18n.tr("portfolio-challenge-label"), project.challenge))
            .push(fact_row(i18n.tr("portfolio-solution-label"), project.solution))
            .push(fact_row(i18n.tr("portfolio-impact-label"), project.impact));

        let body = Column::new()
            .spacing(spacing::SM)
            .push(
                Row::new()
                    .push(text(project.title).size(typography::TITLE_MD).width(Length::Fill))
                    .push(
                        button(text(i18n.tr("portfolio-close-button")))
                            .style(styles::button::outline)
                            .on_press(Message::CloseDetail),
                    ),
            )
            .push(facts)
            .push(detail.comparison.view(i18n).map(Message::Comparison));

        container(body)
            .padding(spacing::LG)
            .width(Length::Fixed(680.0))
            .style(styles::container::card_selected)
            .into()
    }
}

fn fact_row<'a>(label: String, value: &'static str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            text(label)
                .size(typography::BODY)
                .color(palette::VIOLET_400)
                .width(Length::Fixed(110.0)),
        )
        .push(text(value).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_partition_projects() {
        let web = PROJECTS.iter().filter(|p| Filter::Web.matches(p)).count();
        let mobile = PROJECTS.iter().filter(|p| Filter::Mobile.matches(p)).count();
        assert_eq!(web + mobile, PROJECTS.len());
    }

    #[test]
    fn opening_a_project_creates_a_fresh_comparison() {
        let mut state = State::new();
        state.update(Message::ProjectPressed(2));
        let detail = state.detail.as_ref().expect("detail should open");
        assert_eq!(detail.project_index, 2);
        assert_eq!(detail.comparison.position().value(), 50.0);
    }

    #[test]
    fn closing_the_detail_ends_any_session() {
        let mut state = State::new();
        state.update(Message::ProjectPressed(0));
        state.update(Message::Comparison(comparison::Message::Pressed {
            x: 100.0,
            bounds: iced::Rectangle {
                x: 0.0,
                y: 0.0,
                width: 400.0,
                height: 320.0,
            },
        }));
        assert!(state.is_dragging());

        state.update(Message::CloseDetail);
        assert!(!state.is_dragging());
    }

    #[test]
    fn reopening_resets_the_position() {
        let mut state = State::new();
        state.update(Message::ProjectPressed(0));
        state.update(Message::Comparison(comparison::Message::SliderChanged(90.0)));
        state.update(Message::CloseDetail);
        state.update(Message::ProjectPressed(0));

        let detail = state.detail.as_ref().expect("detail should reopen");
        assert_eq!(detail.comparison.position().value(), 50.0);
    }

    #[test]
    fn out_of_range_project_index_is_ignored() {
        let mut state = State::new();
        state.update(Message::ProjectPressed(99));
        assert!(state.detail.is_none());
    }

    #[test]
    fn tip_button_draws_from_the_pool() {
        let mut state = State::new();
        state.update(Message::TipPressed);
        assert!(state.tip.is_some_and(|tip| UI_TIPS.contains(&tip)));
    }
}
