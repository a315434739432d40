// SPDX-License-Identifier: MPL-2.0
//! Hero/home screen: typewriter headline, confetti burst, and team cards.

use crate::app::Screen;
use crate::content::{self, TEAM};
use crate::i18n::fluent::I18n;
use crate::media::{self, artwork};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::canvas::{self, Canvas, Path};
use iced::widget::image::Handle;
use iced::widget::{button, container, text, Column, Image, Row, Stack};
use iced::{mouse, Element, Length, Point, Rectangle, Size};
use rand::Rng;

/// Glyphs revealed per tick (one per ~100 ms, as in the source material).
const TYPEWRITER_STEP: usize = 1;

/// Confetti lifetime in ticks (~3 s).
const CONFETTI_TICKS: u32 = 30;

/// Confetti particle count.
const CONFETTI_COUNT: usize = 50;

#[derive(Debug, Clone)]
pub enum Message {
    /// Shared 100 ms tick while an animation is live.
    Tick,
    AdventurePressed,
    MemberPressed(usize),
    LearnMorePressed,
    ViewPortfolioPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Scroll the screen down to the team section.
    ScrollToTeam,
    Navigate(Screen),
}

struct Confetti {
    /// (x, y) in fractions of the hero area, plus a per-particle phase.
    particles: Vec<(f32, f32, f32)>,
    elapsed: u32,
}

pub struct State {
    /// Number of headline glyphs revealed so far.
    typewriter_len: usize,
    confetti: Option<Confetti>,
    selected_member: Option<usize>,
    avatars: Vec<Handle>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(false)
    }
}

impl State {
    /// With reduced motion the headline appears fully typed.
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            typewriter_len: if reduced_motion {
                content::HEADLINE.chars().count()
            } else {
                0
            },
            confetti: None,
            selected_member: None,
            avatars: TEAM
                .iter()
                .map(|member| media::to_handle(&artwork::avatar(sizing::AVATAR as u32, member.accent)))
                .collect(),
        }
    }

    /// Whether the screen currently needs the shared tick.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.typewriter_len < content::HEADLINE.chars().count() || self.confetti.is_some()
    }

    pub fn update(&mut self, message: Message, reduced_motion: bool) -> Event {
        match message {
            Message::Tick => {
                let headline_len = content::HEADLINE.chars().count();
                if self.typewriter_len < headline_len {
                    self.typewriter_len = (self.typewriter_len + TYPEWRITER_STEP).min(headline_len);
                }
                if let Some(confetti) = &mut self.confetti {
                    confetti.elapsed += 1;
                    if confetti.elapsed >= CONFETTI_TICKS {
                        self.confetti = None;
                    }
                }
                Event::None
            }
            Message::AdventurePressed => {
                if !reduced_motion {
                    self.confetti = Some(Confetti {
                        particles: spawn_particles(),
                        elapsed: 0,
                    });
                }
                Event::ScrollToTeam
            }
            Message::MemberPressed(index) => {
                self.selected_member = if self.selected_member == Some(index) {
                    None
                } else {
                    Some(index)
                };
                Event::None
            }
            Message::LearnMorePressed => Event::Navigate(Screen::Team),
            Message::ViewPortfolioPressed => Event::Navigate(Screen::Portfolio),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let revealed: String = content::HEADLINE.chars().take(self.typewriter_len).collect();

        let hero = Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .padding([spacing::XXL, spacing::LG])
            .push(
                Row::new()
                    .push(
                        text(revealed)
                            .size(typography::DISPLAY)
                            .color(palette::VIOLET_400),
                    )
                    .push(text("|").size(typography::DISPLAY)),
            )
            .push(
                text(i18n.tr("home-tagline"))
                    .size(typography::TITLE_MD)
                    .align_x(Horizontal::Center),
            )
            .push(
                button(text(i18n.tr("home-adventure-button")).size(typography::BODY_LG))
                    .style(styles::button::accent)
                    .padding([spacing::SM, spacing::LG])
                    .on_press(Message::AdventurePressed),
            )
            .push(icons::sized(icons::chevron_down(), sizing::ICON_MD));

        let hero: Element<'a, Message> = if let Some(confetti) = &self.confetti {
            Stack::new()
                .push(hero)
                .push(
                    Canvas::new(ConfettiLayer {
                        particles: confetti.particles.clone(),
                        elapsed: confetti.elapsed,
                    })
                    .width(Length::Fill)
                    .height(Length::Fill),
                )
                .into()
        } else {
            hero.into()
        };

        let mut team_row = Row::new().spacing(spacing::LG);
        for (index, member) in TEAM.iter().enumerate() {
            team_row = team_row.push(self.member_card(index, member));
        }

        let team_section = Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .padding([spacing::XL, spacing::LG])
            .push(text(i18n.tr("home-team-title")).size(typography::TITLE_LG))
            .push(team_row)
            .push(
                container(text(i18n.tr("home-quote")).size(typography::BODY_LG))
                    .padding(spacing::LG)
                    .style(styles::container::card),
            );

        let cta_section = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .padding([0.0, spacing::LG])
            .push(text(i18n.tr("home-cta-title")).size(typography::TITLE_MD))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        button(text(i18n.tr("home-learn-more-button")))
                            .style(styles::button::primary)
                            .on_press(Message::LearnMorePressed),
                    )
                    .push(
                        button(text(i18n.tr("home-view-portfolio-button")))
                            .style(styles::button::outline)
                            .on_press(Message::ViewPortfolioPressed),
                    ),
            );

        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(hero)
            .push(team_section)
            .push(cta_section)
            .push(iced::widget::space::vertical().height(spacing::XXL))
            .into()
    }

    fn member_card<'a>(
        &'a self,
        index: usize,
        member: &'a content::TeamMember,
    ) -> Element<'a, Message> {
        let selected = self.selected_member == Some(index);

        let mut card = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .width(Length::Fixed(220.0))
            .push(
                Image::new(self.avatars[index].clone())
                    .width(sizing::AVATAR)
                    .height(sizing::AVATAR),
            )
            .push(text(member.name).size(typography::TITLE_SM))
            .push(text(member.role).color(palette::VIOLET_400))
            .push(text(member.fun_fact).size(typography::CAPTION));

        if selected {
            card = card.push(
                container(text(member.superpower).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::badge(palette::MAGENTA_500)),
            );
        }

        button(
            container(card)
                .padding(spacing::MD)
                .style(if selected {
                    styles::container::card_selected
                } else {
                    styles::container::card
                }),
        )
        .style(styles::button::flat)
        .on_press(Message::MemberPressed(index))
        .into()
    }
}

fn spawn_particles() -> Vec<(f32, f32, f32)> {
    let mut rng = rand::thread_rng();
    (0..CONFETTI_COUNT)
        .map(|_| {
            (
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..std::f32::consts::TAU),
            )
        })
        .collect()
}

/// Canvas layer drifting confetti over the hero section.
struct ConfettiLayer {
    particles: Vec<(f32, f32, f32)>,
    elapsed: u32,
}

impl<Message> canvas::Program<Message> for ConfettiLayer {
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
        let t = self.elapsed as f32 / CONFETTI_TICKS as f32;

        for (index, &(x, y, phase)) in self.particles.iter().enumerate() {
            let sway = (t * 6.0 + phase).sin() * 12.0;
            let fall = t * bounds.height * 0.25;
            let position = Point::new(
                x * bounds.width + sway,
                (y * bounds.height + fall) % bounds.height,
            );
            let color = if index % 2 == 0 {
                palette::VIOLET_400
            } else {
                palette::MAGENTA_400
            };
            frame.fill(
                &Path::rectangle(position, Size::new(5.0, 5.0)),
                iced::Color {
                    a: 1.0 - t,
                    ..color
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_reveals_one_glyph_per_tick() {
        let mut state = State::new(false);
        assert!(state.needs_ticks());

        let _ = state.update(Message::Tick, false);
        let _ = state.update(Message::Tick, false);
        assert_eq!(state.typewriter_len, 2);
    }

    #[test]
    fn typewriter_stops_at_full_headline() {
        let mut state = State::new(false);
        for _ in 0..200 {
            let _ = state.update(Message::Tick, false);
        }
        assert_eq!(state.typewriter_len, content::HEADLINE.chars().count());
        assert!(!state.needs_ticks());
    }

    #[test]
    fn reduced_motion_skips_the_typewriter() {
        let state = State::new(true);
        assert_eq!(state.typewriter_len, content::HEADLINE.chars().count());
        assert!(!state.needs_ticks());
    }

    #[test]
    fn adventure_press_bursts_confetti_and_scrolls() {
        let mut state = State::new(false);
        let event = state.update(Message::AdventurePressed, false);
        assert!(matches!(event, Event::ScrollToTeam));
        assert!(state.confetti.is_some());
    }

    #[test]
    fn reduced_motion_suppresses_confetti() {
        let mut state = State::new(true);
        let event = state.update(Message::AdventurePressed, true);
        assert!(matches!(event, Event::ScrollToTeam));
        assert!(state.confetti.is_none());
    }

    #[test]
    fn confetti_clears_after_its_lifetime() {
        let mut state = State::new(true);
        let _ = state.update(Message::AdventurePressed, false);
        for _ in 0..CONFETTI_TICKS {
            let _ = state.update(Message::Tick, false);
        }
        assert!(state.confetti.is_none());
    }

    #[test]
    fn member_selection_toggles() {
        let mut state = State::new(true);
        let _ = state.update(Message::MemberPressed(1), false);
        assert_eq!(state.selected_member, Some(1));
        let _ = state.update(Message::MemberPressed(1), false);
        assert_eq!(state.selected_member, None);
    }

    #[test]
    fn cta_buttons_navigate() {
        let mut state = State::new(true);
        assert!(matches!(
            state.update(Message::LearnMorePressed, false),
            Event::Navigate(Screen::Team)
        ));
        assert!(matches!(
            state.update(Message::ViewPortfolioPressed, false),
            Event::Navigate(Screen::Portfolio)
        ));
    }
}
