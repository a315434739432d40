// SPDX-License-Identifier: MPL-2.0
//! Team screen: bios with selectable cards and a short knowledge quiz.

use crate::content::{self, QUIZ, TEAM};
use crate::i18n::fluent::I18n;
use crate::media::{self, artwork};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::{button, container, text, Column, Image, Row};
use iced::{Element, Length, Task};
use std::time::Duration;

/// How long the final score stays visible before the quiz resets.
const SCORE_DISPLAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub enum Message {
    MemberPressed(usize),
    StartQuiz,
    AnswerPressed(usize),
    /// Fires after [`SCORE_DISPLAY`]; carries the quiz run it was armed in.
    QuizReset(u64),
}

#[derive(Debug, Default)]
struct Quiz {
    active: bool,
    current: usize,
    score: u32,
    finished: bool,
    /// Bumped per quiz run; stale reset timers are discarded.
    run: u64,
}

pub struct State {
    selected: Option<usize>,
    quiz: Quiz,
    avatars: Vec<Handle>,
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
            selected: None,
            quiz: Quiz::default(),
            avatars: TEAM
                .iter()
                .map(|member| {
                    media::to_handle(&artwork::avatar(sizing::AVATAR as u32, member.accent))
                })
                .collect(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MemberPressed(index) => {
                self.selected = if self.selected == Some(index) {
                    None
                } else {
                    Some(index)
                };
                Task::none()
            }
            Message::StartQuiz => {
                self.quiz.run += 1;
                self.quiz.active = true;
                self.quiz.current = 0;
                self.quiz.score = 0;
                self.quiz.finished = false;
                Task::none()
            }
            Message::AnswerPressed(option) => {
                if !self.quiz.active || self.quiz.finished {
                    return Task::none();
                }
                if option == QUIZ[self.quiz.current].correct {
                    self.quiz.score += 1;
                }
                if self.quiz.current + 1 < QUIZ.len() {
                    self.quiz.current += 1;
                    Task::none()
                } else {
                    self.quiz.finished = true;
                    let run = self.quiz.run;
                    Task::perform(tokio::time::sleep(SCORE_DISPLAY), move |()| {
                        Message::QuizReset(run)
                    })
                }
            }
            Message::QuizReset(run) => {
                if run == self.quiz.run && self.quiz.finished {
                    self.quiz = Quiz {
                        run: self.quiz.run,
                        ..Quiz::default()
                    };
                }
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("team-title")).size(typography::TITLE_LG))
            .push(text(i18n.tr("team-subtitle")).size(typography::BODY_LG));

        let mut cards = Row::new().spacing(spacing::LG);
        for (index, member) in TEAM.iter().enumerate() {
            cards = cards.push(self.member_card(index, member));
        }

        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .padding([spacing::XL, spacing::LG])
            .push(header)
            .push(cards)
            .push(self.quiz_section(i18n))
            .into()
    }

    fn member_card<'a>(
        &'a self,
        index: usize,
        member: &'a content::TeamMember,
    ) -> Element<'a, Message> {
        let selected = self.selected == Some(index);

        let mut skills = Row::new().spacing(spacing::XXS);
        for skill in member.skills {
            skills = skills.push(
                container(text(*skill).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::badge(palette::VIOLET_600)),
            );
        }

        let mut card = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .width(Length::Fixed(250.0))
            .push(
                Image::new(self.avatars[index].clone())
                    .width(sizing::AVATAR)
                    .height(sizing::AVATAR),
            )
            .push(text(member.name).size(typography::TITLE_SM))
            .push(text(member.role).color(palette::VIOLET_400))
            .push(
                container(text(member.experience).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::badge(palette::VIOLET_500)),
            )
            .push(text(member.bio).size(typography::CAPTION))
            .push(skills);

        if selected {
            card = card.push(
                container(
                    Column::new()
                        .spacing(spacing::XXS)
                        .align_x(Horizontal::Center)
                        .push(text(member.superpower).size(typography::BODY))
                        .push(text(format!("\"{}\"", member.fun_fact)).size(typography::CAPTION)),
                )
                .padding(spacing::SM)
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

    fn quiz_section<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = text(i18n.tr("team-quiz-title")).size(typography::TITLE_MD);

        if !self.quiz.active {
            return Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(title)
                .push(
                    button(text(i18n.tr("team-quiz-start-button")))
                        .style(styles::button::accent)
                        .padding([spacing::SM, spacing::LG])
                        .on_press(Message::StartQuiz),
                )
                .into();
        }

        let question = &QUIZ[self.quiz.current];
        let mut answers = Column::new().spacing(spacing::XS);
        for (option_index, option) in question.options.iter().enumerate() {
            let mut answer = button(text(*option).size(typography::BODY))
                .width(Length::Fill)
                .style(styles::button::outline);
            if !self.quiz.finished {
                answer = answer.on_press(Message::AnswerPressed(option_index));
            }
            answers = answers.push(answer);
        }

        let mut panel = Column::new()
            .spacing(spacing::SM)
            .push(text(format!(
                "{} {}/{}",
                i18n.tr("team-quiz-question-label"),
                self.quiz.current + 1,
                QUIZ.len()
            )))
            .push(text(question.question).size(typography::BODY_LG))
            .push(answers);

        if self.quiz.finished {
            panel = panel.push(
                text(format!(
                    "{} {}/{}",
                    i18n.tr("team-quiz-score-label"),
                    self.quiz.score,
                    QUIZ.len()
                ))
                .color(palette::VIOLET_400),
            );
        }

        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(title)
            .push(
                container(panel)
                    .padding(spacing::LG)
                    .width(Length::Fixed(520.0))
                    .style(styles::container::card),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn correct_answers_tally_the_score() {
        let mut state = State::new();
        let _ = state.update(Message::StartQuiz);
        for question in QUIZ {
            let _ = state.update(Message::AnswerPressed(question.correct));
        }
        assert!(state.quiz.finished);
        assert_eq!(state.quiz.score, QUIZ.len() as u32);
    }

    #[tokio::test]
    async fn wrong_answers_do_not_score() {
        let mut state = State::new();
        let _ = state.update(Message::StartQuiz);
        for question in QUIZ {
            let wrong = (question.correct + 1) % question.options.len();
            let _ = state.update(Message::AnswerPressed(wrong));
        }
        assert_eq!(state.quiz.score, 0);
    }

    #[tokio::test]
    async fn answers_after_the_last_question_are_ignored() {
        let mut state = State::new();
        let _ = state.update(Message::StartQuiz);
        for question in QUIZ {
            let _ = state.update(Message::AnswerPressed(question.correct));
        }
        let score = state.quiz.score;
        let _ = state.update(Message::AnswerPressed(0));
        assert_eq!(state.quiz.score, score);
    }

    #[tokio::test]
    async fn quiz_reset_returns_to_the_start_state() {
        let mut state = State::new();
        let _ = state.update(Message::StartQuiz);
        for question in QUIZ {
            let _ = state.update(Message::AnswerPressed(question.correct));
        }
        let run = state.quiz.run;
        let _ = state.update(Message::QuizReset(run));
        assert!(!state.quiz.active);
        assert_eq!(state.quiz.score, 0);
    }

    #[tokio::test]
    async fn stale_reset_from_a_previous_run_is_discarded() {
        let mut state = State::new();
        let _ = state.update(Message::StartQuiz);
        for question in QUIZ {
            let _ = state.update(Message::AnswerPressed(question.correct));
        }
        let stale_run = state.quiz.run;

        // A new run starts before the old timer fires.
        let _ = state.update(Message::StartQuiz);
        let _ = state.update(Message::QuizReset(stale_run));
        assert!(state.quiz.active);
    }

    #[test]
    fn member_selection_toggles() {
        let mut state = State::new();
        let _ = state.update(Message::MemberPressed(0));
        assert_eq!(state.selected, Some(0));
        let _ = state.update(Message::MemberPressed(0));
        assert_eq!(state.selected, None);
    }
}
