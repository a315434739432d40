// SPDX-License-Identifier: MPL-2.0
//! Playground screen hosting the mini-games.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::games::{dodge, memory, wheel, word_guess};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::keyboard;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length, Task};

/// The selectable games, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    Memory,
    WordGuess,
    Wheel,
    Dodge,
}

const GAMES: [(Game, &str); 4] = [
    (Game::Memory, "playground-memory-tab"),
    (Game::WordGuess, "playground-word-tab"),
    (Game::Wheel, "playground-wheel-tab"),
    (Game::Dodge, "playground-dodge-tab"),
];

#[derive(Debug, Clone)]
pub enum Message {
    Select(Game),
    Memory(memory::Message),
    WordGuess(word_guess::Message),
    Wheel(wheel::Message),
    Dodge(dodge::Message),
    /// Shared 100 ms tick while a game animation is live.
    Tick,
}

pub struct State {
    active: Game,
    memory: memory::State,
    word_guess: word_guess::State,
    wheel: wheel::State,
    dodge: dodge::State,
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
            active: Game::Memory,
            memory: memory::State::new(),
            word_guess: word_guess::State::new(),
            wheel: wheel::State::new(),
            dodge: dodge::State::new(),
        }
    }

    /// Whether any game animation needs the shared tick.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.wheel.is_spinning() || self.dodge.is_running()
    }

    /// Whether the dodge run is live (drives the keyboard subscription).
    #[must_use]
    pub fn dodge_running(&self) -> bool {
        self.active == Game::Dodge && self.dodge.is_running()
    }

    /// Maps an arrow key press to a dodge move while a run is live.
    #[must_use]
    pub fn map_key(&self, key: &keyboard::Key) -> Option<Message> {
        if !self.dodge_running() {
            return None;
        }
        match key {
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                Some(Message::Dodge(dodge::Message::MoveLeft))
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                Some(Message::Dodge(dodge::Message::MoveRight))
            }
            _ => None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Select(game) => {
                self.active = game;
                Task::none()
            }
            Message::Memory(inner) => self.memory.update(inner).map(Message::Memory),
            Message::WordGuess(inner) => {
                self.word_guess.update(inner);
                Task::none()
            }
            Message::Wheel(inner) => {
                self.wheel.update(inner);
                Task::none()
            }
            Message::Dodge(inner) => {
                self.dodge.update(inner);
                Task::none()
            }
            Message::Tick => {
                if self.wheel.is_spinning() {
                    self.wheel.update(wheel::Message::Tick);
                }
                if self.dodge.is_running() {
                    self.dodge.update(dodge::Message::Tick);
                }
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("playground-title")).size(typography::TITLE_LG))
            .push(text(i18n.tr("playground-subtitle")).size(typography::BODY_LG));

        let mut tabs = Row::new().spacing(spacing::SM);
        for (game, key) in GAMES {
            let tab = button(text(i18n.tr(key)).size(typography::BODY));
            let tab = if self.active == game {
                tab.style(styles::button::selected)
            } else {
                tab.style(styles::button::outline).on_press(Message::Select(game))
            };
            tabs = tabs.push(tab);
        }

        let game_view: Element<'a, Message> = match self.active {
            Game::Memory => self.memory.view(i18n).map(Message::Memory),
            Game::WordGuess => self.word_guess.view(i18n).map(Message::WordGuess),
            Game::Wheel => self.wheel.view(i18n).map(Message::Wheel),
            Game::Dodge => self.dodge.view(i18n).map(Message::Dodge),
        };

        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .padding([spacing::XL, spacing::LG])
            .push(header)
            .push(tabs)
            .push(
                container(game_view)
                    .padding(spacing::LG)
                    .width(Length::Fixed(560.0))
                    .style(styles::container::card),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_memory_game() {
        let state = State::new();
        assert_eq!(state.active, Game::Memory);
        assert!(!state.needs_ticks());
    }

    #[test]
    fn selecting_a_game_switches_the_tab() {
        let mut state = State::new();
        let _ = state.update(Message::Select(Game::Wheel));
        assert_eq!(state.active, Game::Wheel);
    }

    #[test]
    fn spinning_wheel_requests_ticks() {
        let mut state = State::new();
        let _ = state.update(Message::Wheel(wheel::Message::Spin));
        assert!(state.needs_ticks());
    }

    #[test]
    fn arrow_keys_map_only_while_dodge_runs() {
        let mut state = State::new();
        let left = keyboard::Key::Named(keyboard::key::Named::ArrowLeft);
        assert!(state.map_key(&left).is_none());

        let _ = state.update(Message::Select(Game::Dodge));
        let _ = state.update(Message::Dodge(dodge::Message::Start));
        assert!(matches!(
            state.map_key(&left),
            Some(Message::Dodge(dodge::Message::MoveLeft))
        ));

        let other = keyboard::Key::Named(keyboard::key::Named::Space);
        assert!(state.map_key(&other).is_none());
    }

    #[test]
    fn tick_advances_only_live_games() {
        let mut state = State::new();
        let _ = state.update(Message::Select(Game::Dodge));
        let _ = state.update(Message::Dodge(dodge::Message::Start));
        let _ = state.update(Message::Tick);
        assert_eq!(state.dodge.score(), 1);
    }
}
