// SPDX-License-Identifier: MPL-2.0
//! Word-guess game over a small UI vocabulary.
//!
//! Letters are guessed one at a time; six wrong guesses lose the round and
//! reveal the word. Repeated guesses and guesses after the round has ended
//! are ignored.

use crate::content::GUESS_WORDS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column, Row};
use iced::Element;
use rand::seq::SliceRandom;

/// Wrong guesses allowed before the round is lost.
const MAX_WRONG_GUESSES: u32 = 6;

/// Letter buttons per row.
const LETTERS_PER_ROW: usize = 7;

#[derive(Debug, Clone)]
pub enum Message {
    Guess(char),
    NewGame,
}

#[derive(Debug)]
pub struct State {
    word: &'static str,
    guessed: Vec<char>,
    wrong: u32,
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
            word: pick_word(),
            guessed: Vec::new(),
            wrong: 0,
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.wrong >= MAX_WRONG_GUESSES && !self.is_won()
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong
    }

    /// Masked rendering: guessed letters shown, the rest as underscores.
    #[must_use]
    pub fn masked_word(&self) -> String {
        let mut out = String::with_capacity(self.word.len() * 2);
        for (i, c) in self.word.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if self.guessed.contains(&c) { c } else { '_' });
        }
        out
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Guess(letter) => {
                if self.guessed.contains(&letter) || self.is_won() || self.is_lost() {
                    return;
                }
                self.guessed.push(letter);
                if !self.word.contains(letter) {
                    self.wrong += 1;
                }
            }
            Message::NewGame => {
                self.word = pick_word();
                self.guessed.clear();
                self.wrong = 0;
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("word-guess-title")).size(typography::TITLE_SM))
            .push(text(self.masked_word()).size(typography::TITLE_MD))
            .push(text(format!(
                "{} {}/{}",
                i18n.tr("word-guess-wrong-label"),
                self.wrong,
                MAX_WRONG_GUESSES
            )));

        if self.is_won() {
            content = content.push(
                container(text(format!(
                    "{} \"{}\"",
                    i18n.tr("word-guess-won"),
                    self.word
                )))
                .padding(spacing::SM)
                .style(styles::container::card_selected),
            );
        } else if self.is_lost() {
            content = content.push(
                container(text(format!(
                    "{} \"{}\"",
                    i18n.tr("word-guess-lost"),
                    self.word
                )))
                .padding(spacing::SM)
                .style(styles::container::overlay),
            );
        }

        let finished = self.is_won() || self.is_lost();
        let mut keyboard = Column::new().spacing(spacing::XXS).align_x(Horizontal::Center);
        let alphabet: Vec<char> = ('A'..='Z').collect();
        for letters in alphabet.chunks(LETTERS_PER_ROW) {
            let mut row = Row::new().spacing(spacing::XXS);
            for &letter in letters {
                let already = self.guessed.contains(&letter);
                let mut key = button(text(letter.to_string()).size(typography::BODY));
                key = if already {
                    let in_word = self.word.contains(letter);
                    if in_word {
                        key.style(styles::button::selected)
                    } else {
                        key.style(styles::button::flat)
                    }
                } else if finished {
                    key.style(styles::button::outline)
                } else {
                    key.style(styles::button::outline)
                        .on_press(Message::Guess(letter))
                };
                row = row.push(key);
            }
            keyboard = keyboard.push(row);
        }
        content = content.push(keyboard);

        content = content.push(
            button(text(i18n.tr("games-new-game-button")))
                .style(styles::button::primary)
                .on_press(Message::NewGame),
        );
        content = content.push(text(i18n.tr("word-guess-instruction")).size(typography::CAPTION));

        content.into()
    }
}

fn pick_word() -> &'static str {
    GUESS_WORDS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GUESS_WORDS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_state(word: &'static str) -> State {
        State {
            word,
            guessed: Vec::new(),
            wrong: 0,
        }
    }

    #[test]
    fn masked_word_hides_unguessed_letters() {
        let mut state = fixed_state("DESIGN");
        assert_eq!(state.masked_word(), "_ _ _ _ _ _");

        state.update(Message::Guess('D'));
        state.update(Message::Guess('S'));
        assert_eq!(state.masked_word(), "D _ S _ _ _");
    }

    #[test]
    fn guessing_all_letters_wins() {
        let mut state = fixed_state("ICONS");
        for letter in ['I', 'C', 'O', 'N', 'S'] {
            state.update(Message::Guess(letter));
        }
        assert!(state.is_won());
        assert!(!state.is_lost());
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut state = fixed_state("BUTTON");
        for letter in ['Z', 'X', 'Q', 'J', 'K', 'W'] {
            state.update(Message::Guess(letter));
        }
        assert!(state.is_lost());
        assert_eq!(state.wrong_guesses(), MAX_WRONG_GUESSES);
    }

    #[test]
    fn repeated_guess_is_ignored() {
        let mut state = fixed_state("BUTTON");
        state.update(Message::Guess('Z'));
        state.update(Message::Guess('Z'));
        assert_eq!(state.wrong_guesses(), 1);
    }

    #[test]
    fn guesses_after_loss_are_ignored() {
        let mut state = fixed_state("BUTTON");
        for letter in ['Z', 'X', 'Q', 'J', 'K', 'W'] {
            state.update(Message::Guess(letter));
        }
        state.update(Message::Guess('B'));
        assert!(!state.guessed.contains(&'B'));
    }

    #[test]
    fn new_game_draws_from_the_pool() {
        let mut state = fixed_state("BUTTON");
        state.update(Message::Guess('Z'));
        state.update(Message::NewGame);
        assert_eq!(state.wrong_guesses(), 0);
        assert!(GUESS_WORDS.contains(&state.word));
    }
}
