// SPDX-License-Identifier: MPL-2.0
//! Memory-match game: find the eight glyph pairs.
//!
//! At most two cards are face-up at once. Once a second card is flipped the
//! pair resolves after a short delay; flips arriving in that window are
//! refused. Restarting the game bumps a generation counter so a delayed
//! resolution from the previous round cannot touch the new deck.

use crate::content::MEMORY_GLYPHS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length, Task};
use rand::seq::SliceRandom;
use std::time::Duration;

/// Delay before a flipped pair resolves.
const RESOLVE_DELAY: Duration = Duration::from_millis(1000);

/// Cards per row in the grid.
const GRID_COLUMNS: usize = 4;

#[derive(Debug, Clone)]
pub struct Card {
    glyph: &'static str,
    face_up: bool,
    matched: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    CardPressed(usize),
    /// Fires after [`RESOLVE_DELAY`]; carries the generation it was armed in.
    Resolve(u64),
    NewGame,
}

#[derive(Debug)]
pub struct State {
    cards: Vec<Card>,
    /// Indices of the currently face-up, unmatched cards (at most two).
    face_up: Vec<usize>,
    moves: u32,
    /// Bumped on every reshuffle; stale `Resolve` messages are discarded.
    generation: u64,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            cards: Vec::new(),
            face_up: Vec::new(),
            moves: 0,
            generation: 0,
        };
        state.reshuffle();
        state
    }

    fn reshuffle(&mut self) {
        let mut deck: Vec<&'static str> = MEMORY_GLYPHS
            .iter()
            .chain(MEMORY_GLYPHS.iter())
            .copied()
            .collect();
        deck.shuffle(&mut rand::thread_rng());

        self.cards = deck
            .into_iter()
            .map(|glyph| Card {
                glyph,
                face_up: false,
                matched: false,
            })
            .collect();
        self.face_up.clear();
        self.moves = 0;
        self.generation += 1;
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }

    /// Whether a flipped pair is waiting for its delayed resolution.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.face_up.len() == 2
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CardPressed(index) => {
                if self.is_resolving() || index >= self.cards.len() {
                    return Task::none();
                }
                let card = &mut self.cards[index];
                if card.face_up || card.matched {
                    return Task::none();
                }
                card.face_up = true;
                self.face_up.push(index);

                if self.face_up.len() == 2 {
                    self.moves += 1;
                    let generation = self.generation;
                    return Task::perform(tokio::time::sleep(RESOLVE_DELAY), move |()| {
                        Message::Resolve(generation)
                    });
                }
                Task::none()
            }
            Message::Resolve(generation) => {
                if generation == self.generation {
                    self.resolve_pair();
                }
                Task::none()
            }
            Message::NewGame => {
                self.reshuffle();
                Task::none()
            }
        }
    }

    fn resolve_pair(&mut self) {
        if let [first, second] = self.face_up[..] {
            let is_match = self.cards[first].glyph == self.cards[second].glyph;
            for index in [first, second] {
                let card = &mut self.cards[index];
                if is_match {
                    card.matched = true;
                } else {
                    card.face_up = false;
                }
            }
        }
        self.face_up.clear();
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(format!("{} {}", i18n.tr("memory-moves-label"), self.moves)));

        if self.is_won() {
            content = content.push(
                container(
                    Column::new()
                        .align_x(Horizontal::Center)
                        .push(text(i18n.tr("memory-won-title")).size(typography::TITLE_SM))
                        .push(
                            text(format!("{} {}", i18n.tr("memory-won-detail"), self.moves))
                                .size(typography::BODY),
                        ),
                )
                .padding(spacing::SM)
                .style(styles::container::card_selected),
            );
        }

        let mut grid = Column::new().spacing(spacing::XXS).align_x(Horizontal::Center);
        for (row_index, cards) in self.cards.chunks(GRID_COLUMNS).enumerate() {
            let mut row = Row::new().spacing(spacing::XXS);
            for (col_index, card) in cards.iter().enumerate() {
                let index = row_index * GRID_COLUMNS + col_index;
                let face: Element<'a, Message> = if card.face_up || card.matched {
                    text(card.glyph).size(typography::TITLE_MD).into()
                } else {
                    text("?").size(typography::TITLE_MD).into()
                };

                let mut cell = button(
                    container(face)
                        .center_x(Length::Fill)
                        .center_y(Length::Fill),
                )
                .width(sizing::MEMORY_CARD)
                .height(sizing::MEMORY_CARD);

                cell = if card.matched {
                    cell.style(styles::button::selected)
                } else {
                    cell.style(styles::button::outline).on_press(Message::CardPressed(index))
                };

                row = row.push(cell);
            }
            grid = grid.push(row);
        }
        content = content.push(grid);

        content = content.push(
            button(text(i18n.tr("games-new-game-button")))
                .style(styles::button::primary)
                .on_press(Message::NewGame),
        );
        content = content.push(text(i18n.tr("memory-instruction")).size(typography::CAPTION));

        content.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_pair(state: &State) -> (usize, usize) {
        for i in 0..state.cards.len() {
            for j in i + 1..state.cards.len() {
                if state.cards[i].glyph == state.cards[j].glyph {
                    return (i, j);
                }
            }
        }
        unreachable!("a shuffled deck always contains pairs");
    }

    fn find_mismatch(state: &State) -> (usize, usize) {
        for i in 0..state.cards.len() {
            for j in i + 1..state.cards.len() {
                if state.cards[i].glyph != state.cards[j].glyph {
                    return (i, j);
                }
            }
        }
        unreachable!("a shuffled deck always contains distinct glyphs");
    }

    #[test]
    fn deck_has_sixteen_cards_in_pairs() {
        let state = State::new();
        assert_eq!(state.cards.len(), 16);
        for glyph in MEMORY_GLYPHS {
            let count = state.cards.iter().filter(|c| c.glyph == glyph).count();
            assert_eq!(count, 2);
        }
    }

    #[tokio::test]
    async fn third_flip_is_refused_while_resolving() {
        let mut state = State::new();
        let _ = state.update(Message::CardPressed(0));
        let _ = state.update(Message::CardPressed(1));
        assert!(state.is_resolving());

        let _ = state.update(Message::CardPressed(2));
        assert!(!state.cards[2].face_up);
    }

    #[tokio::test]
    async fn matched_pair_stays_up_after_resolution() {
        let mut state = State::new();
        let (a, b) = find_pair(&state);
        let _ = state.update(Message::CardPressed(a));
        let _ = state.update(Message::CardPressed(b));
        let generation = state.generation;
        let _ = state.update(Message::Resolve(generation));

        assert!(state.cards[a].matched);
        assert!(state.cards[b].matched);
        assert_eq!(state.moves(), 1);
    }

    #[tokio::test]
    async fn mismatched_pair_flips_back() {
        let mut state = State::new();
        let (a, b) = find_mismatch(&state);
        let _ = state.update(Message::CardPressed(a));
        let _ = state.update(Message::CardPressed(b));
        let generation = state.generation;
        let _ = state.update(Message::Resolve(generation));

        assert!(!state.cards[a].face_up);
        assert!(!state.cards[b].face_up);
        assert!(!state.cards[a].matched);
    }

    #[tokio::test]
    async fn stale_resolve_from_previous_round_is_discarded() {
        let mut state = State::new();
        let _ = state.update(Message::CardPressed(0));
        let _ = state.update(Message::CardPressed(1));
        let stale_generation = state.generation;

        let _ = state.update(Message::NewGame);
        let _ = state.update(Message::Resolve(stale_generation));

        // The new deck is untouched: nothing matched, nothing face-up.
        assert!(state.cards.iter().all(|c| !c.matched && !c.face_up));
    }

    #[tokio::test]
    async fn new_game_resets_counters() {
        let mut state = State::new();
        let _ = state.update(Message::CardPressed(0));
        let _ = state.update(Message::CardPressed(1));
        let _ = state.update(Message::NewGame);
        assert_eq!(state.moves(), 0);
        assert!(!state.is_resolving());
    }

    #[test]
    fn winning_requires_all_pairs() {
        let mut state = State::new();
        assert!(!state.is_won());
        for card in &mut state.cards {
            card.matched = true;
        }
        assert!(state.is_won());
    }
}
