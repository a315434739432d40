// SPDX-License-Identifier: MPL-2.0
//! Lane-dodging game.
//!
//! The car moves between lanes in fixed steps (arrow keys or buttons) while
//! obstacles fall on the shared 100 ms tick. Coordinates are percentages of
//! the field, as in the layout: obstacles advance 5 per tick, spawn with
//! probability 0.3, and a collision closer than 15 in x past y 80 ends the
//! run. Score counts survived ticks.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::canvas::{self, Canvas, Path};
use iced::widget::{button, container, text, Column, Row, Stack};
use iced::{mouse, Element, Length, Point, Rectangle, Size};
use rand::Rng;

const CAR_STEP: f32 = 20.0;
const CAR_MIN_X: f32 = 10.0;
const CAR_MAX_X: f32 = 90.0;
const OBSTACLE_SPEED: f32 = 5.0;
const SPAWN_PROBABILITY: f32 = 0.3;
const COLLISION_DISTANCE_X: f32 = 15.0;
const COLLISION_ZONE_Y: f32 = 80.0;

/// An obstacle in field percent coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Start,
    Reset,
    MoveLeft,
    MoveRight,
    /// Advance the run; driven by the application tick.
    Tick,
}

#[derive(Debug, Default)]
pub struct State {
    car_x: f32,
    obstacles: Vec<Obstacle>,
    score: u32,
    running: bool,
    game_over: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            car_x: 50.0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Start => {
                self.car_x = 50.0;
                self.obstacles.clear();
                self.score = 0;
                self.game_over = false;
                self.running = true;
            }
            Message::Reset => {
                self.obstacles.clear();
                self.score = 0;
                self.game_over = false;
                self.running = false;
            }
            Message::MoveLeft => {
                if self.running {
                    self.car_x = (self.car_x - CAR_STEP).max(CAR_MIN_X);
                }
            }
            Message::MoveRight => {
                if self.running {
                    self.car_x = (self.car_x + CAR_STEP).min(CAR_MAX_X);
                }
            }
            Message::Tick => self.advance(),
        }
    }

    fn advance(&mut self) {
        if !self.running {
            return;
        }

        for obstacle in &mut self.obstacles {
            obstacle.y += OBSTACLE_SPEED;
        }
        self.obstacles.retain(|o| o.y < 100.0);

        let mut rng = rand::thread_rng();
        if rng.gen::<f32>() < SPAWN_PROBABILITY {
            self.obstacles.push(Obstacle {
                x: rng.gen_range(10.0..90.0),
                y: 0.0,
            });
        }

        let collision = self.obstacles.iter().any(|o| {
            (o.x - self.car_x).abs() < COLLISION_DISTANCE_X && o.y > COLLISION_ZONE_Y
        });
        if collision {
            self.game_over = true;
            self.running = false;
            return;
        }

        self.score += 1;
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let field = Canvas::new(Field {
            car_x: self.car_x,
            obstacles: self.obstacles.clone(),
        })
        .width(Length::Fixed(sizing::DODGE_FIELD_WIDTH))
        .height(Length::Fixed(sizing::DODGE_FIELD_HEIGHT));

        let mut layers = Stack::new().push(field);
        if self.game_over {
            layers = layers.push(
                container(
                    Column::new()
                        .spacing(spacing::XS)
                        .align_x(Horizontal::Center)
                        .push(text(i18n.tr("dodge-game-over-title")).size(typography::TITLE_SM))
                        .push(text(format!(
                            "{} {}",
                            i18n.tr("dodge-final-score-label"),
                            self.score
                        )))
                        .push(
                            button(text(i18n.tr("dodge-play-again-button")))
                                .style(styles::button::primary)
                                .on_press(Message::Start),
                        ),
                )
                .style(styles::container::overlay)
                .padding(spacing::MD)
                .center_x(Length::Fixed(sizing::DODGE_FIELD_WIDTH))
                .center_y(Length::Fixed(sizing::DODGE_FIELD_HEIGHT)),
            );
        }

        let mut left = button(text(i18n.tr("dodge-left-button"))).style(styles::button::outline);
        let mut right = button(text(i18n.tr("dodge-right-button"))).style(styles::button::outline);
        if self.running {
            left = left.on_press(Message::MoveLeft);
            right = right.on_press(Message::MoveRight);
        }
        let controls = Row::new().spacing(spacing::SM).push(left).push(right);

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(format!("{} {}", i18n.tr("dodge-score-label"), self.score)))
            .push(layers)
            .push(controls);

        if !self.running && !self.game_over {
            content = content.push(
                button(text(i18n.tr("dodge-start-button")))
                    .style(styles::button::accent)
                    .on_press(Message::Start),
            );
        }
        content = content.push(text(i18n.tr("dodge-instruction")).size(typography::CAPTION));

        content.into()
    }
}

/// Canvas program drawing the road, car, and obstacles.
struct Field {
    car_x: f32,
    obstacles: Vec<Obstacle>,
}

impl<Message> canvas::Program<Message> for Field {
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
        let width = frame.width();
        let height = frame.height();

        // Road
        let road = Path::rectangle(Point::ORIGIN, Size::new(width, height));
        frame.fill(&road, palette::GRAY_700);

        // Dashed center line
        let dash_height = height / 20.0;
        let mut y = 0.0;
        while y < height {
            let dash = Path::rectangle(
                Point::new(width / 2.0 - 1.5, y),
                Size::new(3.0, dash_height),
            );
            frame.fill(&dash, palette::WARNING_500);
            y += dash_height * 2.0;
        }

        // Car near the bottom
        let car_w = width * 0.08;
        let car_h = height * 0.1;
        let car = Path::rounded_rectangle(
            Point::new(
                width * self.car_x / 100.0 - car_w / 2.0,
                height * 0.88 - car_h / 2.0,
            ),
            Size::new(car_w, car_h),
            4.0.into(),
        );
        frame.fill(&car, palette::INFO_500);

        // Obstacles
        for obstacle in &self.obstacles {
            let ob_w = width * 0.06;
            let ob_h = height * 0.08;
            let shape = Path::rounded_rectangle(
                Point::new(
                    width * obstacle.x / 100.0 - ob_w / 2.0,
                    height * obstacle.y / 100.0 - ob_h / 2.0,
                ),
                Size::new(ob_w, ob_h),
                3.0.into(),
            );
            frame.fill(&shape, palette::ERROR_500);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_clamps_to_lane_limits() {
        let mut state = State::new();
        state.update(Message::Start);

        for _ in 0..5 {
            state.update(Message::MoveLeft);
        }
        assert_eq!(state.car_x, CAR_MIN_X);

        for _ in 0..10 {
            state.update(Message::MoveRight);
        }
        assert_eq!(state.car_x, CAR_MAX_X);
    }

    #[test]
    fn movement_is_ignored_before_start() {
        let mut state = State::new();
        state.update(Message::MoveLeft);
        assert_eq!(state.car_x, 50.0);
    }

    #[test]
    fn ticks_advance_obstacles_and_score() {
        let mut state = State::new();
        state.update(Message::Start);
        state.obstacles.push(Obstacle { x: 10.0, y: 0.0 });

        state.update(Message::Tick);
        assert_eq!(state.score(), 1);
        assert!(state.obstacles.iter().any(|o| o.y >= OBSTACLE_SPEED));
    }

    #[test]
    fn collision_ends_the_run_without_scoring() {
        let mut state = State::new();
        state.update(Message::Start);
        let score_before = state.score();
        state.obstacles.push(Obstacle {
            x: state.car_x,
            y: COLLISION_ZONE_Y - OBSTACLE_SPEED + 1.0,
        });

        state.update(Message::Tick);
        assert!(state.game_over);
        assert!(!state.is_running());
        assert_eq!(state.score(), score_before);
    }

    #[test]
    fn far_obstacles_do_not_collide() {
        let mut state = State::new();
        state.update(Message::Start);
        state.car_x = CAR_MIN_X;
        state.obstacles.push(Obstacle {
            x: CAR_MAX_X,
            y: 90.0,
        });

        state.update(Message::Tick);
        assert!(!state.game_over);
    }

    #[test]
    fn obstacles_despawn_past_the_field() {
        let mut state = State::new();
        state.update(Message::Start);
        state.obstacles.push(Obstacle { x: 10.0, y: 97.0 });

        state.update(Message::Tick);
        assert!(state.obstacles.iter().all(|o| o.y < 100.0));
    }

    #[test]
    fn reset_clears_the_run() {
        let mut state = State::new();
        state.update(Message::Start);
        state.update(Message::Tick);
        state.update(Message::Reset);
        assert_eq!(state.score(), 0);
        assert!(!state.is_running());
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn ticks_do_nothing_while_stopped() {
        let mut state = State::new();
        state.update(Message::Tick);
        assert_eq!(state.score(), 0);
    }
}
