// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the screens, localization, theming, and
//! preferences, and translates component events into side effects like config
//! persistence or scroll resets. Screen states are recreated on navigation,
//! so every screen starts from its initial state when entered (the comparison
//! widget, for one, re-centers at 50).

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::progress::ReadingProgress;
use crate::ui::screens::{contact, home, old_vs_new, playground, portfolio, team, why_ui};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

/// Root Iced application state bridging screens, localization, and persisted
/// preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// Config file override from the CLI, if any.
    config_path: Option<PathBuf>,
    menu_open: bool,
    progress: ReadingProgress,
    notifications: notifications::Manager,
    home: home::State,
    why_ui: why_ui::State,
    old_vs_new: old_vs_new::State,
    portfolio: portfolio::State,
    team: team::State,
    playground: playground::State,
    contact: contact::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("menu_open", &self.menu_open)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let reduced_motion = config.reduced_motion.unwrap_or(false);
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            config,
            config_path: None,
            menu_open: false,
            progress: ReadingProgress::new(),
            notifications: notifications::Manager::new(),
            home: home::State::new(reduced_motion),
            why_ui: why_ui::State::new(reduced_motion),
            old_vs_new: old_vs_new::State::new(),
            portfolio: portfolio::State::new(),
            team: team::State::new(),
            playground: playground::State::new(),
            contact: contact::State::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_path = flags.config_path.as_ref().map(PathBuf::from);
        let config = match &config_path {
            Some(path) => config::load_from_path(path).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };

        let i18n = I18n::new(flags.lang, &config);
        let reduced_motion = config.reduced_motion.unwrap_or(false);

        let app = App {
            i18n,
            config,
            config_path,
            home: home::State::new(reduced_motion),
            why_ui: why_ui::State::new(reduced_motion),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.config.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn reduced_motion(&self) -> bool {
        self.config.reduced_motion.unwrap_or(false)
    }

    /// Persists the current config, surfacing failures as a warning toast.
    fn save_config(&mut self) {
        let result = match &self.config_path {
            Some(path) => config::save_to_path(&self.config, path),
            None => config::save(&self.config),
        };
        if result.is_err() {
            self.notifications
                .push(notifications::Notification::warning("settings-save-failed-toast"));
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Switches to `next`, remounting its state and resetting the scroll
    /// position and reading progress.
    fn switch_screen(&mut self, next: Screen) -> Task<Message> {
        if self.screen == next {
            return Task::none();
        }

        let reduced_motion = self.reduced_motion();
        match next {
            Screen::Home => self.home = home::State::new(reduced_motion),
            Screen::WhyUi => self.why_ui = why_ui::State::new(reduced_motion),
            Screen::OldVsNew => self.old_vs_new = old_vs_new::State::new(),
            Screen::Portfolio => self.portfolio = portfolio::State::new(),
            Screen::Team => self.team = team::State::new(),
            Screen::Playground => self.playground = playground::State::new(),
            Screen::Contact => self.contact = contact::State::new(),
            Screen::Tools | Screen::Settings => {}
        }

        self.screen = next;
        self.menu_open = false;
        self.progress.reset();
        view::snap_to_top()
    }

    /// Whether the active screen hosts a comparison widget with a live drag
    /// session. Drives the global pointer routing and the redraw tick.
    fn comparison_dragging(&self) -> bool {
        match self.screen {
            Screen::OldVsNew => self.old_vs_new.is_dragging(),
            Screen::Portfolio => self.portfolio.is_dragging(),
            _ => false,
        }
    }

    /// Handles a navbar event.
    fn apply_navbar_event(&mut self, event: navbar::Event) -> Task<Message> {
        match event {
            navbar::Event::None => Task::none(),
            navbar::Event::Navigate(screen) => self.switch_screen(screen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_on_home() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
        assert!(!app.comparison_dragging());
    }

    #[test]
    fn switch_screen_remounts_and_closes_menu() {
        let mut app = App::default();
        app.menu_open = true;
        let _task = app.switch_screen(Screen::Portfolio);
        assert_eq!(app.screen, Screen::Portfolio);
        assert!(!app.menu_open);
    }

    #[test]
    fn switching_away_resets_the_comparison() {
        use crate::ui::comparison;
        use crate::ui::screens::old_vs_new;

        let mut app = App::default();
        let _ = app.switch_screen(Screen::OldVsNew);
        app.old_vs_new
            .update(old_vs_new::Message::Comparison(comparison::Message::SliderChanged(
                80.0,
            )));

        let _ = app.switch_screen(Screen::Home);
        let _ = app.switch_screen(Screen::OldVsNew);
        assert!(!app.old_vs_new.is_dragging());
    }

    #[test]
    fn window_settings_have_a_minimum_size() {
        let settings = window_settings();
        assert!(settings.min_size.is_some());
        assert!(settings.icon.is_some());
    }
}
