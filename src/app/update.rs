// SPDX-License-Identifier: MPL-2.0
//! Update logic and message routing for the application.

use super::{App, Message, Screen};
use crate::ui::comparison;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::screens::{contact, old_vs_new, playground, portfolio, settings};
use iced::keyboard;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(inner) => {
            let event = navbar::update(inner, &mut app.menu_open);
            app.apply_navbar_event(event)
        }
        Message::Home(inner) => {
            let reduced_motion = app.reduced_motion();
            match app.home.update(inner, reduced_motion) {
                crate::ui::screens::home::Event::None => Task::none(),
                crate::ui::screens::home::Event::ScrollToTeam => super::view::snap_to_bottom(),
                crate::ui::screens::home::Event::Navigate(screen) => app.switch_screen(screen),
            }
        }
        Message::WhyUi(inner) => {
            app.why_ui.update(inner);
            Task::none()
        }
        Message::OldVsNew(inner) => {
            app.old_vs_new.update(inner);
            Task::none()
        }
        Message::Portfolio(inner) => {
            app.portfolio.update(inner);
            Task::none()
        }
        Message::Team(inner) => app.team.update(inner).map(Message::Team),
        Message::Playground(inner) => app.playground.update(inner).map(Message::Playground),
        Message::Contact(inner) => {
            let (event, task) = app.contact.update(inner);
            match event {
                contact::Event::None => {}
                contact::Event::Sent => app
                    .notifications
                    .push(Notification::success("contact-sent-toast")),
                contact::Event::Invalid => app
                    .notifications
                    .push(Notification::warning("contact-invalid-toast")),
            }
            task.map(Message::Contact)
        }
        Message::Settings(inner) => handle_settings(app, inner),
        Message::Notification(inner) => {
            app.notifications.handle(inner);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            match app.screen {
                Screen::Home => {
                    let reduced_motion = app.reduced_motion();
                    let _ = app
                        .home
                        .update(crate::ui::screens::home::Message::Tick, reduced_motion);
                }
                Screen::WhyUi => {
                    app.why_ui.update(crate::ui::screens::why_ui::Message::Tick);
                }
                Screen::Playground => {
                    let _ = app.playground.update(playground::Message::Tick);
                }
                _ => {}
            }
            Task::none()
        }
        Message::ComparisonFrame(_) => {
            match app.screen {
                Screen::OldVsNew => app.old_vs_new.update(old_vs_new::Message::Comparison(
                    comparison::Message::FrameTick,
                )),
                Screen::Portfolio => app.portfolio.update(portfolio::Message::Comparison(
                    comparison::Message::FrameTick,
                )),
                _ => {}
            }
            Task::none()
        }
        Message::PageScrolled(viewport) => {
            app.progress.update(&viewport);
            Task::none()
        }
        Message::RawEvent(event) => handle_raw_event(app, &event),
    }
}

/// Routes a window-level event to whichever component the active screen has
/// listening: a dragging comparison widget, or the dodge game's arrow keys.
fn handle_raw_event(app: &mut App, event: &iced::Event) -> Task<Message> {
    match app.screen {
        Screen::OldVsNew => {
            if app.old_vs_new.is_dragging() {
                app.old_vs_new.handle_window_event(event);
            }
            Task::none()
        }
        Screen::Portfolio => {
            if app.portfolio.is_dragging() {
                app.portfolio.handle_window_event(event);
            }
            Task::none()
        }
        Screen::Playground => {
            if let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
                if let Some(message) = app.playground.map_key(key) {
                    return app.playground.update(message).map(Message::Playground);
                }
            }
            Task::none()
        }
        _ => Task::none(),
    }
}

fn handle_settings(app: &mut App, message: settings::Message) -> Task<Message> {
    match settings::update(message) {
        settings::Event::SetLanguage(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.language = Some(locale.to_string());
            app.save_config();
            Task::none()
        }
        settings::Event::SetThemeMode(mode) => {
            app.config.theme_mode = mode;
            app.save_config();
            Task::none()
        }
        settings::Event::SetReducedMotion(enabled) => {
            app.config.reduced_motion = Some(enabled);
            app.save_config();
            Task::none()
        }
        settings::Event::Back => app.switch_screen(Screen::Home),
    }
}
