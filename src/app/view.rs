// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the progress track, the navbar, the active screen inside a single
//! scrollable (which feeds the reading progress), and the floating layers
//! (toasts, explorer badge).

use super::{App, Message, Screen};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::screens::{settings, tools};
use crate::ui::styles;
use crate::ui::{notifications, progress};
use iced::alignment::Horizontal;
use iced::widget::scrollable::{RelativeOffset, Scrollable};
use iced::widget::{container, operation, text, Column, Container, Id, Stack};
use iced::{Element, Length, Task};

/// Id of the scrollable hosting the active screen.
const SCREEN_SCROLLABLE_ID: &str = "active-screen";

/// Task resetting the screen scrollable to the top (used on screen switch).
pub fn snap_to_top() -> Task<Message> {
    operation::snap_to(Id::new(SCREEN_SCROLLABLE_ID), RelativeOffset::START)
}

/// Task scrolling the screen to the bottom (home call-to-action).
pub fn snap_to_bottom() -> Task<Message> {
    operation::snap_to(Id::new(SCREEN_SCROLLABLE_ID), RelativeOffset::END)
}

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let screen_content: Element<'_, Message> = match app.screen {
        Screen::Home => app.home.view(&app.i18n).map(Message::Home),
        Screen::WhyUi => app.why_ui.view(&app.i18n).map(Message::WhyUi),
        Screen::Tools => tools::view(&app.i18n),
        Screen::OldVsNew => app.old_vs_new.view(&app.i18n).map(Message::OldVsNew),
        Screen::Portfolio => app.portfolio.view(&app.i18n).map(Message::Portfolio),
        Screen::Team => app.team.view(&app.i18n).map(Message::Team),
        Screen::Playground => app.playground.view(&app.i18n).map(Message::Playground),
        Screen::Contact => app.contact.view(&app.i18n).map(Message::Contact),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: &app.i18n,
            theme_mode: app.config.theme_mode,
            reduced_motion: app.config.reduced_motion.unwrap_or(false),
        })
        .map(Message::Settings),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        active: app.screen,
        menu_open: app.menu_open,
    })
    .map(Message::Navbar);

    let page = Scrollable::new(container(screen_content).center_x(Length::Fill))
        .id(Id::new(SCREEN_SCROLLABLE_ID))
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let base = Column::new()
        .push(progress::view(app.progress))
        .push(navbar_view)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(base);

    if app.notifications.has_visible() {
        let toasts = notifications::view(&app.notifications, &app.i18n).map(Message::Notification);
        layers = layers.push(
            Container::new(toasts)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(spacing::MD),
        );
    }

    if app.progress.is_complete() {
        layers = layers.push(
            Container::new(
                container(text(app.i18n.tr("progress-explorer-badge")).size(typography::CAPTION))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::container::badge(palette::MAGENTA_500)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(iced::alignment::Vertical::Bottom)
            .padding(spacing::LG),
        );
    }

    layers.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_every_screen() {
        let mut app = App::default();
        let _ = view(&app);

        for screen in [
            Screen::WhyUi,
            Screen::Tools,
            Screen::OldVsNew,
            Screen::Portfolio,
            Screen::Team,
            Screen::Playground,
            Screen::Contact,
            Screen::Settings,
        ] {
            let _task = app.switch_screen(screen);
            let _ = view(&app);
        }
    }
}
