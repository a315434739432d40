// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! A brand mark, one link per primary screen with active-screen highlighting,
//! and an overflow menu giving access to the settings screen.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::{
    widget::{button, container, text, Column, Container, Row},
    Border, Element, Length, Theme,
};

/// Primary screens linked from the bar, in display order.
const NAV_ITEMS: [(Screen, &str); 7] = [
    (Screen::Home, "nav-home"),
    (Screen::WhyUi, "nav-why-ui"),
    (Screen::Tools, "nav-tools"),
    (Screen::OldVsNew, "nav-old-vs-new"),
    (Screen::Portfolio, "nav-portfolio"),
    (Screen::Team, "nav-team"),
    (Screen::Playground, "nav-playground"),
];

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    ToggleMenu,
    OpenSettings,
    OpenContact,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::Navigate(screen) => {
            *menu_open = false;
            Event::Navigate(screen)
        }
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::OpenSettings => {
            *menu_open = false;
            Event::Navigate(Screen::Settings)
        }
        Message::OpenContact => {
            *menu_open = false;
            Event::Navigate(Screen::Contact)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

/// Build the top bar: brand mark, screen links, overflow menu button.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Row::new()
            .push(text("UI").size(typography::TITLE_MD))
            .push(
                text("Trio")
                    .size(typography::TITLE_MD)
                    .color(palette::VIOLET_400),
            ),
    )
    .style(styles::button::flat)
    .on_press(Message::Navigate(Screen::Home));

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::SM])
        .align_y(Vertical::Center)
        .push(brand)
        .push(iced::widget::space::horizontal());

    for (screen, key) in NAV_ITEMS {
        let link = button(text(ctx.i18n.tr(key)).size(typography::BODY));
        let link = if ctx.active == screen {
            link.style(styles::button::selected)
        } else {
            link.style(styles::button::flat).on_press(Message::Navigate(screen))
        };
        row = row.push(link);
    }

    let menu_button = button(icons::sized(icons::menu(), sizing::ICON_MD))
        .style(styles::button::flat)
        .on_press(Message::ToggleMenu);
    row = row.push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

/// Build the overflow menu with contact and settings entries.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let contact_item = build_menu_item(
        icons::info(),
        ctx.i18n.tr("nav-contact"),
        Message::OpenContact,
    );
    let settings_item = build_menu_item(
        icons::cog(),
        ctx.i18n.tr("menu-settings"),
        Message::OpenSettings,
    );

    let menu_column = Column::new()
        .spacing(spacing::XXS)
        .push(contact_item)
        .push(settings_item);

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Build a single menu item with icon and label.
fn build_menu_item<'a>(
    icon: iced::widget::svg::Svg<'static>,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_SM))
        .push(text(label));

    button(row)
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::flat)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Screen::Home,
            menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Screen::Portfolio,
            menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navigate_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let event = update(Message::Navigate(Screen::Tools), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::Navigate(Screen::Tools)));
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn menu_entries_route_to_their_screens() {
        let mut menu_open = true;
        let event = update(Message::OpenSettings, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::Navigate(Screen::Settings)));

        menu_open = true;
        let event = update(Message::OpenContact, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::Navigate(Screen::Contact)));
    }
}
