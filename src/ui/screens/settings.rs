// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme mode, and reduced motion.
//!
//! The backing state is the application config; this module only renders it
//! and translates interactions into events.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, toggler, Column, Row};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub reduced_motion: bool,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ReducedMotionToggled(bool),
    BackPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SetLanguage(LanguageIdentifier),
    SetThemeMode(ThemeMode),
    SetReducedMotion(bool),
    Back,
}

/// Process a settings message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::SetLanguage(locale),
        Message::ThemeModeSelected(mode) => Event::SetThemeMode(mode),
        Message::ReducedMotionToggled(enabled) => Event::SetReducedMotion(enabled),
        Message::BackPressed => Event::Back,
    }
}

const THEME_MODES: [(ThemeMode, &str); 3] = [
    (ThemeMode::Light, "settings-theme-light"),
    (ThemeMode::Dark, "settings-theme-dark"),
    (ThemeMode::System, "settings-theme-system"),
];

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back = button(text(format!("← {}", ctx.i18n.tr("settings-back-button"))))
        .style(styles::button::flat)
        .on_press(Message::BackPressed);

    let title = text(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    // Language selection
    let mut languages = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("settings-language-label")).size(typography::TITLE_SM));
    for locale in &ctx.i18n.available_locales {
        let translated_name = ctx.i18n.tr(&format!("language-name-{locale}"));
        let label = if translated_name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            format!("{translated_name} ({locale})")
        };

        let is_current = ctx.i18n.current_locale() == locale;
        let mut control = button(text(label));
        control = if is_current {
            control.style(styles::button::selected)
        } else {
            control
                .style(styles::button::outline)
                .on_press(Message::LanguageSelected(locale.clone()))
        };
        languages = languages.push(control);
    }

    // Theme mode selection
    let mut theme_row = Row::new().spacing(spacing::SM);
    for (mode, key) in THEME_MODES {
        let control = button(text(ctx.i18n.tr(key)));
        let control = if ctx.theme_mode == mode {
            control.style(styles::button::selected)
        } else {
            control
                .style(styles::button::outline)
                .on_press(Message::ThemeModeSelected(mode))
        };
        theme_row = theme_row.push(control);
    }
    let theme_section = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("settings-theme-label")).size(typography::TITLE_SM))
        .push(theme_row);

    // Reduced motion
    let motion_section = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("settings-motion-label")).size(typography::TITLE_SM))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(
                    toggler(ctx.reduced_motion)
                        .on_toggle(Message::ReducedMotionToggled),
                )
                .push(text(ctx.i18n.tr("settings-motion-hint")).size(typography::CAPTION)),
        );

    let panel = container(
        Column::new()
            .spacing(spacing::LG)
            .push(languages)
            .push(theme_section)
            .push(motion_section),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(420.0))
    .style(styles::container::panel);

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .padding([spacing::XL, spacing::LG])
        .push(back)
        .push(title)
        .push(panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            theme_mode: ThemeMode::System,
            reduced_motion: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn messages_map_to_events() {
        assert!(matches!(
            update(Message::ThemeModeSelected(ThemeMode::Dark)),
            Event::SetThemeMode(ThemeMode::Dark)
        ));
        assert!(matches!(
            update(Message::ReducedMotionToggled(true)),
            Event::SetReducedMotion(true)
        ));
        assert!(matches!(update(Message::BackPressed), Event::Back));
    }

    #[test]
    fn language_selection_carries_the_locale() {
        let locale: LanguageIdentifier = "fr".parse().unwrap();
        let event = update(Message::LanguageSelected(locale.clone()));
        assert!(matches!(event, Event::SetLanguage(l) if l == locale));
    }
}
