// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Severity;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{Border, Color, Element, Length, Theme};

fn accent_for(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Info => palette::INFO_500,
        Severity::Warning => palette::WARNING_500,
        Severity::Error => palette::ERROR_500,
    }
}

/// Renders the visible toasts as a stacked column.
pub fn view<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS).width(sizing::TOAST_WIDTH);

    for notification in manager.visible() {
        let accent = accent_for(notification.severity());

        let dismiss = button(icons::sized(icons::close(), sizing::ICON_SM))
            .style(styles::button::flat)
            .on_press(Message::Dismiss(notification.id()));

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                text(i18n.tr(notification.message_key()))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(dismiss);

        column = column.push(
            Container::new(row)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(move |theme: &Theme| {
                    let palette_ext = theme.extended_palette();
                    container::Style {
                        background: Some(palette_ext.background.weak.color.into()),
                        border: Border {
                            radius: radius::MD.into(),
                            width: 2.0,
                            color: accent,
                        },
                        ..Default::default()
                    }
                }),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Notification;

    #[test]
    fn view_renders_with_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::success("contact-sent-toast"));
        let i18n = I18n::default();
        let _element = view(&manager, &i18n);
    }

    #[test]
    fn view_renders_empty() {
        let manager = Manager::new();
        let i18n = I18n::default();
        let _element = view(&manager, &i18n);
    }
}
