// SPDX-License-Identifier: MPL-2.0
//! Contact screen: validated form with a simulated async submission.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, text_editor, text_input, Column, Row};
use iced::{Element, Length, Task};
use std::time::Duration;

/// Simulated round-trip time for a submission.
const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Social links shown next to the form.
const SOCIAL_LINKS: [&str; 4] = ["LinkedIn", "Codeberg", "Mastodon", "Dribbble"];

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    SubmitPressed,
    Submitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The form was submitted successfully; show the success toast.
    Sent,
    /// Validation failed; show the warning toast.
    Invalid,
}

pub struct State {
    name: String,
    email: String,
    message: text_editor::Content,
    submitting: bool,
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
            name: String::new(),
            email: String::new(),
            message: text_editor::Content::new(),
            submitting: false,
        }
    }

    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.email.contains('@')
            && !self.message.text().trim().is_empty()
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                (Event::None, Task::none())
            }
            Message::EmailChanged(email) => {
                self.email = email;
                (Event::None, Task::none())
            }
            Message::MessageEdited(action) => {
                if !self.submitting {
                    self.message.perform(action);
                }
                (Event::None, Task::none())
            }
            Message::SubmitPressed => {
                if self.submitting {
                    return (Event::None, Task::none());
                }
                if !self.is_valid() {
                    return (Event::Invalid, Task::none());
                }
                self.submitting = true;
                (
                    Event::None,
                    Task::perform(tokio::time::sleep(SUBMIT_DELAY), |()| Message::Submitted),
                )
            }
            Message::Submitted => {
                self.name.clear();
                self.email.clear();
                self.message = text_editor::Content::new();
                self.submitting = false;
                (Event::Sent, Task::none())
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("contact-title")).size(typography::TITLE_LG))
            .push(text(i18n.tr("contact-subtitle")).size(typography::BODY_LG));

        let name_input = text_input(&i18n.tr("contact-name-placeholder"), &self.name)
            .on_input(Message::NameChanged)
            .padding(spacing::XS);
        let email_input = text_input(&i18n.tr("contact-email-placeholder"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::XS);
        let message_input = text_editor(&self.message)
            .placeholder(i18n.tr("contact-message-placeholder"))
            .on_action(Message::MessageEdited)
            .height(Length::Fixed(140.0))
            .padding(spacing::XS);

        let submit_label = if self.submitting {
            i18n.tr("contact-sending-button")
        } else {
            i18n.tr("contact-send-button")
        };
        let mut submit = button(text(submit_label))
            .style(styles::button::primary)
            .padding([spacing::SM, spacing::LG]);
        if !self.submitting {
            submit = submit.on_press(Message::SubmitPressed);
        }

        let form = container(
            Column::new()
                .spacing(spacing::SM)
                .push(text(i18n.tr("contact-form-title")).size(typography::TITLE_MD))
                .push(text(i18n.tr("contact-name-label")).size(typography::CAPTION))
                .push(name_input)
                .push(text(i18n.tr("contact-email-label")).size(typography::CAPTION))
                .push(email_input)
                .push(text(i18n.tr("contact-message-label")).size(typography::CAPTION))
                .push(message_input)
                .push(submit),
        )
        .padding(spacing::LG)
        .width(Length::Fixed(460.0))
        .style(styles::container::card);

        let mut socials = Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("contact-socials-title")).size(typography::TITLE_MD));
        for link in SOCIAL_LINKS {
            socials = socials.push(
                container(text(link).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::badge(palette::VIOLET_600)),
            );
        }
        let socials = container(socials)
            .padding(spacing::LG)
            .style(styles::container::card);

        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .padding([spacing::XL, spacing::LG])
            .push(header)
            .push(Row::new().spacing(spacing::LG).push(form).push(socials))
            .into()
    }
}
