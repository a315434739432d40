// SPDX-License-Identifier: MPL-2.0
//! Modern-tools screen: takeaways, workflow prose, and the tool grid.
//!
//! Fully static; the view is generic over the message type.

use crate::content::{TAKEAWAYS, TOOLS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{container, text, Column, Row};
use iced::{Element, Length};

/// Render the tools screen.
pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("tools-title")).size(typography::TITLE_LG))
        .push(text(i18n.tr("tools-subtitle")).size(typography::BODY_LG));

    let mut takeaway_row = Row::new().spacing(spacing::MD);
    for takeaway in TAKEAWAYS {
        takeaway_row = takeaway_row.push(
            container(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .width(Length::Fixed(180.0))
                    .push(
                        text(takeaway.title)
                            .size(typography::TITLE_SM)
                            .color(palette::VIOLET_400),
                    )
                    .push(text(takeaway.description).size(typography::CAPTION)),
            )
            .padding(spacing::MD)
            .style(styles::container::card),
        );
    }

    let workflow = container(
        Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("tools-workflow-title")).size(typography::TITLE_MD))
            .push(text(i18n.tr("tools-workflow-p1")).size(typography::BODY))
            .push(text(i18n.tr("tools-workflow-p2")).size(typography::BODY))
            .push(text(i18n.tr("tools-workflow-p3")).size(typography::BODY)),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(680.0))
    .style(styles::container::card);

    let mut grid = Column::new().spacing(spacing::MD).align_x(Horizontal::Center);
    for tools in TOOLS.chunks(3) {
        let mut row = Row::new().spacing(spacing::MD);
        for tool in tools {
            let mut features = Column::new().spacing(spacing::XXS);
            for feature in tool.features {
                features = features.push(text(format!("✓ {feature}")).size(typography::CAPTION));
            }

            row = row.push(
                container(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fixed(220.0))
                        .push(
                            Row::new()
                                .push(text(tool.name).size(typography::TITLE_SM).width(Length::Fill))
                                .push(
                                    container(text(tool.category).size(typography::CAPTION))
                                        .padding([2.0, spacing::XS])
                                        .style(styles::container::badge(palette::VIOLET_500)),
                                ),
                        )
                        .push(text(tool.description).size(typography::BODY))
                        .push(features),
                )
                .padding(spacing::MD)
                .style(styles::container::card),
            );
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .padding([spacing::XL, spacing::LG])
        .push(header)
        .push(takeaway_row)
        .push(workflow)
        .push(text(i18n.tr("tools-grid-title")).size(typography::TITLE_MD))
        .push(grid)
        .into()
}
