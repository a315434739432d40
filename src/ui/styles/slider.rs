// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.
//!
//! Used by the comparison widget's discrete position control.

use crate::ui::design_tokens::palette;
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Brand-colored slider: violet filled rail, white circular handle.
pub fn brand(theme: &Theme, status: slider::Status) -> slider::Style {
    let is_light = matches!(theme, Theme::Light);

    let empty_rail = if is_light {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };

    let handle_background = match status {
        slider::Status::Dragged => palette::VIOLET_200,
        _ => palette::WHITE,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::VIOLET_500),
                Background::Color(empty_rail),
            ),
            width: 4.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle { radius: 8.0 },
            background: Background::Color(handle_background),
            border_width: 2.0,
            border_color: palette::VIOLET_500,
        },
    }
}
