// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the showcase UI.
//!
//! - **Palette**: base colors (violet/magenta brand scale)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.07, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.26, 0.34);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.43, 0.52);
    pub const GRAY_200: Color = Color::from_rgb(0.74, 0.73, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.87, 0.92);

    // Brand colors (violet scale)
    pub const VIOLET_200: Color = Color::from_rgb(0.85, 0.76, 0.98);
    pub const VIOLET_400: Color = Color::from_rgb(0.71, 0.54, 0.96);
    pub const VIOLET_500: Color = Color::from_rgb(0.58, 0.36, 0.92);
    pub const VIOLET_600: Color = Color::from_rgb(0.49, 0.27, 0.83);
    pub const VIOLET_800: Color = Color::from_rgb(0.3, 0.16, 0.55);

    // Accent (magenta scale)
    pub const MAGENTA_400: Color = Color::from_rgb(0.95, 0.45, 0.75);
    pub const MAGENTA_500: Color = Color::from_rgb(0.93, 0.28, 0.6);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Semi-transparent panels and cards
    pub const SURFACE: f32 = 0.92;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    // Navigation
    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const PROGRESS_TRACK: f32 = 4.0;

    // Comparison widget
    pub const COMPARISON_HEIGHT: f32 = 320.0;
    pub const COMPARISON_DIVIDER: f32 = 3.0;
    pub const COMPARISON_HANDLE_RADIUS: f32 = 14.0;

    // Games
    pub const MEMORY_CARD: f32 = 64.0;
    pub const WHEEL_DIAMETER: f32 = 260.0;
    pub const DODGE_FIELD_WIDTH: f32 = 320.0;
    pub const DODGE_FIELD_HEIGHT: f32 = 360.0;

    // Cards and toasts
    pub const AVATAR: f32 = 96.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline
    pub const DISPLAY: f32 = 44.0;

    /// Large title - main screen headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - section headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - card headings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - most UI text
    pub const BODY: f32 = 14.0;

    /// Caption - badges, hints, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::VIOLET_500.r >= 0.0 && palette::VIOLET_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_scale_darkens_monotonically() {
        assert!(palette::VIOLET_200.r > palette::VIOLET_400.r);
        assert!(palette::VIOLET_400.r > palette::VIOLET_600.r);
        assert!(palette::VIOLET_600.r > palette::VIOLET_800.r);
    }
}
