// SPDX-License-Identifier: MPL-2.0
//! Procedurally rendered demo artwork.
//!
//! The comparison widget contrasts a deliberately cluttered mock interface
//! with a polished one. Both are rendered into RGBA buffers at runtime, so
//! the binary ships no raster assets. The same pipeline renders the window
//! icon and the per-project portfolio artwork (tinted by the project accent).

use crate::media::RawImage;
use image_rs::{Rgba, RgbaImage};

/// Native size of the comparison demo artwork.
pub const DEMO_WIDTH: u32 = 640;
/// Native height of the comparison demo artwork.
pub const DEMO_HEIGHT: u32 = 400;

fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x_end = (x + w).min(canvas.width());
    let y_end = (y + h).min(canvas.height());
    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, color);
        }
    }
}

fn outlined_rect(
    canvas: &mut RgbaImage,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    fill_rect(canvas, x, y, w, h, outline);
    if w > 2 && h > 2 {
        fill_rect(canvas, x + 1, y + 1, w - 2, h - 2, fill);
    }
}

fn vertical_gradient(canvas: &mut RgbaImage, top: (u8, u8, u8), bottom: (u8, u8, u8)) {
    let height = canvas.height().max(1);
    for y in 0..canvas.height() {
        let t = f32::from(y as u16) / height as f32;
        let lerp = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };
        let color = Rgba([lerp(top.0, bottom.0), lerp(top.1, bottom.1), lerp(top.2, bottom.2), 255]);
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Renders the "before" side: a dense, gray, borders-everywhere interface.
#[must_use]
pub fn cluttered_ui(width: u32, height: u32) -> RawImage {
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([196, 196, 196, 255]));

    let dark = Rgba([90, 90, 90, 255]);
    let mid = Rgba([150, 150, 150, 255]);
    let field = Rgba([225, 225, 225, 255]);

    // Heavy title bar
    fill_rect(&mut canvas, 0, 0, width, height / 10, dark);

    // Crammed sidebar of identical entries
    let sidebar_w = width / 4;
    fill_rect(&mut canvas, 0, height / 10, sidebar_w, height, mid);
    let row_h = height / 14;
    let mut y = height / 10 + 4;
    while y + row_h < height {
        outlined_rect(&mut canvas, 4, y, sidebar_w - 8, row_h, field, dark);
        y += row_h + 2;
    }

    // Wall of boxed widgets with no breathing room
    let cell_w = (width - sidebar_w) / 4;
    let cell_h = height / 6;
    for row in 0..5 {
        for col in 0..4 {
            let x = sidebar_w + col * cell_w;
            let y = height / 10 + row * cell_h;
            outlined_rect(&mut canvas, x, y, cell_w, cell_h, field, dark);
            // Dense text placeholder lines
            for line in 0..3 {
                fill_rect(
                    &mut canvas,
                    x + 6,
                    y + 8 + line * 10,
                    cell_w.saturating_sub(12),
                    4,
                    mid,
                );
            }
        }
    }

    RawImage::from_rgba(width, height, canvas.into_raw())
}

/// Renders the "after" side: the same interface with hierarchy and air.
#[must_use]
pub fn polished_ui(width: u32, height: u32, accent: (u8, u8, u8)) -> RawImage {
    let mut canvas = RgbaImage::new(width, height);
    vertical_gradient(&mut canvas, (250, 249, 253), (238, 234, 248));

    let accent_color = Rgba([accent.0, accent.1, accent.2, 255]);
    let accent_soft = Rgba([
        accent.0.saturating_add(60),
        accent.1.saturating_add(60),
        accent.2.saturating_add(60),
        255,
    ]);
    let ink = Rgba([60, 56, 72, 255]);
    let card = Rgba([255, 255, 255, 255]);

    // Slim header with a brand mark and two nav pills
    fill_rect(&mut canvas, 0, 0, width, height / 12, card);
    fill_rect(&mut canvas, width / 24, height / 48, height / 24, height / 24, accent_color);
    fill_rect(&mut canvas, width - width / 5, height / 36, width / 16, height / 60, accent_soft);
    fill_rect(
        &mut canvas,
        width - width / 10,
        height / 36,
        width / 16,
        height / 60,
        accent_color,
    );

    // Hero band
    let hero_y = height / 12 + height / 24;
    fill_rect(&mut canvas, width / 12, hero_y, width / 2, height / 24, ink);
    fill_rect(
        &mut canvas,
        width / 12,
        hero_y + height / 16,
        width / 3,
        height / 36,
        accent_soft,
    );
    // Call-to-action pill
    fill_rect(
        &mut canvas,
        width / 12,
        hero_y + height / 8,
        width / 7,
        height / 18,
        accent_color,
    );

    // Three spaced cards
    let card_y = height / 2;
    let card_h = height / 3;
    let gap = width / 24;
    let card_w = (width - gap * 4) / 3;
    for i in 0..3 {
        let x = gap + i * (card_w + gap);
        fill_rect(&mut canvas, x, card_y, card_w, card_h, card);
        fill_rect(&mut canvas, x + card_w / 8, card_y + card_h / 8, card_w / 4, card_w / 4, accent_soft);
        fill_rect(
            &mut canvas,
            x + card_w / 8,
            card_y + card_h / 2,
            card_w * 3 / 4,
            card_h / 16,
            ink,
        );
        fill_rect(
            &mut canvas,
            x + card_w / 8,
            card_y + card_h * 5 / 8,
            card_w / 2,
            card_h / 20,
            accent_soft,
        );
    }

    RawImage::from_rgba(width, height, canvas.into_raw())
}

/// Renders the before/after pair for a comparison widget at the native size.
#[must_use]
pub fn comparison_pair(accent: (u8, u8, u8)) -> (RawImage, RawImage) {
    (
        cluttered_ui(DEMO_WIDTH, DEMO_HEIGHT),
        polished_ui(DEMO_WIDTH, DEMO_HEIGHT, accent),
    )
}

/// Composites `before` over `after`, keeping `before` visible left of the
/// boundary at `percent` of the width.
///
/// # Panics
///
/// Panics if the two images have different dimensions; callers composite
/// pairs produced by [`comparison_pair`], which are always matched.
#[must_use]
pub fn compose_split(before: &RawImage, after: &RawImage, percent: f32) -> RawImage {
    assert_eq!(
        (before.width(), before.height()),
        (after.width(), after.height()),
        "compose_split requires images of identical dimensions"
    );

    let width = before.width();
    let height = before.height();
    let split_col = ((percent.clamp(0.0, 100.0) / 100.0) * width as f32).round() as u32;

    let before_bytes = before.rgba_bytes();
    let after_bytes = after.rgba_bytes();
    let mut out = Vec::with_capacity(before_bytes.len());

    let row_len = (width as usize) * 4;
    let split_len = (split_col.min(width) as usize) * 4;
    for row in 0..height as usize {
        let start = row * row_len;
        out.extend_from_slice(&before_bytes[start..start + split_len]);
        out.extend_from_slice(&after_bytes[start + split_len..start + row_len]);
    }

    RawImage::from_rgba(width, height, out)
}

/// Renders a simple avatar: accent disc on a neutral backdrop.
#[must_use]
pub fn avatar(size: u32, accent: (u8, u8, u8)) -> RawImage {
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([240, 238, 246, 255]));
    let accent_color = Rgba([accent.0, accent.1, accent.2, 255]);
    let soft = Rgba([
        accent.0.saturating_add(70),
        accent.1.saturating_add(70),
        accent.2.saturating_add(70),
        255,
    ]);

    let center = size as f32 / 2.0;
    let head_r = size as f32 * 0.18;
    let head_cy = size as f32 * 0.38;
    let body_r = size as f32 * 0.34;
    let body_cy = size as f32 * 0.92;

    for y in 0..size {
        for x in 0..size {
            let fx = x as f32 + 0.5;
            let fy = y as f32 + 0.5;
            let ring = (fx - center).hypot(fy - center);
            if ring > center {
                continue;
            }
            if ring > center - 2.0 {
                canvas.put_pixel(x, y, accent_color);
            } else if (fx - center).hypot(fy - head_cy) < head_r
                || (fx - center).hypot(fy - body_cy) < body_r
            {
                canvas.put_pixel(x, y, soft);
            }
        }
    }

    RawImage::from_rgba(size, size, canvas.into_raw())
}

/// Renders the window icon: a miniature of the comparison widget.
#[must_use]
pub fn app_icon(size: u32) -> RawImage {
    let mut canvas = RgbaImage::new(size, size);
    vertical_gradient(&mut canvas, (148, 92, 235), (237, 71, 153));

    // Gray "before" half
    let half = size / 2;
    for y in 0..size {
        for x in 0..half {
            let shade = 170 + ((x + y) % 2 * 20) as u8;
            canvas.put_pixel(x, y, Rgba([shade, shade, shade, 255]));
        }
    }

    // Divider and round handle
    let divider = Rgba([255, 255, 255, 255]);
    fill_rect(&mut canvas, half.saturating_sub(1), 0, 2, size, divider);
    let center = size as f32 / 2.0;
    let radius = size as f32 / 6.0;
    for y in 0..size {
        for x in 0..size {
            let d = (x as f32 + 0.5 - center).hypot(y as f32 + 0.5 - center);
            if d < radius {
                canvas.put_pixel(x, y, divider);
            }
        }
    }

    RawImage::from_rgba(size, size, canvas.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_pair_dimensions_match() {
        let (before, after) = comparison_pair((148, 92, 235));
        assert_eq!(before.width(), after.width());
        assert_eq!(before.height(), after.height());
        assert_eq!(before.width(), DEMO_WIDTH);
        assert_eq!(before.height(), DEMO_HEIGHT);
    }

    #[test]
    fn compose_at_zero_is_all_after() {
        let (before, after) = comparison_pair((148, 92, 235));
        let composite = compose_split(&before, &after, 0.0);
        assert_eq!(composite, after);
    }

    #[test]
    fn compose_at_hundred_is_all_before() {
        let (before, after) = comparison_pair((148, 92, 235));
        let composite = compose_split(&before, &after, 100.0);
        assert_eq!(composite, before);
    }

    #[test]
    fn compose_midway_mixes_both_sides() {
        let before = RawImage::from_rgba(4, 1, vec![10u8; 16]);
        let after = RawImage::from_rgba(4, 1, vec![20u8; 16]);
        let composite = compose_split(&before, &after, 50.0);
        assert_eq!(
            composite.rgba_bytes(),
            &[10, 10, 10, 10, 10, 10, 10, 10, 20, 20, 20, 20, 20, 20, 20, 20]
        );
    }

    #[test]
    fn compose_clamps_out_of_range_percent() {
        let before = RawImage::from_rgba(2, 1, vec![10u8; 8]);
        let after = RawImage::from_rgba(2, 1, vec![20u8; 8]);
        assert_eq!(compose_split(&before, &after, -5.0), after);
        assert_eq!(compose_split(&before, &after, 250.0), before);
    }

    #[test]
    fn app_icon_is_square_and_sized() {
        let icon = app_icon(64);
        assert_eq!(icon.width(), 64);
        assert_eq!(icon.height(), 64);
    }

    #[test]
    fn avatar_fits_requested_size() {
        let image = avatar(96, (10, 20, 30));
        assert_eq!(image.width(), 96);
        assert_eq!(image.pixel_count(), 96 * 96);
    }
}
