// SPDX-License-Identifier: MPL-2.0
//! Image data types and procedural artwork.

pub mod artwork;
mod raw_image;

pub use raw_image::RawImage;

use iced::widget::image::Handle;

/// Converts a [`RawImage`] into an Iced image handle.
#[must_use]
pub fn to_handle(image: &RawImage) -> Handle {
    Handle::from_rgba(
        image.width(),
        image.height(),
        image.rgba_bytes().to_vec(),
    )
}
