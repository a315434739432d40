// SPDX-License-Identifier: MPL-2.0
//! Window icon, rendered at runtime from the artwork pipeline.

use crate::media::artwork;
use iced::window::icon::{self, Icon};

/// Icon edge length in pixels.
const ICON_SIZE: u32 = 64;

/// Builds the window icon. Returns `None` if the platform rejects it, in
/// which case the window simply keeps its default icon.
#[must_use]
pub fn load_window_icon() -> Option<Icon> {
    let image = artwork::app_icon(ICON_SIZE);
    icon::from_rgba(image.rgba_bytes().to_vec(), image.width(), image.height()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_icon_builds() {
        assert!(load_window_icon().is_some());
    }
}
