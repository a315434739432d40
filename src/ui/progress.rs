// SPDX-License-Identifier: MPL-2.0
//! Reading-progress indicator.
//!
//! Tracks how far the active screen has been scrolled and renders a thin
//! track at the top of the window. Reaching the end (≥ 99%) earns the
//! explorer acknowledgement badge.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::scrollable::Viewport;
use iced::widget::{progress_bar, ProgressBar};
use iced::{Background, Theme};

/// Fraction of the screen that counts as "read to the end".
const COMPLETE_THRESHOLD: f32 = 0.99;

/// Scroll progress of the active screen, in [0, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingProgress(f32);

impl ReadingProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a scroll viewport update from the active screen.
    pub fn update(&mut self, viewport: &Viewport) {
        let offset = viewport.relative_offset().y;
        self.0 = if offset.is_finite() {
            offset.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Resets on screen switch; a new screen starts unread.
    pub fn reset(&mut self) {
        self.0 = 0.0;
    }

    /// Progress in percent, for the track widget.
    #[must_use]
    pub fn percent(&self) -> f32 {
        self.0 * 100.0
    }

    /// Whether the reader reached the end of the screen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0 >= COMPLETE_THRESHOLD
    }
}

/// Renders the progress track.
#[must_use]
pub fn view(progress: ReadingProgress) -> ProgressBar<'static, Theme> {
    progress_bar(0.0..=100.0, progress.percent())
        .girth(sizing::PROGRESS_TRACK)
        .style(|theme: &Theme| {
            let palette_ext = theme.extended_palette();
            progress_bar::Style {
                background: Background::Color(palette_ext.background.weak.color),
                bar: Background::Color(palette::VIOLET_500),
                border: Default::default(),
            }
        })
}
