// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::screens::{contact, home, old_vs_new, playground, portfolio, settings, team, why_ui};
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    WhyUi(why_ui::Message),
    OldVsNew(old_vs_new::Message),
    Portfolio(portfolio::Message),
    Team(team::Message),
    Playground(playground::Message),
    Contact(contact::Message),
    Settings(settings::Message),
    Notification(notifications::Message),
    /// Shared 100 ms tick for animations and toast auto-dismiss.
    Tick(Instant),
    /// Redraw-rate tick, active only while a comparison drag session runs;
    /// commits the most recent staged position (one update per frame).
    ComparisonFrame(Instant),
    /// Scroll progress of the active screen.
    PageScrolled(scrollable::Viewport),
    /// Window-level event routed by the active subscription (global drag
    /// tracking, arrow keys for the dodge game).
    RawEvent(iced::Event),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_path: Option<String>,
}
