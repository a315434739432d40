// SPDX-License-Identifier: MPL-2.0
//! `uitrio` is an interactive portfolio and UI-craft showcase built with the
//! Iced GUI framework.
//!
//! It renders a hero screen, several informational screens, a set of
//! mini-games, and a drag-controlled before/after comparison widget, and
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;
