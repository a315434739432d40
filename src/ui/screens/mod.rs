// SPDX-License-Identifier: MPL-2.0
//! One module per screen.
//!
//! Screens follow a common shape: a `State` where the screen is stateful, a
//! `Message` enum, an `update` returning an `Event` for the application (and
//! a `Task` where delayed effects are involved), and a `view`.

pub mod contact;
pub mod home;
pub mod old_vs_new;
pub mod playground;
pub mod portfolio;
pub mod settings;
pub mod team;
pub mod tools;
pub mod why_ui;
