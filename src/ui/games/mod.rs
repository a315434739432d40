// SPDX-License-Identifier: MPL-2.0
//! Mini-games hosted on the playground screen.
//!
//! Each game is a self-contained component in the usual shape: a `State`, a
//! `Message` enum, an `update` that mutates the state (returning a `Task`
//! where a delayed effect is needed), and a `view`.

pub mod dodge;
pub mod memory;
pub mod wheel;
pub mod word_guess;
