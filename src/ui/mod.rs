// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Organized following a component-based architecture with the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`lightbox`] - The overlay component itself
//! - [`state`] - Reusable state management (springs, pan recognizer)
//! - [`styles`] - Centralized styling (overlay layers, gallery)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod lightbox;
pub mod state;
pub mod styles;
