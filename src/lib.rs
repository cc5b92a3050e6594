// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is an animated lightbox image overlay for the Iced GUI
//! toolkit.
//!
//! The overlay expands content from a thumbnail's on-screen rectangle to a
//! full-window presentation, fades a configurable backdrop, supports
//! dismiss-by-drag with a spring-back under the threshold, and renders an
//! optional header. A demo gallery application ships in [`app`].

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod platform;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
