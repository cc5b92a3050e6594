// SPDX-License-Identifier: MPL-2.0
//! Platform capabilities the overlay consumes without depending on any
//! particular windowing system.

pub mod status_bar;

pub use status_bar::{NoopStatusBar, StatusBar};
