// SPDX-License-Identifier: MPL-2.0
//! Styles for the lightbox layers: backdrop, content box, and header.

use crate::ui::design_tokens::palette::WHITE;
use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Theme};

/// Backdrop fill behind the transformed content.
///
/// The configured background color is multiplied by the animated opacity,
/// so the layer fades with the open/close transition and with live drags.
pub fn backdrop(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: color.a * alpha.clamp(0.0, 1.0),
            ..color
        })),
        ..Default::default()
    }
}

/// Transparent container carrying the header row.
#[must_use]
pub fn header_container(_theme: &Theme) -> container::Style {
    container::Style::default()
}

/// Chrome-free button for the default close glyph.
pub fn close_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        ..Default::default()
    }
}

/// White glyph text that fades with the overlay.
pub fn close_glyph(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(Color {
            a: alpha.clamp(0.0, 1.0),
            ..WHITE
        }),
    }
}
