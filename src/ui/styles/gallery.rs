// SPDX-License-Identifier: MPL-2.0
//! Styles for the demo gallery screen.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Theme};

/// Page background for the gallery.
#[must_use]
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Thumbnail button: flat tile with a subtle lift on hover.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let shadow = match status {
        button::Status::Hovered => shadow::MD,
        _ => shadow::SM,
    };

    button::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        ..Default::default()
    }
}
