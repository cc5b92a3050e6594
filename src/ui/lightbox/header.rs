// SPDX-License-Identifier: MPL-2.0
//! Default overlay header: a bare close glyph, top-left.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::lightbox::component::Message;
use crate::ui::styles;
use iced::widget::{button, container, text};
use iced::Element;

/// Builds the fallback header shown when the host supplies no renderer.
/// The glyph fades together with the backdrop.
pub fn default_header<'a>(alpha: f32) -> Element<'a, Message> {
    let glyph = text("\u{00d7}")
        .size(typography::CLOSE_GLYPH)
        .style(styles::overlay::close_glyph(alpha))
        .center();

    container(
        button(glyph)
            .width(sizing::CLOSE_BUTTON)
            .style(styles::overlay::close_button)
            .on_press(Message::Close),
    )
    .padding(spacing::XS)
    .into()
}
