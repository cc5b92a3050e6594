// SPDX-License-Identifier: MPL-2.0
//! View composition for the demo gallery.

use super::{Message, Thumbnail, GALLERY_COLUMNS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::lightbox;
use crate::ui::styles;
use iced::widget::{button, column, container, image, row, stack, text, Space};
use iced::{ContentFit, Element, Length};

/// Everything the view needs from the application state.
pub struct ViewContext<'a> {
    pub thumbnails: &'a [Thumbnail],
    pub lightbox: &'a lightbox::State,
    pub open_index: Option<usize>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = gallery_grid(ctx.thumbnails);

    let Some(open) = ctx
        .open_index
        .filter(|_| ctx.lightbox.is_visible())
        .and_then(|index| ctx.thumbnails.get(index))
    else {
        return gallery;
    };

    let content = image(open.handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain)
        .into();

    let alpha = ctx.lightbox.frame().opacity;
    let overlay = lightbox::view_with_header(ctx.lightbox, content, |close| {
        caption_header(&open.name, alpha, close)
    })
    .map(Message::Lightbox);

    stack![gallery, overlay].into()
}

/// Custom header demonstrating the renderer hook: the image caption on the
/// left, the close glyph on the right.
fn caption_header<'a>(
    name: &'a str,
    alpha: f32,
    close: lightbox::Message,
) -> Element<'a, lightbox::Message> {
    let caption = text(name)
        .size(typography::TITLE_MD)
        .style(styles::overlay::close_glyph(alpha));
    let glyph = text("\u{00d7}")
        .size(typography::CLOSE_GLYPH)
        .style(styles::overlay::close_glyph(alpha))
        .center();

    row![
        caption,
        Space::new().width(Length::Fill).height(Length::Shrink),
        button(glyph)
            .width(sizing::CLOSE_BUTTON)
            .style(styles::overlay::close_button)
            .on_press(close),
    ]
    .padding(spacing::XS)
    .align_y(iced::Alignment::Center)
    .into()
}

/// Fixed grid of thumbnail tiles. `App::thumbnail_origin` mirrors this
/// layout arithmetic; keep the two in sync.
fn gallery_grid(thumbnails: &[Thumbnail]) -> Element<'_, Message> {
    let mut grid = column![].spacing(spacing::MD);

    for (row_index, chunk) in thumbnails.chunks(GALLERY_COLUMNS).enumerate() {
        let mut tiles = row![].spacing(spacing::MD);
        for (column_index, thumbnail) in chunk.iter().enumerate() {
            let index = row_index * GALLERY_COLUMNS + column_index;
            tiles = tiles.push(
                button(
                    image(thumbnail.handle.clone())
                        .width(sizing::THUMBNAIL_WIDTH)
                        .height(sizing::THUMBNAIL_HEIGHT),
                )
                .padding(0)
                .style(styles::gallery::thumbnail)
                .on_press(Message::ThumbnailPressed(index)),
            );
        }
        grid = grid.push(tiles);
    }

    container(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::gallery::page)
        .into()
}
