// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo gallery.

use crate::ui::lightbox;

/// Top-level messages consumed by `App::update`. Overlay messages are
/// forwarded wholesale, keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery thumbnail was pressed; open the overlay from its tile.
    ThumbnailPressed(usize),
    Lightbox(lightbox::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
