// SPDX-License-Identifier: MPL-2.0
//! Demo gallery application driving the lightbox component.
//!
//! The gallery renders a fixed grid of generated swatch images; pressing a
//! tile opens the overlay from the tile's on-screen rectangle. The app
//! owns the reference wiring described in the component docs: raw events
//! and ticks are routed in through subscriptions, and lifecycle effects
//! are handled in the update loop.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::lightbox::{self, OriginRect};
use iced::widget::image;
use iced::{Color, Element, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use tracing::{debug, warn};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;

/// Tiles per gallery row.
const GALLERY_COLUMNS: usize = 3;

/// Swatch bitmaps are rendered at 2x the tile size so the expanded
/// presentation stays crisp.
const SWATCH_SCALE: u32 = 2;

/// A gallery entry: a name and its generated bitmap.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub name: String,
    pub handle: image::Handle,
}

/// Root application state for the demo.
pub struct App {
    config_dir: Option<PathBuf>,
    config: config::Config,
    lightbox: lightbox::State,
    thumbnails: Vec<Thumbnail>,
    open_index: Option<usize>,
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn swatch_handle(color: Color, width: u32, height: u32) -> image::Handle {
    let rgb = [
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
    ];
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }
    image::Handle::from_rgba(width, height, pixels)
}

fn build_thumbnails() -> Vec<Thumbnail> {
    let swatches = [
        ("Coral", palette::SWATCH_CORAL),
        ("Ocean", palette::SWATCH_OCEAN),
        ("Moss", palette::SWATCH_MOSS),
        ("Sand", palette::SWATCH_SAND),
        ("Plum", palette::SWATCH_PLUM),
        ("Slate", palette::SWATCH_SLATE),
    ];

    let width = sizing::THUMBNAIL_WIDTH as u32 * SWATCH_SCALE;
    let height = sizing::THUMBNAIL_HEIGHT as u32 * SWATCH_SCALE;
    swatches
        .into_iter()
        .map(|(name, color)| Thumbnail {
            name: name.to_string(),
            handle: swatch_handle(color, width, height),
        })
        .collect()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        let mut lightbox = lightbox::State::new(config.overlay_options());
        lightbox.set_window_size(Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        ));

        Self {
            config_dir: None,
            config,
            lightbox,
            thumbnails: build_thumbnails(),
            open_index: None,
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load(config_dir.as_deref());
        if let Some(warning) = config_warning {
            warn!(warning, "falling back to default settings");
        }

        let mut app = App {
            config_dir,
            ..Self::default()
        };
        app.lightbox = lightbox::State::new(config.overlay_options());
        app.lightbox.set_window_size(Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        ));
        app.config = config;

        // Materialize a fresh settings file so the knobs are discoverable,
        // leaving any existing file untouched.
        let missing = config::default_config_path(app.config_dir.as_deref())
            .is_some_and(|path| !path.exists());
        if missing {
            if let Err(error) = config::save(&app.config, app.config_dir.as_deref()) {
                warn!(%error, "failed to write settings file");
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.open_index.and_then(|i| self.thumbnails.get(i)) {
            Some(thumbnail) => format!("{} - IcedLightbox", thumbnail.name),
            None => "IcedLightbox".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.lightbox.is_visible()),
            subscription::create_tick_subscription(self.lightbox.needs_tick()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailPressed(index) => {
                // Ignore presses leaking through while the overlay is up.
                if self.open_index.is_none() && index < self.thumbnails.len() {
                    self.open_index = Some(index);
                    let origin = Self::thumbnail_origin(index);
                    debug!(index, ?origin, "opening lightbox");
                    self.lightbox
                        .handle(lightbox::Message::Open { origin });
                }
                Task::none()
            }
            Message::Lightbox(lightbox_message) => {
                match self.lightbox.handle(lightbox_message) {
                    lightbox::Effect::Opened => debug!("lightbox opened"),
                    lightbox::Effect::WillClose => debug!("lightbox will close"),
                    lightbox::Effect::Closed => {
                        debug!("lightbox closed");
                        self.open_index = None;
                    }
                    lightbox::Effect::None => {}
                }
                Task::none()
            }
        }
    }

    /// Screen rectangle of a gallery tile. Mirrors the layout arithmetic
    /// of `view::gallery_grid`; keep the two in sync.
    fn thumbnail_origin(index: usize) -> OriginRect {
        let column = (index % GALLERY_COLUMNS) as f32;
        let row = (index / GALLERY_COLUMNS) as f32;

        OriginRect {
            x: spacing::LG + column * (sizing::THUMBNAIL_WIDTH + spacing::MD),
            y: spacing::LG + row * (sizing::THUMBNAIL_HEIGHT + spacing::MD),
            width: sizing::THUMBNAIL_WIDTH,
            height: sizing::THUMBNAIL_HEIGHT,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            thumbnails: &self.thumbnails,
            lightbox: &self.lightbox,
            open_index: self.open_index,
        })
    }
}
