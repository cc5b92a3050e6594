// SPDX-License-Identifier: MPL-2.0
//! Built-in defaults for the demo shell configuration.

/// Directory name under the platform config dir.
pub const APP_NAME: &str = "IcedLightbox";

/// Config file name inside the app config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Backdrop fill when none is configured.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000";

/// Drag-to-dismiss is on unless the config disables it.
pub const DEFAULT_SWIPE_TO_DISMISS: bool = true;

/// Vertical distance in logical pixels a drag must exceed to dismiss.
pub const DEFAULT_DRAG_DISMISS_THRESHOLD: f32 = 150.0;

/// Spring stiffness when none is configured.
pub const DEFAULT_STIFFNESS: f32 = 180.0;

/// Spring damping when none is configured.
pub const DEFAULT_DAMPING: f32 = 22.0;
