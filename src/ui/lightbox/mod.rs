// SPDX-License-Identifier: MPL-2.0
//! Modal image-overlay ("lightbox") component.
//!
//! Animates content from a thumbnail's on-screen rectangle to a
//! full-window presentation, supports dismiss-by-drag, and renders an
//! optional header. The component follows the nested-TEA shape used
//! throughout this crate: a [`State`] updated through [`Message`]s, with
//! lifecycle notifications surfaced as [`Effect`]s.
//!
//! ```text
//! component.rs (state machine + view)
//!     ├── geometry  - origin/target rectangles and interpolation
//!     └── header    - default close-glyph header
//! ```
//!
//! Hosts route raw window/mouse/touch events into the component and run a
//! tick subscription while [`State::needs_tick`] holds; see `app` for the
//! reference wiring.

pub mod component;
pub mod geometry;
pub mod header;

pub use component::{
    view, view_with_header, Effect, Message, Options, Phase, State, DRAG_DISMISS_THRESHOLD,
    TICK_INTERVAL,
};
pub use geometry::{DismissTarget, Frame, OriginRect};
