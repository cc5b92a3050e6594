// SPDX-License-Identifier: MPL-2.0
//! Drag-to-dismiss gesture recognizer.
//!
//! Tracks the raw drag delta while the recognizer owns the gesture, and
//! classifies the release against the dismissal threshold. Whether the
//! recognizer may claim a gesture at all is the component's decision (see
//! `State::can_claim_gesture`); this type only does the arithmetic.

use iced::Point;

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// The drag passed the threshold; dismiss with the final offset.
    Dismiss { dx: f32, dy: f32 },
    /// The drag stayed under the threshold; spring back from `dy`.
    SnapBack { dy: f32 },
}

/// State of the pan gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanRecognizer {
    active: bool,
    start: Option<Point>,
    dx: f32,
    dy: f32,
}

impl PanRecognizer {
    /// Grants the gesture to this recognizer, anchored at `origin`.
    pub fn grant(&mut self, origin: Point) {
        self.active = true;
        self.start = Some(origin);
        self.dx = 0.0;
        self.dy = 0.0;
    }

    /// Updates the drag delta from the current cursor position.
    /// Ignored while the gesture is not owned.
    pub fn update(&mut self, position: Point) {
        if !self.active {
            return;
        }
        if let Some(start) = self.start {
            self.dx = position.x - start.x;
            self.dy = position.y - start.y;
        }
    }

    /// Releases the gesture and classifies it against `threshold`.
    /// Only the vertical distance counts, matching the swipe-down (or up)
    /// dismissal gesture.
    ///
    /// Returns `None` when no gesture was in progress.
    pub fn release(&mut self, threshold: f32) -> Option<Release> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.start = None;

        let release = if self.dy.abs() > threshold {
            Release::Dismiss {
                dx: self.dx,
                dy: self.dy,
            }
        } else {
            Release::SnapBack { dy: self.dy }
        };
        self.dx = 0.0;
        self.dy = 0.0;
        Some(release)
    }

    /// Abandons the gesture without classifying it.
    pub fn cancel(&mut self) {
        self.active = false;
        self.start = None;
        self.dx = 0.0;
        self.dy = 0.0;
    }

    /// True while this recognizer owns the gesture.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Live vertical drag delta.
    #[must_use]
    pub fn dy(&self) -> f32 {
        self.dy
    }
}
