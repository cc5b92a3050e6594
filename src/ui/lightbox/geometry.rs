// SPDX-License-Identifier: MPL-2.0
//! Render geometry for the overlay.
//!
//! The five animated values each range over [0, 1] and are interpolated to
//! pixels (or opacity) here, between the expanded endpoint (full window, or
//! the drag-dismiss target) at 0 and the collapsed origin rectangle at 1.

use iced::{Point, Size};

/// The source thumbnail's screen geometry, used as the collapsed
/// animation endpoint. Supplied by the caller on each open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OriginRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Dismiss endpoint of the expanded state. `{0, 0, 1}` until a
/// drag-dismiss passes the threshold, which rewrites it with the gesture's
/// final offset and opacity fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissTarget {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

impl Default for DismissTarget {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            opacity: 1.0,
        }
    }
}

/// Snapshot of the five animated values at render time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimatedValues {
    pub opacity: f32,
    pub position_x: f32,
    pub position_y: f32,
    pub width: f32,
    pub height: f32,
}

/// Computed per-frame geometry of the content box plus backdrop opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub opacity: f32,
}

impl Frame {
    /// Whether a point lies inside the content box.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Backdrop opacity while the content is panned `dy` pixels from rest:
/// peak opacity at dy = 0, fading linearly to 0 at ±window-height.
#[must_use]
pub fn pan_opacity(dy: f32, window_height: f32) -> f32 {
    if window_height <= 0.0 {
        return 0.0;
    }
    (1.0 - dy.abs() / window_height).clamp(0.0, 1.0)
}

/// Interpolates the animated values into concrete render geometry.
///
/// While a pan is live (`pan_dy` is `Some`), the vertical position follows
/// the drag delta directly and opacity is re-derived from the delta; the
/// animated opacity takes over again once the gesture ends.
#[must_use]
pub fn compute_frame(
    values: AnimatedValues,
    origin: OriginRect,
    target: DismissTarget,
    window: Size,
    pan_dy: Option<f32>,
) -> Frame {
    let x = lerp(target.x, origin.x, values.position_x);
    let y = match pan_dy {
        // The expanded vertical endpoint is the pan's rest position, so a
        // live drag replaces the interpolated coordinate outright.
        Some(dy) => dy,
        None => lerp(target.y, origin.y, values.position_y),
    };
    let opacity = match pan_dy {
        Some(dy) => pan_opacity(dy, window.height),
        None => values.opacity,
    };

    Frame {
        x,
        y,
        width: lerp(window.width, origin.width, values.width),
        height: lerp(window.height, origin.height, values.height),
        opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const WINDOW: Size = Size {
        width: 800.0,
        height: 600.0,
    };

    fn origin() -> OriginRect {
        OriginRect {
            x: 40.0,
            y: 120.0,
            width: 200.0,
            height: 140.0,
        }
    }

    #[test]
    fn expanded_values_fill_the_window() {
        let frame = compute_frame(
            AnimatedValues::default(),
            origin(),
            DismissTarget::default(),
            WINDOW,
            None,
        );

        assert_abs_diff_eq!(frame.x, 0.0);
        assert_abs_diff_eq!(frame.y, 0.0);
        assert_abs_diff_eq!(frame.width, WINDOW.width);
        assert_abs_diff_eq!(frame.height, WINDOW.height);
    }

    #[test]
    fn collapsed_values_match_the_origin() {
        let values = AnimatedValues {
            opacity: 0.0,
            position_x: 1.0,
            position_y: 1.0,
            width: 1.0,
            height: 1.0,
        };
        let frame = compute_frame(values, origin(), DismissTarget::default(), WINDOW, None);

        assert_abs_diff_eq!(frame.x, origin().x);
        assert_abs_diff_eq!(frame.y, origin().y);
        assert_abs_diff_eq!(frame.width, origin().width);
        assert_abs_diff_eq!(frame.height, origin().height);
    }

    #[test]
    fn dismiss_target_becomes_the_expanded_endpoint() {
        let target = DismissTarget {
            x: 30.0,
            y: 250.0,
            opacity: 0.6,
        };
        let frame = compute_frame(AnimatedValues::default(), origin(), target, WINDOW, None);

        assert_abs_diff_eq!(frame.x, 30.0);
        assert_abs_diff_eq!(frame.y, 250.0);
    }

    #[test]
    fn live_pan_overrides_vertical_position_and_opacity() {
        let frame = compute_frame(
            AnimatedValues {
                opacity: 1.0,
                ..AnimatedValues::default()
            },
            origin(),
            DismissTarget::default(),
            WINDOW,
            Some(300.0),
        );

        assert_abs_diff_eq!(frame.y, 300.0);
        assert_abs_diff_eq!(frame.opacity, 0.5);
    }

    #[test]
    fn pan_opacity_peaks_at_rest() {
        assert_abs_diff_eq!(pan_opacity(0.0, WINDOW.height), 1.0);
    }

    #[test]
    fn pan_opacity_fades_to_zero_at_window_height() {
        assert_abs_diff_eq!(pan_opacity(WINDOW.height, WINDOW.height), 0.0);
        assert_abs_diff_eq!(pan_opacity(-WINDOW.height, WINDOW.height), 0.0);
    }

    #[test]
    fn pan_opacity_is_symmetric() {
        assert_abs_diff_eq!(
            pan_opacity(150.0, WINDOW.height),
            pan_opacity(-150.0, WINDOW.height)
        );
    }

    #[test]
    fn pan_opacity_clamps_beyond_window_height() {
        assert_abs_diff_eq!(pan_opacity(2.0 * WINDOW.height, WINDOW.height), 0.0);
    }

    #[test]
    fn frame_contains_checks_bounds() {
        let frame = Frame {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
            opacity: 1.0,
        };
        assert!(frame.contains(Point::new(60.0, 40.0)));
        assert!(frame.contains(Point::new(10.0, 20.0)));
        assert!(!frame.contains(Point::new(5.0, 40.0)));
        assert!(!frame.contains(Point::new(60.0, 80.0)));
    }
}
