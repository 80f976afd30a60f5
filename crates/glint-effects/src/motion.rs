//! Pointer- and scroll-driven motion math.
//!
//! These are pure functions; hosts decide how to apply the results.

use glint_core::{Point, Rect};

/// How far through a scrollable page the viewport is, in percent.
///
/// Pages that cannot scroll report 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Perspective tilt applied to a hovered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Rotation about the horizontal axis, in degrees.
    pub rotate_x: f64,
    /// Rotation about the vertical axis, in degrees.
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    /// Untilted, unscaled.
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };
}

const TILT_DAMPING: f64 = 10.0;
const HOVER_SCALE: f64 = 1.05;

/// Tilt for a pointer over `rect`; [`Tilt::REST`] when it is outside.
///
/// The card leans towards the pointer: one degree per ten units of offset
/// from its centre.
pub fn tilt(pointer: Point, rect: Rect) -> Tilt {
    if !rect.contains(pointer) {
        return Tilt::REST;
    }
    let center = rect.center();
    Tilt {
        rotate_x: (pointer.y - center.y) / TILT_DAMPING,
        rotate_y: (center.x - pointer.x) / TILT_DAMPING,
        scale: HOVER_SCALE,
    }
}

const MAGNETIC_PULL: f64 = 0.2;

/// Offset that drags an element towards a pointer hovering over it.
pub fn magnetic_offset(pointer: Point, rect: Rect) -> (f64, f64) {
    if !rect.contains(pointer) {
        return (0.0, 0.0);
    }
    let center = rect.center();
    (
        (pointer.x - center.x) * MAGNETIC_PULL,
        (pointer.y - center.y) * MAGNETIC_PULL,
    )
}
