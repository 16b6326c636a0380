//! Pan clamp policy.
//!
//! Pan is in screen pixels while the world canvas is in world units, so the
//! valid pan range on each axis depends on the zoom:
//!
//! ```text
//! lower = -padding * zoom
//! upper = (canvas * zoom - viewport) + padding * zoom
//! ```
//!
//! When the viewport is larger than the padded canvas the bounds invert
//! (`lower > upper`); the pan is then pinned to their midpoint.

#[cfg(test)]
#[path = "clamp_test.rs"]
mod clamp_test;

use crate::config::CameraLimits;
use crate::geom::{Point, Size};

/// Valid `[lower, upper]` pan range for one axis.
///
/// `lower` may exceed `upper` when the viewport is wider than the padded canvas.
#[must_use]
pub fn axis_bounds(zoom: f64, viewport: f64, canvas: f64, padding: f64) -> (f64, f64) {
    let lower = -padding * zoom;
    let upper = (canvas * zoom - viewport) + padding * zoom;
    (lower, upper)
}

/// Clamp a single pan component.
#[must_use]
pub fn clamp_axis(pan: f64, zoom: f64, viewport: f64, canvas: f64, padding: f64) -> f64 {
    let (lower, upper) = axis_bounds(zoom, viewport, canvas, padding);
    if lower > upper {
        return (lower + upper) * 0.5;
    }
    pan.clamp(lower, upper)
}

/// Clamp a pan offset on both axes for the given zoom and viewport.
#[must_use]
pub fn clamp_pan(pan: Point, zoom: f64, viewport: Size, limits: &CameraLimits) -> Point {
    Point::new(
        clamp_axis(pan.x, zoom, viewport.width, limits.canvas.width, limits.padding),
        clamp_axis(pan.y, zoom, viewport.height, limits.canvas.height, limits.padding),
    )
}
