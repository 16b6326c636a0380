//! Zoom-around-point math.
//!
//! Zooming keeps the world point under a screen anchor fixed: with
//! `w = (anchor - pan) / zoom`, the new pan is `anchor - w * new_zoom`, so
//! converting the anchor back to world space with the new transform yields the
//! same `w`.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::camera::Transform;
use crate::config::CameraLimits;
use crate::geom::Point;

/// Zoom factor after a wheel step of `delta_y`.
///
/// Negative deltas (pinch-out) zoom in. The step is proportional to half the
/// current zoom so the gesture feels uniform across magnitudes. The result is
/// clamped into `[limits.zoom_min, limits.zoom_max]`.
#[must_use]
pub fn next_zoom(curr_zoom: f64, delta_y: f64, limits: &CameraLimits) -> f64 {
    let delta_y = match limits.wheel_delta_limit {
        Some(limit) => delta_y.clamp(-limit, limit),
        None => delta_y,
    };
    let zoom = curr_zoom - delta_y * limits.zoom_intensity * (curr_zoom / 2.0);
    zoom.clamp(limits.zoom_min, limits.zoom_max)
}

/// Pan that keeps the world point under `anchor` fixed when zoom changes from
/// `curr_zoom` to `new_zoom`.
#[must_use]
pub fn pan_for_zoom(curr_zoom: f64, new_zoom: f64, anchor: Point, pan: Point) -> Point {
    let world_under_anchor = (anchor - pan).scale(1.0 / curr_zoom);
    // How far the anchor would drift on screen if only the zoom changed.
    let drift = world_under_anchor.scale(new_zoom) - world_under_anchor.scale(curr_zoom);
    pan - drift
}

/// New transform after a wheel step of `delta_y` anchored at `anchor`.
///
/// The returned pan is not clamped; [`crate::camera::Camera::zoom_around_point`]
/// applies the clamp policy with the new zoom.
#[must_use]
pub fn zoom_around_point(curr: Transform, delta_y: f64, anchor: Point, limits: &CameraLimits) -> Transform {
    let zoom = next_zoom(curr.zoom, delta_y, limits);
    let pan = pan_for_zoom(curr.zoom, zoom, anchor, curr.pan);
    Transform { pan, zoom }
}
