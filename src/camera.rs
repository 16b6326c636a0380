//! Pan/zoom camera for the infinite canvas.
//!
//! The camera owns the only copy of the view transform. Outside code reads it
//! through [`Camera::transform`] (or the [`Viewport`] trait) and changes it only
//! through the mutating operations here, each of which commits one clamped
//! transition and then notifies observers.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::fmt;

use crate::clamp::clamp_pan;
use crate::config::CameraLimits;
use crate::geom::{Point, Rect, Size};
use crate::zoom;

/// Snapshot of the view transform.
///
/// `pan` is the screen-space offset (CSS pixels) added to scaled world
/// coordinates; `zoom` multiplies world distances into screen distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub pan: Point,
    pub zoom: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self { pan: Point::new(0.0, 0.0), zoom: 1.0 }
    }
}

impl Transform {
    /// Convert a screen-space point to world coordinates.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        (screen - self.pan).scale(1.0 / self.zoom)
    }

    /// Convert a world-space point to screen coordinates.
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        world.scale(self.zoom) + self.pan
    }
}

/// Coordinate conversion capability shared by anything that projects the canvas.
pub trait Viewport {
    fn to_world(&self, screen: Point) -> Point;

    fn to_screen(&self, world: Point) -> Point;

    /// Convert a screen-space rectangle to world space via its two corners.
    fn rect_to_world(&self, screen: &Rect) -> Rect {
        Rect::from_corners(self.to_world(screen.top_left()), self.to_world(screen.bottom_right()))
    }

    /// Convert a world-space rectangle to screen space via its two corners.
    fn rect_to_screen(&self, world: &Rect) -> Rect {
        Rect::from_corners(self.to_screen(world.top_left()), self.to_screen(world.bottom_right()))
    }
}

impl Viewport for Transform {
    fn to_world(&self, screen: Point) -> Point {
        Transform::to_world(self, screen)
    }

    fn to_screen(&self, world: Point) -> Point {
        Transform::to_screen(self, world)
    }
}

/// Handle returned by [`Camera::subscribe`]; pass it to [`Camera::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(Transform)>;

/// Camera state for pan/zoom on the infinite canvas.
pub struct Camera {
    transform: Transform,
    viewport: Size,
    limits: CameraLimits,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("transform", &self.transform)
            .field("viewport", &self.viewport)
            .field("limits", &self.limits)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraLimits::default())
    }
}

impl Camera {
    /// A camera at `pan = (0, 0)`, `zoom = 1` with an empty viewport.
    #[must_use]
    pub fn new(limits: CameraLimits) -> Self {
        let mut camera = Self {
            transform: Transform::default(),
            viewport: Size::default(),
            limits,
            observers: Vec::new(),
            next_observer: 0,
        };
        camera.transform.zoom = camera.transform.zoom.clamp(limits.zoom_min, limits.zoom_max);
        camera.transform.pan = clamp_pan(camera.transform.pan, camera.transform.zoom, camera.viewport, &limits);
        camera
    }

    // --- Queries ---

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Current pan offset in screen pixels.
    #[must_use]
    pub fn pos(&self) -> Point {
        self.transform.pan
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn limits(&self) -> &CameraLimits {
        &self.limits
    }

    /// The visible part of the world, as a world-space rectangle.
    #[must_use]
    pub fn visible_world(&self) -> Rect {
        let screen = Rect::from_origin_size(Point::new(0.0, 0.0), self.viewport);
        self.rect_to_world(&screen)
    }

    // --- Mutations ---

    /// Move the camera by a screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        if !(dx.is_finite() && dy.is_finite()) {
            tracing::warn!(dx, dy, "ignoring non-finite pan delta");
            return;
        }
        let pan = self.transform.pan + Point::new(dx, dy);
        self.commit(Transform { pan, ..self.transform });
    }

    /// Place the camera at an absolute screen-space pan offset.
    pub fn set_pos(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            tracing::warn!(x, y, "ignoring non-finite camera position");
            return;
        }
        self.commit(Transform { pan: Point::new(x, y), ..self.transform });
    }

    /// Zoom by a wheel step while keeping the world point under
    /// `(screen_x, screen_y)` fixed.
    pub fn zoom_around_point(&mut self, delta_y: f64, screen_x: f64, screen_y: f64) {
        if !(delta_y.is_finite() && screen_x.is_finite() && screen_y.is_finite()) {
            tracing::warn!(delta_y, screen_x, screen_y, "ignoring non-finite zoom input");
            return;
        }
        let next = zoom::zoom_around_point(self.transform, delta_y, Point::new(screen_x, screen_y), &self.limits);
        self.commit(next);
    }

    /// Update the viewport size and re-clamp the pan for it.
    pub fn set_viewport(&mut self, viewport: Size) {
        if !(viewport.width.is_finite() && viewport.height.is_finite()) || viewport.width < 0.0 || viewport.height < 0.0 {
            tracing::warn!(?viewport, "ignoring invalid viewport size");
            return;
        }
        self.viewport = viewport;
        self.commit(self.transform);
    }

    // --- Observers ---

    /// Register a callback fired with the new transform after every committed mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(Transform) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Clamp and store `next`, then notify observers.
    fn commit(&mut self, next: Transform) {
        let zoom = next.zoom.clamp(self.limits.zoom_min, self.limits.zoom_max);
        let pan = clamp_pan(next.pan, zoom, self.viewport, &self.limits);
        self.transform = Transform { pan, zoom };
        tracing::debug!(pan_x = pan.x, pan_y = pan.y, zoom, "camera committed");

        let transform = self.transform;
        for (_, observer) in &mut self.observers {
            observer(transform);
        }
    }
}

impl Viewport for Camera {
    fn to_world(&self, screen: Point) -> Point {
        self.transform.to_world(screen)
    }

    fn to_screen(&self, world: Point) -> Point {
        self.transform.to_screen(world)
    }
}
