#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn camera_with_viewport(width: f64, height: f64) -> Camera {
    let mut cam = Camera::default();
    cam.set_viewport(Size::new(width, height));
    cam
}

// =============================================================
// Transform
// =============================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::default();
    assert_eq!(t.pan, Point::new(0.0, 0.0));
    assert_eq!(t.zoom, 1.0);
}

#[test]
fn to_world_identity() {
    let t = Transform::default();
    assert!(point_approx_eq(t.to_world(Point::new(50.0, 75.0)), Point::new(50.0, 75.0)));
}

#[test]
fn to_world_with_zoom() {
    let t = Transform { pan: Point::new(0.0, 0.0), zoom: 4.0 };
    let world = t.to_world(Point::new(40.0, 80.0));
    assert!(point_approx_eq(world, Point::new(10.0, 20.0)));
}

#[test]
fn to_world_with_pan() {
    let t = Transform { pan: Point::new(100.0, 50.0), zoom: 1.0 };
    assert!(point_approx_eq(t.to_world(Point::new(100.0, 50.0)), Point::new(0.0, 0.0)));
}

#[test]
fn to_world_with_pan_and_zoom() {
    let t = Transform { pan: Point::new(50.0, 30.0), zoom: 2.0 };
    let world = t.to_world(Point::new(0.0, 0.0));
    assert!(point_approx_eq(world, Point::new(-25.0, -15.0)));
}

#[test]
fn to_screen_with_pan_and_zoom() {
    let t = Transform { pan: Point::new(20.0, 10.0), zoom: 2.0 };
    let screen = t.to_screen(Point::new(5.0, 5.0));
    assert!(point_approx_eq(screen, Point::new(30.0, 20.0)));
}

#[test]
fn round_trip_screen_world_screen() {
    let t = Transform { pan: Point::new(-123.25, 987.5), zoom: 0.37 };
    for p in [Point::new(0.0, 0.0), Point::new(1920.0, 1080.0), Point::new(-5.5, 3.25)] {
        assert!(point_approx_eq(t.to_screen(t.to_world(p)), p));
        assert!(point_approx_eq(t.to_world(t.to_screen(p)), p));
    }
}

#[test]
fn rect_to_world_converts_both_corners() {
    let t = Transform { pan: Point::new(10.0, 10.0), zoom: 2.0 };
    let screen = Rect::try_new(10.0, 10.0, 100.0, 50.0).unwrap();
    let world = t.rect_to_world(&screen);
    assert!(point_approx_eq(world.top_left(), Point::new(0.0, 0.0)));
    assert!(approx_eq(world.width(), 50.0));
    assert!(approx_eq(world.height(), 25.0));
}

#[test]
fn rect_to_screen_scales_extents() {
    let t = Transform { pan: Point::new(5.0, 0.0), zoom: 3.0 };
    let world = Rect::try_new(1.0, 1.0, 10.0, 20.0).unwrap();
    let screen = t.rect_to_screen(&world);
    assert!(point_approx_eq(screen.top_left(), Point::new(8.0, 3.0)));
    assert!(approx_eq(screen.width(), 30.0));
    assert!(approx_eq(screen.height(), 60.0));
}

// =============================================================
// Camera defaults
// =============================================================

#[test]
fn camera_default_pos_is_zero() {
    let cam = Camera::default();
    assert_eq!(cam.pos(), Point::new(0.0, 0.0));
}

#[test]
fn camera_default_zoom_is_one() {
    assert_eq!(Camera::default().zoom(), 1.0);
}

#[test]
fn camera_debug_format() {
    let s = format!("{:?}", Camera::default());
    assert!(s.contains("Camera"));
    assert!(s.contains("observers"));
}

// =============================================================
// pan / set_pos
// =============================================================

#[test]
fn pan_moves_by_delta() {
    let mut cam = camera_with_viewport(1000.0, 800.0);
    cam.pan(30.0, 40.0);
    cam.pan(5.0, -10.0);
    assert_eq!(cam.pos(), Point::new(35.0, 30.0));
}

#[test]
fn pan_far_left_saturates_at_lower_bound() {
    let mut cam = camera_with_viewport(1000.0, 800.0);
    cam.pan(-1e9, 0.0);
    assert_eq!(cam.pos().x, -200.0);
    cam.pan(-10.0, 0.0);
    assert_eq!(cam.pos().x, -200.0);
}

#[test]
fn set_pos_is_clamped() {
    let mut cam = camera_with_viewport(1000.0, 800.0);
    cam.set_pos(1e12, -1e12);
    assert_eq!(cam.pos(), Point::new(199_200.0, -200.0));
}

#[test]
fn set_pos_inside_bounds_is_exact() {
    let mut cam = camera_with_viewport(1000.0, 800.0);
    cam.set_pos(123.0, 456.0);
    assert_eq!(cam.pos(), Point::new(123.0, 456.0));
}

#[test]
fn non_finite_pan_is_ignored() {
    let mut cam = camera_with_viewport(1000.0, 800.0);
    cam.set_pos(10.0, 10.0);
    cam.pan(f64::NAN, 1.0);
    cam.set_pos(f64::INFINITY, 0.0);
    assert_eq!(cam.pos(), Point::new(10.0, 10.0));
}

// =============================================================
// zoom_around_point
// =============================================================

#[test]
fn zoom_around_point_keeps_anchor_fixed() {
    let mut cam = camera_with_viewport(1280.0, 720.0);
    cam.set_pos(300.0, 200.0);
    let anchor = Point::new(640.0, 360.0);
    let before = cam.to_world(anchor);
    cam.zoom_around_point(-20.0, anchor.x, anchor.y);
    assert!(cam.zoom() > 1.0);
    assert!(point_approx_eq(cam.to_world(anchor), before));
}

#[test]
fn zoom_around_point_zero_delta_keeps_position() {
    let mut cam = camera_with_viewport(1280.0, 720.0);
    cam.set_pos(300.0, 200.0);
    cam.zoom_around_point(0.0, 640.0, 360.0);
    assert_eq!(cam.zoom(), 1.0);
    assert!(point_approx_eq(cam.pos(), Point::new(300.0, 200.0)));
}

#[test]
fn zoom_never_leaves_limits() {
    let mut cam = camera_with_viewport(1000.0, 1000.0);
    for _ in 0..500 {
        cam.zoom_around_point(-100.0, 500.0, 500.0);
    }
    assert_eq!(cam.zoom(), 256.0);
    for _ in 0..500 {
        cam.zoom_around_point(100.0, 500.0, 500.0);
    }
    assert_eq!(cam.zoom(), 0.02);
}

#[test]
fn zoom_result_pan_is_clamped_for_new_zoom() {
    let mut cam = camera_with_viewport(1000.0, 1000.0);
    // Zooming in around the far bottom-right pushes the pan hard negative.
    for _ in 0..50 {
        cam.zoom_around_point(-100.0, 1000.0, 1000.0);
    }
    let lower = -200.0 * cam.zoom();
    assert!(cam.pos().x >= lower);
    assert!(cam.pos().y >= lower);
}

#[test]
fn non_finite_zoom_input_is_ignored() {
    let mut cam = camera_with_viewport(1000.0, 1000.0);
    cam.zoom_around_point(f64::NAN, 10.0, 10.0);
    assert_eq!(cam.zoom(), 1.0);
}

// =============================================================
// set_viewport
// =============================================================

#[test]
fn shrinking_canvas_room_reclamps_pan() {
    let mut cam = camera_with_viewport(1000.0, 1000.0);
    cam.set_pos(199_000.0, 0.0);
    cam.set_viewport(Size::new(5000.0, 1000.0));
    assert_eq!(cam.pos().x, 200_000.0 - 5000.0 + 200.0);
}

#[test]
fn invalid_viewport_is_ignored() {
    let mut cam = camera_with_viewport(1000.0, 800.0);
    cam.set_viewport(Size::new(-1.0, 10.0));
    assert_eq!(cam.viewport(), Size::new(1000.0, 800.0));
}

#[test]
fn visible_world_at_identity_matches_viewport() {
    let cam = camera_with_viewport(800.0, 600.0);
    let visible = cam.visible_world();
    assert!(point_approx_eq(visible.top_left(), Point::new(0.0, 0.0)));
    assert!(approx_eq(visible.width(), 800.0));
    assert!(approx_eq(visible.height(), 600.0));
}

// =============================================================
// Observers
// =============================================================

#[test]
fn observer_fires_after_each_mutation() {
    let mut cam = camera_with_viewport(1000.0, 1000.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    cam.subscribe(move |t| sink.borrow_mut().push(t));

    cam.pan(10.0, 0.0);
    cam.set_pos(50.0, 50.0);
    cam.zoom_around_point(-10.0, 100.0, 100.0);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].pan, Point::new(10.0, 0.0));
    assert_eq!(seen[1].pan, Point::new(50.0, 50.0));
    assert_eq!(seen[2], cam.transform());
}

#[test]
fn observer_sees_committed_clamped_state() {
    let mut cam = camera_with_viewport(1000.0, 1000.0);
    let last = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&last);
    cam.subscribe(move |t| *sink.borrow_mut() = Some(t));
    cam.pan(-1e9, 0.0);
    assert_eq!(last.borrow().map(|t| t.pan.x), Some(-200.0));
}

#[test]
fn rejected_input_does_not_notify() {
    let mut cam = Camera::default();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    cam.subscribe(move |_| *sink.borrow_mut() += 1);
    cam.pan(f64::NAN, 0.0);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut cam = Camera::default();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = cam.subscribe(move |_| *sink.borrow_mut() += 1);
    cam.pan(1.0, 1.0);
    assert!(cam.unsubscribe(id));
    cam.pan(1.0, 1.0);
    assert_eq!(*count.borrow(), 1);
    assert!(!cam.unsubscribe(id));
}

#[test]
fn observer_ids_are_distinct() {
    let mut cam = Camera::default();
    let a = cam.subscribe(|_| {});
    let b = cam.subscribe(|_| {});
    assert_ne!(a, b);
}
