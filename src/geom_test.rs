#![allow(clippy::float_cmp)]

use super::*;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::try_new(x, y, w, h).unwrap()
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_add() {
    assert_eq!(Point::new(1.0, 2.0) + Point::new(10.0, -5.0), Point::new(11.0, -3.0));
}

#[test]
fn point_subtract() {
    assert_eq!(Point::new(1.0, 2.0) - Point::new(10.0, -5.0), Point::new(-9.0, 7.0));
}

#[test]
fn point_scale() {
    assert_eq!(Point::new(3.0, -4.0).scale(0.5), Point::new(1.5, -2.0));
}

#[test]
fn point_neg() {
    assert_eq!(-Point::new(3.0, -4.0), Point::new(-3.0, 4.0));
}

#[test]
fn point_is_finite() {
    assert!(Point::new(1.0, 2.0).is_finite());
    assert!(!Point::new(f64::NAN, 2.0).is_finite());
    assert!(!Point::new(1.0, f64::INFINITY).is_finite());
}

// =============================================================
// Rect construction
// =============================================================

#[test]
fn rect_try_new_accepts_valid() {
    let r = rect(1.0, 2.0, 3.0, 4.0);
    assert_eq!(r.x(), 1.0);
    assert_eq!(r.y(), 2.0);
    assert_eq!(r.width(), 3.0);
    assert_eq!(r.height(), 4.0);
}

#[test]
fn rect_try_new_accepts_zero_size() {
    assert!(Rect::try_new(0.0, 0.0, 0.0, 0.0).is_ok());
}

#[test]
fn rect_try_new_rejects_negative_width() {
    let err = Rect::try_new(0.0, 0.0, -1.0, 5.0).unwrap_err();
    assert!(matches!(err, CanvasError::InvalidArgument(_)));
}

#[test]
fn rect_try_new_rejects_negative_height() {
    assert!(Rect::try_new(0.0, 0.0, 1.0, -5.0).is_err());
}

#[test]
fn rect_try_new_rejects_nan() {
    let err = Rect::try_new(f64::NAN, 0.0, 1.0, 1.0).unwrap_err();
    assert!(err.to_string().contains("finite"));
}

#[test]
fn rect_from_corners_down_right() {
    let r = Rect::from_corners(Point::new(10.0, 20.0), Point::new(40.0, 60.0));
    assert_eq!(r, rect(10.0, 20.0, 30.0, 40.0));
}

#[test]
fn rect_from_corners_up_left() {
    let r = Rect::from_corners(Point::new(40.0, 60.0), Point::new(10.0, 20.0));
    assert_eq!(r, rect(10.0, 20.0, 30.0, 40.0));
}

#[test]
fn rect_from_corners_up_right() {
    let r = Rect::from_corners(Point::new(10.0, 60.0), Point::new(40.0, 20.0));
    assert_eq!(r, rect(10.0, 20.0, 30.0, 40.0));
}

#[test]
fn rect_from_corners_down_left() {
    let r = Rect::from_corners(Point::new(40.0, 20.0), Point::new(10.0, 60.0));
    assert_eq!(r, rect(10.0, 20.0, 30.0, 40.0));
}

#[test]
fn rect_from_corners_same_point_has_no_extent() {
    let r = Rect::from_corners(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
    assert_eq!(r.width(), 0.0);
    assert_eq!(r.height(), 0.0);
}

#[test]
fn rect_from_origin_size_normalizes_negative_size() {
    let r = Rect::from_origin_size(Point::new(10.0, 10.0), Size::new(-4.0, 6.0));
    assert_eq!(r, rect(6.0, 10.0, 4.0, 6.0));
}

#[test]
fn rect_edges() {
    let r = rect(1.0, 2.0, 3.0, 4.0);
    assert_eq!(r.left(), 1.0);
    assert_eq!(r.top(), 2.0);
    assert_eq!(r.right(), 4.0);
    assert_eq!(r.bottom(), 6.0);
    assert_eq!(r.top_left(), Point::new(1.0, 2.0));
    assert_eq!(r.bottom_right(), Point::new(4.0, 6.0));
}

// =============================================================
// Rect queries
// =============================================================

#[test]
fn rect_contains_interior_and_boundary() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
}

#[test]
fn rect_overlaps_partial() {
    let a = rect(0.0, 0.0, 50.0, 50.0);
    let b = rect(10.0, 10.0, 50.0, 50.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn rect_overlaps_containment() {
    let outer = rect(0.0, 0.0, 100.0, 100.0);
    let inner = rect(40.0, 40.0, 10.0, 10.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn rect_touching_edges_do_not_overlap() {
    let a = rect(0.0, 0.0, 50.0, 50.0);
    let right = rect(50.0, 0.0, 50.0, 50.0);
    let below = rect(0.0, 50.0, 50.0, 50.0);
    let corner = rect(50.0, 50.0, 10.0, 10.0);
    assert!(!a.overlaps(&right));
    assert!(!a.overlaps(&below));
    assert!(!a.overlaps(&corner));
}

#[test]
fn rect_disjoint_do_not_overlap() {
    let a = rect(0.0, 0.0, 50.0, 50.0);
    let b = rect(100.0, 100.0, 50.0, 50.0);
    assert!(!a.overlaps(&b));
}

#[test]
fn zero_size_rects_never_overlap_each_other() {
    let a = rect(5.0, 5.0, 0.0, 0.0);
    assert!(!a.overlaps(&a));
}

// =============================================================
// Serde
// =============================================================

#[test]
fn rect_deserializes_valid_json() {
    let r: Rect = serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4}"#).unwrap();
    assert_eq!(r, rect(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn rect_deserialize_rejects_negative_extent() {
    let result: Result<Rect, _> = serde_json::from_str(r#"{"x":1,"y":2,"width":-3,"height":4}"#);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("non-negative"));
}

#[test]
fn rect_serializes_all_fields() {
    let json = serde_json::to_value(rect(1.0, 2.0, 3.0, 4.0)).unwrap();
    assert_eq!(json, serde_json::json!({"x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0}));
}
