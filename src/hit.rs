#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{CanvasObject, ObjectId, ObjectStore};
use crate::geom::{Point, Rect};

/// Ids of every object whose bounds strictly overlap `world_rect`, in store order.
///
/// Edges that only touch do not count. A zero-size object still counts when it
/// lies strictly inside `world_rect`.
#[must_use]
pub fn objects_in_rect(world_rect: &Rect, store: &ObjectStore) -> Vec<ObjectId> {
    store
        .iter()
        .filter(|obj| obj.bounds.overlaps(world_rect))
        .map(|obj| obj.id)
        .collect()
}

/// The top-most object containing `world_pt`, if any.
#[must_use]
pub fn object_at<'a>(world_pt: Point, store: &'a ObjectStore) -> Option<&'a CanvasObject> {
    store
        .iter()
        .filter(|obj| obj.bounds.contains(world_pt))
        .last()
}
