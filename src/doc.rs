//! Document model: canvas objects and the in-memory store that owns them.
//!
//! The store stands in for the host's object list. The selection engine only
//! reads from it; creation and deletion come from the context menu or from the
//! host via [`crate::engine::EngineCore`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{Point, Rect, Size};

/// Unique identifier for a canvas object.
pub type ObjectId = Uuid;

/// An object placed on the canvas, positioned in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasObject {
    /// Unique identifier for this object.
    pub id: ObjectId,
    /// Bounding box in world coordinates.
    pub bounds: Rect,
    /// Fill color as a CSS color string.
    pub color: String,
    /// Display name.
    pub name: String,
}

/// In-memory store of canvas objects, iterated in insertion order.
#[derive(Debug, Default)]
pub struct ObjectStore {
    objects: HashMap<ObjectId, CanvasObject>,
    order: Vec<ObjectId>,
    created: u64,
}

impl ObjectStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new object at `origin` with a fresh id and return it.
    pub fn create(&mut self, origin: Point, size: Size, color: &str) -> CanvasObject {
        self.created += 1;
        let obj = CanvasObject {
            id: Uuid::new_v4(),
            bounds: Rect::from_origin_size(origin, size),
            color: color.to_string(),
            name: format!("Object {}", self.created),
        };
        self.insert(obj.clone());
        tracing::debug!(id = %obj.id, x = origin.x, y = origin.y, "object created");
        obj
    }

    /// Insert or replace an object. Replacing keeps its original position in
    /// the iteration order.
    pub fn insert(&mut self, obj: CanvasObject) {
        if self.objects.insert(obj.id, obj.clone()).is_none() {
            self.order.push(obj.id);
        }
    }

    /// Remove an object by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<CanvasObject> {
        let removed = self.objects.remove(id)?;
        self.order.retain(|o| o != id);
        tracing::debug!(%id, "object removed");
        Some(removed)
    }

    /// Return a reference to an object by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&CanvasObject> {
        self.objects.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Replace all objects with a full snapshot.
    pub fn load_snapshot(&mut self, objects: Vec<CanvasObject>) {
        self.objects.clear();
        self.order.clear();
        for obj in objects {
            self.insert(obj);
        }
    }

    /// All objects in insertion order (bottom-most first).
    pub fn iter(&self) -> impl Iterator<Item = &CanvasObject> {
        self.order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Number of objects currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
