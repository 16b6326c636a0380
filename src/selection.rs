//! Rectangular drag-selection.
//!
//! A drag moves through `Idle -> Dragging -> Idle`. While dragging, the
//! rectangle is kept in screen space so the host can draw it directly; it is
//! converted to world space only when the drag ends and the hit test runs.
//!
//! Browsers do not reliably deliver `pointerup` when the button is released
//! outside the viewport. A move that reports no pressed buttons therefore
//! cancels the drag without selecting anything.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::HashSet;

use crate::camera::Viewport;
use crate::doc::{ObjectId, ObjectStore};
use crate::geom::{Point, Rect};
use crate::hit;
use crate::input::Buttons;

/// Drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Screen-space pointer position at drag start.
        start: Point,
        /// Screen-space pointer position at the latest move.
        current: Point,
        /// Whether the result is added to the existing selection instead of replacing it.
        additive: bool,
    },
}

/// Outcome of feeding a pointer move into the drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// No drag is in progress; nothing changed.
    Ignored,
    /// The drag rectangle changed to this screen-space box.
    Moved(Rect),
    /// Buttons were released without a release event; the drag was dropped.
    Cancelled,
}

/// Drag-selection state machine plus the current selected-id set.
#[derive(Debug, Default)]
pub struct Selection {
    state: DragState,
    selected: HashSet<ObjectId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Drag gesture ---

    /// Start a drag at `screen`, replacing the selection when it ends.
    ///
    /// Returns false (and changes nothing) if a drag is already in progress.
    pub fn begin_drag(&mut self, screen: Point) -> bool {
        self.start(screen, false)
    }

    /// Start a drag whose result is added to the existing selection.
    pub fn begin_additive_drag(&mut self, screen: Point) -> bool {
        self.start(screen, true)
    }

    fn start(&mut self, screen: Point, additive: bool) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging { start: screen, current: screen, additive };
        tracing::trace!(x = screen.x, y = screen.y, additive, "selection drag started");
        true
    }

    /// Track a pointer move. `buttons` is the pressed-button mask reported with
    /// the move; an empty mask cancels the drag.
    pub fn update_drag(&mut self, screen: Point, buttons: Buttons) -> DragUpdate {
        let DragState::Dragging { start, additive, .. } = self.state else {
            return DragUpdate::Ignored;
        };
        if buttons.is_empty() {
            self.cancel();
            return DragUpdate::Cancelled;
        }
        self.state = DragState::Dragging { start, current: screen, additive };
        DragUpdate::Moved(Rect::from_corners(start, screen))
    }

    /// Finish the drag and hit-test its rectangle against `store`.
    ///
    /// Returns the ids hit by this drag, or `None` if no drag was in progress.
    /// A drag that ends where it started hits nothing; flat horizontal or
    /// vertical drags are hit-tested like any other. The stored selection is
    /// replaced by the hit set, or extended with it for additive drags.
    pub fn end_drag<V: Viewport>(&mut self, viewport: &V, store: &ObjectStore) -> Option<HashSet<ObjectId>> {
        let DragState::Dragging { start, current, additive } = self.state else {
            return None;
        };
        self.state = DragState::Idle;

        let hits: HashSet<ObjectId> = if start == current {
            HashSet::new()
        } else {
            let world_box = viewport.rect_to_world(&Rect::from_corners(start, current));
            hit::objects_in_rect(&world_box, store).into_iter().collect()
        };

        if additive {
            self.selected.extend(hits.iter().copied());
        } else {
            self.selected.clone_from(&hits);
        }
        tracing::debug!(hits = hits.len(), selected = self.selected.len(), additive, "selection drag finished");
        Some(hits)
    }

    /// Drop an in-progress drag without hit-testing. Returns false if idle.
    pub fn cancel(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.state = DragState::Idle;
        tracing::debug!("selection drag cancelled");
        true
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Whether a drag is in progress and the pointer is still at its start.
    #[must_use]
    pub fn is_point_drag(&self) -> bool {
        matches!(self.state, DragState::Dragging { start, current, .. } if start == current)
    }

    /// Screen-space drag rectangle while a drag is in progress.
    #[must_use]
    pub fn drag_box(&self) -> Option<Rect> {
        match self.state {
            DragState::Dragging { start, current, .. } => Some(Rect::from_corners(start, current)),
            DragState::Idle => None,
        }
    }

    // --- Selected set ---

    #[must_use]
    pub fn selected(&self) -> &HashSet<ObjectId> {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: &ObjectId) -> bool {
        self.selected.contains(id)
    }

    /// Replace the selection with a single object.
    pub fn select_only(&mut self, id: ObjectId) {
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: ObjectId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Clear the selection. Returns false if it was already empty.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    /// Forget ids that no longer exist in `store`. Returns true if any were dropped.
    pub fn prune(&mut self, store: &ObjectStore) -> bool {
        let before = self.selected.len();
        self.selected.retain(|id| store.contains(id));
        self.selected.len() != before
    }

    /// Screen-space boxes of the selected objects, for drawing outlines.
    ///
    /// Ids missing from `store` are skipped.
    #[must_use]
    pub fn selected_screen_rects<V: Viewport>(&self, viewport: &V, store: &ObjectStore) -> Vec<(ObjectId, Rect)> {
        store
            .iter()
            .filter(|obj| self.selected.contains(&obj.id))
            .map(|obj| (obj.id, viewport.rect_to_screen(&obj.bounds)))
            .collect()
    }
}
