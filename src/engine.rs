use crate::camera::{Camera, ObserverId, Transform, Viewport};
use crate::config::CanvasConfig;
use crate::consts::DEFAULT_OBJECT_COLOR;
use crate::doc::{CanvasObject, ObjectId, ObjectStore};
use crate::error::CanvasError;
use crate::geom::{Point, Rect, Size};
use crate::hit;
use crate::input::{Button, Buttons, InputState, Key, Modifiers, WheelDelta};
use crate::menu::{ContextMenu, MenuItem};
use crate::selection::{DragUpdate, Selection};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The camera committed a new transform; re-project everything.
    CameraChanged(Transform),
    /// The screen-space drag rectangle changed, or disappeared (`None`).
    SelectionBoxChanged(Option<Rect>),
    /// The selected set changed. Ids are sorted.
    SelectionChanged(Vec<ObjectId>),
    ContextMenuOpened { screen: Point, items: Vec<MenuItem> },
    ContextMenuClosed,
    ObjectCreated(CanvasObject),
    ObjectDeleted(ObjectId),
}

/// Browser-independent engine state.
///
/// Separated from [`crate::dom::Engine`] so it can be tested without WASM.
#[derive(Debug)]
pub struct EngineCore {
    config: CanvasConfig,
    camera: Camera,
    selection: Selection,
    menu: ContextMenu,
    doc: ObjectStore,
    input: InputState,
}

impl Default for EngineCore {
    fn default() -> Self {
        let config = CanvasConfig::default();
        Self {
            camera: Camera::new(config.limits()),
            config,
            selection: Selection::new(),
            menu: ContextMenu::new(),
            doc: ObjectStore::new(),
            input: InputState::Idle,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom config.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] if the config fails validation.
    pub fn with_config(config: CanvasConfig) -> Result<Self, CanvasError> {
        config.validate()?;
        Ok(Self { camera: Camera::new(config.limits()), config, ..Self::default() })
    }

    // --- Data inputs ---

    /// Replace the object list with a host snapshot.
    pub fn load_snapshot(&mut self, objects: Vec<CanvasObject>) -> Vec<Action> {
        self.doc.load_snapshot(objects);
        if self.selection.prune(&self.doc) {
            return vec![self.selection_changed()];
        }
        Vec::new()
    }

    /// Insert an object created by the host.
    pub fn apply_create(&mut self, object: CanvasObject) {
        self.doc.insert(object);
    }

    /// Remove an object deleted by the host. Unknown ids are ignored.
    pub fn apply_delete(&mut self, id: &ObjectId) -> Vec<Action> {
        self.delete_object(id)
    }

    // --- Viewport ---

    /// Update the viewport size in CSS pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.camera.set_viewport(Size::new(width, height));
        vec![self.camera_changed()]
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        // A press anywhere while the menu is open only dismisses it.
        if self.menu.hide() {
            return vec![Action::ContextMenuClosed];
        }
        if self.input != InputState::Idle {
            return Vec::new();
        }

        match button {
            Button::Primary => {
                let started = if modifiers.shift {
                    self.selection.begin_additive_drag(screen_pt)
                } else {
                    self.selection.begin_drag(screen_pt)
                };
                if !started {
                    return Vec::new();
                }
                self.input = InputState::Selecting { start_screen: screen_pt, additive: modifiers.shift };
                vec![Action::SelectionBoxChanged(self.selection.drag_box())]
            }
            Button::Middle => {
                self.input = InputState::Panning { start_screen: screen_pt, start_pan: self.camera.pos() };
                Vec::new()
            }
            Button::Secondary => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, buttons: Buttons, _modifiers: Modifiers) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { start_screen, start_pan } => {
                if buttons.is_empty() {
                    tracing::debug!("pan released outside viewport");
                    self.input = InputState::Idle;
                    return Vec::new();
                }
                let pos = start_pan - (start_screen - screen_pt);
                self.camera.set_pos(pos.x, pos.y);
                vec![self.camera_changed()]
            }
            InputState::Selecting { .. } => match self.selection.update_drag(screen_pt, buttons) {
                DragUpdate::Moved(rect) => vec![Action::SelectionBoxChanged(Some(rect))],
                DragUpdate::Cancelled => {
                    self.input = InputState::Idle;
                    vec![Action::SelectionBoxChanged(None)]
                }
                DragUpdate::Ignored => {
                    self.input = InputState::Idle;
                    Vec::new()
                }
            },
        }
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        match (self.input, button) {
            (InputState::Panning { .. }, Button::Middle) => {
                self.input = InputState::Idle;
                Vec::new()
            }
            (InputState::Selecting { start_screen, additive }, Button::Primary) => {
                self.input = InputState::Idle;
                let was_click = self.selection.is_point_drag() && start_screen == screen_pt;
                if self.selection.end_drag(&self.camera, &self.doc).is_none() {
                    return Vec::new();
                }
                if was_click {
                    self.click_select(screen_pt, additive);
                }
                vec![Action::SelectionBoxChanged(None), self.selection_changed()]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if self.menu.is_open() {
            return Vec::new();
        }
        if modifiers.zoom() {
            self.camera.zoom_around_point(delta.dy, screen_pt.x, screen_pt.y);
        } else {
            self.camera.pan(-delta.dx, -delta.dy);
        }
        vec![self.camera_changed()]
    }

    /// Open the context menu at `screen_pt`, offering commands for whatever is under it.
    pub fn on_context_menu(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.input != InputState::Idle {
            return Vec::new();
        }
        let world = self.camera.to_world(screen_pt);
        let item = match hit::object_at(world, &self.doc) {
            Some(obj) => MenuItem::Delete { id: obj.id },
            None => MenuItem::NewObject { world },
        };
        self.menu.show(screen_pt, vec![item]);
        vec![Action::ContextMenuOpened { screen: screen_pt, items: self.menu.items().to_vec() }]
    }

    /// Run the menu command at `index` and close the menu.
    pub fn choose_menu_item(&mut self, index: usize) -> Vec<Action> {
        let Some(item) = self.menu.choose(index) else {
            return Vec::new();
        };
        let mut actions = vec![Action::ContextMenuClosed];
        match item {
            MenuItem::NewObject { world } => {
                let obj = self.doc.create(world, self.config.default_object_size, DEFAULT_OBJECT_COLOR);
                actions.push(Action::ObjectCreated(obj));
            }
            MenuItem::Delete { id } => actions.extend(self.delete_object(&id)),
        }
        actions
    }

    pub fn on_key_down(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        if !key.is_escape() {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if self.menu.hide() {
            actions.push(Action::ContextMenuClosed);
        }
        if self.selection.cancel() {
            actions.push(Action::SelectionBoxChanged(None));
        }
        self.input = InputState::Idle;
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The current camera transform.
    #[must_use]
    pub fn camera(&self) -> Transform {
        self.camera.transform()
    }

    /// The camera itself, for conversions and direct pan/zoom calls.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Register a camera observer; see [`Camera::subscribe`].
    pub fn subscribe_camera(&mut self, observer: impl FnMut(Transform) + 'static) -> ObserverId {
        self.camera.subscribe(observer)
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Sorted ids of the selected objects.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self.selection.selected().iter().copied().collect();
        ids.sort();
        ids
    }

    /// Screen-space drag rectangle while a drag-selection is in progress.
    #[must_use]
    pub fn drag_box(&self) -> Option<Rect> {
        self.selection.drag_box()
    }

    /// Screen-space outlines of the selected objects.
    #[must_use]
    pub fn selected_screen_rects(&self) -> Vec<(ObjectId, Rect)> {
        self.selection.selected_screen_rects(&self.camera, &self.doc)
    }

    #[must_use]
    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    #[must_use]
    pub fn objects(&self) -> &ObjectStore {
        &self.doc
    }

    /// Look up an object by ID.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&CanvasObject> {
        self.doc.get(id)
    }

    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.input
    }

    // --- Helpers ---

    fn click_select(&mut self, screen_pt: Point, additive: bool) {
        let world = self.camera.to_world(screen_pt);
        let Some(id) = hit::object_at(world, &self.doc).map(|obj| obj.id) else {
            return;
        };
        if additive {
            self.selection.toggle(id);
        } else {
            self.selection.select_only(id);
        }
    }

    fn delete_object(&mut self, id: &ObjectId) -> Vec<Action> {
        if self.doc.remove(id).is_none() {
            return Vec::new();
        }
        let mut actions = vec![Action::ObjectDeleted(*id)];
        if self.selection.prune(&self.doc) {
            actions.push(self.selection_changed());
        }
        actions
    }

    fn camera_changed(&self) -> Action {
        Action::CameraChanged(self.camera.transform())
    }

    fn selection_changed(&self) -> Action {
        Action::SelectionChanged(self.selected_ids())
    }
}
