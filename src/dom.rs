//! Browser glue: scoped DOM listeners and the mounted [`Engine`].
//!
//! Every listener is owned by a [`Listener`] value and detached when that value
//! drops, so mounting an [`Engine`] acquires all of its subscriptions and
//! dropping it releases them. Handlers never capture state by value; they share
//! one [`EngineCore`] through an `Rc<RefCell<_>>` and always see its latest
//! state.
//!
//! This is the only module that touches `web_sys` event types.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, PointerEvent, WheelEvent};

use crate::config::CanvasConfig;
use crate::engine::{Action, EngineCore};
use crate::error::CanvasError;
use crate::geom::Point;
use crate::input::{Button, Buttons, Key, Modifiers, WheelDelta};

/// An attached DOM event listener, removed from its target on drop.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `target` for events of type `kind`.
    ///
    /// Pass `passive = false` for handlers that call `preventDefault`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Dom`] if the browser rejects the listener.
    pub fn attach(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, CanvasError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), kind, closure })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            tracing::warn!(kind = self.kind, error = ?err, "failed to detach listener");
        }
    }
}

/// A group of listeners released together.
#[derive(Default)]
pub struct Subscriptions {
    listeners: Vec<Listener>,
}

impl Subscriptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Detach every listener now.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

type Sink = Rc<RefCell<Box<dyn FnMut(Action)>>>;

/// The canvas engine mounted on a container element.
///
/// Owns the DOM subscriptions for its lifetime; drop it (or call
/// [`Engine::unmount`]) to detach them.
pub struct Engine {
    container: HtmlElement,
    core: Rc<RefCell<EngineCore>>,
    sink: Sink,
    listeners: Subscriptions,
}

impl Engine {
    /// Mount on `container`, forwarding every resulting [`Action`] to `on_action`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] for an invalid config, or
    /// [`CanvasError::Dom`] if there is no window or a listener cannot be attached.
    pub fn mount(
        container: HtmlElement,
        config: CanvasConfig,
        on_action: impl FnMut(Action) + 'static,
    ) -> Result<Self, CanvasError> {
        let core = Rc::new(RefCell::new(EngineCore::with_config(config)?));
        let sink: Sink = Rc::new(RefCell::new(Box::new(on_action)));
        let window = web_sys::window().ok_or_else(|| CanvasError::Dom("no global window".into()))?;
        let container_target: &EventTarget = container.as_ref();
        let window_target: &EventTarget = window.as_ref();

        let mut listeners = Subscriptions::new();

        listeners.add(Listener::attach(
            container_target,
            "wheel",
            false,
            forward::<WheelEvent>(&core, &sink, &container, |core, ev, pt| {
                // Keeps browsers from zooming the page on pinch.
                ev.prevent_default();
                let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
                core.on_wheel(pt, delta, modifiers(ev.as_ref()))
            }),
        )?);

        listeners.add(Listener::attach(
            container_target,
            "pointerdown",
            false,
            forward::<PointerEvent>(&core, &sink, &container, |core, ev, pt| {
                let mouse: &MouseEvent = ev.as_ref();
                let Some(button) = Button::from_dom(mouse.button()) else {
                    return Vec::new();
                };
                if button == Button::Middle {
                    // Suppresses middle-click autoscroll.
                    ev.prevent_default();
                }
                core.on_pointer_down(pt, button, modifiers(mouse))
            }),
        )?);

        listeners.add(Listener::attach(
            window_target,
            "pointermove",
            true,
            forward::<PointerEvent>(&core, &sink, &container, |core, ev, pt| {
                let mouse: &MouseEvent = ev.as_ref();
                core.on_pointer_move(pt, Buttons(mouse.buttons()), modifiers(mouse))
            }),
        )?);

        listeners.add(Listener::attach(
            window_target,
            "pointerup",
            true,
            forward::<PointerEvent>(&core, &sink, &container, |core, ev, pt| {
                let mouse: &MouseEvent = ev.as_ref();
                let Some(button) = Button::from_dom(mouse.button()) else {
                    return Vec::new();
                };
                core.on_pointer_up(pt, button, modifiers(mouse))
            }),
        )?);

        listeners.add(Listener::attach(
            container_target,
            "contextmenu",
            false,
            forward::<MouseEvent>(&core, &sink, &container, |core, ev, pt| {
                ev.prevent_default();
                core.on_context_menu(pt)
            }),
        )?);

        let key_core = Rc::clone(&core);
        let key_sink = Rc::clone(&sink);
        listeners.add(Listener::attach(window_target, "keydown", true, move |event: Event| {
            let Some(ev) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let mods = Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() };
            let actions = match key_core.try_borrow_mut() {
                Ok(mut core) => core.on_key_down(Key(ev.key()), mods),
                Err(_) => {
                    tracing::warn!("engine busy; dropping keydown");
                    return;
                }
            };
            dispatch(&key_sink, actions);
        })?);

        tracing::debug!(listeners = listeners.len(), "engine mounted");
        let engine = Self { container, core, sink, listeners };
        engine.sync_viewport();
        Ok(engine)
    }

    /// Re-read the container's size and re-clamp the camera for it.
    pub fn sync_viewport(&self) {
        let width = f64::from(self.container.client_width());
        let height = f64::from(self.container.client_height());
        self.apply(|core| core.set_viewport(width, height));
    }

    /// Run the context-menu command at `index`.
    pub fn choose_menu_item(&self, index: usize) {
        self.apply(|core| core.choose_menu_item(index));
    }

    /// Read the engine state, e.g. to render the current selection.
    ///
    /// Returns `None` if called re-entrantly from inside an event handler.
    pub fn with_core<R>(&self, f: impl FnOnce(&EngineCore) -> R) -> Option<R> {
        match self.core.try_borrow() {
            Ok(core) => Some(f(&core)),
            Err(_) => None,
        }
    }

    /// Detach all listeners. Equivalent to dropping the engine.
    pub fn unmount(mut self) {
        self.listeners.clear();
        tracing::debug!("engine unmounted");
    }

    fn apply(&self, f: impl FnOnce(&mut EngineCore) -> Vec<Action>) {
        let actions = match self.core.try_borrow_mut() {
            Ok(mut core) => f(&mut core),
            Err(_) => {
                tracing::warn!("engine busy; dropping host call");
                return;
            }
        };
        dispatch(&self.sink, actions);
    }
}

/// Wrap an engine handler as a DOM listener: downcast the event, convert its
/// client position to container-local coordinates, run the handler, and pass
/// the actions to the sink.
fn forward<E>(
    core: &Rc<RefCell<EngineCore>>,
    sink: &Sink,
    container: &HtmlElement,
    handler: impl Fn(&mut EngineCore, &E, Point) -> Vec<Action> + 'static,
) -> impl FnMut(Event) + 'static
where
    E: JsCast + AsRef<MouseEvent>,
{
    let core = Rc::clone(core);
    let sink = Rc::clone(sink);
    let container = container.clone();
    move |event: Event| {
        let Some(ev) = event.dyn_ref::<E>() else {
            return;
        };
        let pt = local_point(&container, AsRef::<MouseEvent>::as_ref(ev));
        let actions = match core.try_borrow_mut() {
            Ok(mut core) => handler(&mut core, ev, pt),
            Err(_) => {
                tracing::warn!(kind = %event.type_(), "engine busy; dropping event");
                return;
            }
        };
        dispatch(&sink, actions);
    }
}

fn dispatch(sink: &Sink, actions: Vec<Action>) {
    if actions.is_empty() {
        return;
    }
    let Ok(mut sink) = sink.try_borrow_mut() else {
        tracing::warn!(count = actions.len(), "action sink re-entered; dropping actions");
        return;
    };
    let handler = &mut **sink;
    for action in actions {
        handler(action);
    }
}

fn local_point(container: &HtmlElement, ev: &MouseEvent) -> Point {
    let rect = container.get_bounding_client_rect();
    Point::new(f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top())
}

fn modifiers(ev: &MouseEvent) -> Modifiers {
    Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() }
}
