//! Camera and selection engine for an infinite, pannable, zoomable 2D canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! numerical core of the canvas: mapping between screen pixels and an
//! unbounded world space, zooming around the cursor, clamping the pan so the
//! content never drifts out of reach, and rectangular drag-selection of placed
//! objects. The host JavaScript layer draws objects and menus; it only forwards
//! raw DOM input to the engine and reacts to the resulting
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Input dispatch; testable [`engine::EngineCore`] |
//! | [`dom`] | Scoped DOM listener ownership and the browser [`dom::Engine`] |
//! | [`camera`] | Pan/zoom camera, coordinate conversions, change observers |
//! | [`zoom`] | Zoom-around-point math |
//! | [`clamp`] | Pan clamp policy |
//! | [`selection`] | Drag-selection state machine and selected-id set |
//! | [`hit`] | Hit-testing against canvas objects |
//! | [`doc`] | Canvas objects and the in-memory object store |
//! | [`menu`] | Context menu state |
//! | [`input`] | Input event payloads and gesture state |
//! | [`geom`] | Point, size, and rectangle value types |
//! | [`config`] | Tunable limits and sizes |
//! | [`consts`] | Default numeric constants |
//! | [`error`] | Crate error type |
//! | [`logging`] | Tracing subscriber installation |

pub mod camera;
pub mod clamp;
pub mod config;
pub mod consts;
pub mod doc;
pub mod dom;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
pub mod input;
pub mod logging;
pub mod menu;
pub mod selection;
pub mod zoom;

pub use error::CanvasError;
