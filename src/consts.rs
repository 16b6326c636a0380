//! Shared numeric constants for the canvas crate.
//!
//! These are the defaults behind [`crate::config::CanvasConfig`]; hosts that
//! need different limits override them through the config instead.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.02;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 256.0;

/// Zoom speed per unit of wheel delta, scaled by half the current zoom.
pub const ZOOM_INTENSITY: f64 = 0.015;

// ── World canvas ────────────────────────────────────────────────

/// Width of the world canvas in world units.
pub const CANVAS_WIDTH: f64 = 200_000.0;

/// Height of the world canvas in world units.
pub const CANVAS_HEIGHT: f64 = 200_000.0;

/// Empty margin kept visible past the canvas edges, in world units.
pub const CANVAS_PADDING: f64 = 200.0;

// ── Objects ─────────────────────────────────────────────────────

/// Edge length of objects created from the context menu, in world units.
pub const DEFAULT_OBJECT_SIZE: f64 = 50.0;

/// Fill color of objects created from the context menu.
pub const DEFAULT_OBJECT_COLOR: &str = "#FFFFFF";
