//! Input model: modifier keys, mouse buttons, wheel deltas, and the gesture state.
//!
//! These are the already-dispatched payloads the engine consumes. They mirror
//! the DOM fields the host reads off pointer, wheel, and keyboard events
//! (`clientX`, `clientY`, `deltaX`, `deltaY`, `button`, `buttons`, modifier
//! flags) without depending on `web_sys` types, so the engine stays testable
//! natively.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether the platform zoom modifier (Ctrl or Meta) is held.
    #[must_use]
    pub fn zoom(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button that changed state in a press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Back/forward buttons map to `None`.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Bitmask of buttons currently held, as in DOM `MouseEvent.buttons`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons(pub u16);

impl Buttons {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);
    pub const SECONDARY: Self = Self(2);
    pub const MIDDLE: Self = Self(4);

    /// No button is held.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down, or pinch-in with Ctrl).
    pub dy: f64,
}

/// Gesture being tracked between pointer-down and pointer-up.
///
/// Drag-selection keeps its own state in [`crate::selection::Selection`]; this
/// only distinguishes it from camera panning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the camera by dragging with the middle button.
    Panning {
        /// Screen-space pointer position when the pan started.
        start_screen: Point,
        /// Camera pan when the pan started.
        start_pan: Point,
    },
    /// A primary-button drag-selection is in progress.
    Selecting {
        /// Screen-space pointer position at press, used to detect clicks.
        start_screen: Point,
        /// Shift was held at press.
        additive: bool,
    },
}
