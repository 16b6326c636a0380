//! Context menu state.
//!
//! The host draws the menu; the engine only tracks whether it is open, where
//! it was opened, and which commands it offers. While it is open no drag may
//! start.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use serde::Serialize;

use crate::doc::ObjectId;
use crate::geom::Point;

/// A command offered by the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItem {
    /// Create an object with its top-left corner at `world`.
    NewObject { world: Point },
    /// Delete the object the menu was opened over.
    Delete { id: ObjectId },
}

impl MenuItem {
    /// Label shown to the user.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewObject { .. } => "New Object",
            Self::Delete { .. } => "Delete",
        }
    }
}

/// Open/closed state of the context menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenu {
    open: Option<OpenMenu>,
}

#[derive(Debug, Clone, PartialEq)]
struct OpenMenu {
    screen: Point,
    items: Vec<MenuItem>,
}

impl ContextMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the menu at `screen` with `items`, replacing any menu already open.
    pub fn show(&mut self, screen: Point, items: Vec<MenuItem>) {
        self.open = Some(OpenMenu { screen, items });
    }

    /// Close the menu. Returns false if it was already closed.
    pub fn hide(&mut self) -> bool {
        self.open.take().is_some()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Screen position the menu was opened at.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.open.as_ref().map(|m| m.screen)
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        self.open.as_ref().map_or(&[], |m| m.items.as_slice())
    }

    /// Close the menu and return the item at `index`, if the menu was open and the index valid.
    pub fn choose(&mut self, index: usize) -> Option<MenuItem> {
        let item = self.items().get(index).copied()?;
        self.open = None;
        Some(item)
    }
}
