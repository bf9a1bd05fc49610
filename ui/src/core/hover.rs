//! Which toolbar item (if any) the pointer is over.

use crate::core::registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Idle,
    Active(&'static str),
}

/// Single-slot hover state. Only `on_enter` / `on_leave` mutate it, so at most
/// one item is ever hovered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: Option<&'static str>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the button for `id`. Moving straight from one button to
    /// another is a direct ACTIVE -> ACTIVE transition.
    ///
    /// Returns `true` if the hovered item changed. Unknown ids are ignored.
    pub fn on_enter(&mut self, id: &str) -> bool {
        let Some(item) = registry::find(id) else {
            tracing::debug!(id, "hover enter for unregistered item ignored");
            return false;
        };
        if self.hovered == Some(item.id) {
            return false;
        }
        tracing::debug!(from = ?self.hovered, to = item.id, "hover enter");
        self.hovered = Some(item.id);
        true
    }

    /// Pointer left a button. Returns `true` if something was hovered.
    pub fn on_leave(&mut self) -> bool {
        let was = self.hovered.take();
        if was.is_some() {
            tracing::debug!(from = ?was, "hover leave");
        }
        was.is_some()
    }

    pub fn hovered(&self) -> Option<&'static str> {
        self.hovered
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered == Some(id)
    }

    pub fn is_active(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn phase(&self) -> HoverPhase {
        match self.hovered {
            Some(id) => HoverPhase::Active(id),
            None => HoverPhase::Idle,
        }
    }
}
