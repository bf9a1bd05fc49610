//! Highlight positioning: turns rendered bounding boxes into the rect the
//! background pill and tooltips animate toward.
//!
//! Measurement is a two-phase affair. The hover state is committed first; once
//! the renderer has laid the tree out, a post-render pass reads the boxes
//! through a [`LayoutSource`] and calls [`HighlightPositioner::remeasure`].
//! Nothing here touches the DOM, which keeps the logic testable with plain
//! fake layouts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Re-express `self` with `origin`'s top-left corner as (0, 0).
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect {
            x: self.x - origin.x,
            y: self.y - origin.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Read access to the rendered geometry of the toolbar. Implementations
/// return `None` when an element has not been laid out (or has no handle).
pub trait LayoutSource {
    fn container_box(&self) -> Option<Rect>;
    fn button_box(&self, id: &str) -> Option<Rect>;
}

/// Outcome of a measurement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Remeasure {
    /// The rect now holds fresh geometry for the hovered item.
    Updated(Rect),
    /// Geometry was re-read and matched the stored rect.
    Unchanged,
    /// Nothing hovered, or a box was unavailable; the previous rect is kept.
    Skipped,
}

/// Holds the last measured highlight rect, relative to the toolbar container.
///
/// The rect is deliberately left stale once hover ends: the layers that use it
/// are faded out by opacity, and keeping it avoids a jump when the same item
/// is hovered again.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HighlightPositioner {
    rect: Rect,
}

impl HighlightPositioner {
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn remeasure(&mut self, hovered: Option<&str>, layout: &impl LayoutSource) -> Remeasure {
        let Some(id) = hovered else {
            return Remeasure::Skipped;
        };
        let (Some(button), Some(container)) = (layout.button_box(id), layout.container_box())
        else {
            tracing::debug!(id, "highlight measurement unavailable; keeping last rect");
            return Remeasure::Skipped;
        };

        let next = button.relative_to(&container);
        if next == self.rect {
            return Remeasure::Unchanged;
        }
        self.rect = next;
        Remeasure::Updated(next)
    }

    /// Applies a snapshot taken for `measured_for` once it resolves. The read
    /// is asynchronous, so hover may have moved on by then; a snapshot that no
    /// longer belongs to `current` is dropped and the rect is left alone.
    pub fn apply(
        &mut self,
        current: Option<&str>,
        measured_for: &str,
        layout: &impl LayoutSource,
    ) -> Remeasure {
        if current != Some(measured_for) {
            tracing::debug!(measured_for, ?current, "dropping stale highlight measurement");
            return Remeasure::Skipped;
        }
        self.remeasure(Some(measured_for), layout)
    }
}

/// Fixed breathing room the background pill keeps around a measured button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightPadding {
    pub dx: f64,
    pub dy: f64,
    pub dw: f64,
    pub dh: f64,
}

impl Default for HighlightPadding {
    fn default() -> Self {
        Self {
            dx: -18.0,
            dy: -5.0,
            dw: 4.0,
            dh: 11.0,
        }
    }
}

impl HighlightPadding {
    pub fn apply(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x + self.dx,
            y: rect.y + self.dy,
            width: rect.width + self.dw,
            height: rect.height + self.dh,
        }
    }
}
