//! Bridges mounted elements to the pure [`LayoutSource`] seam.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::geometry::{LayoutSource, Rect};

/// Identifier -> mounted button handle, filled in from `onmounted`.
pub type ButtonHandles = HashMap<&'static str, Rc<MountedData>>;

/// Bounding boxes read back from the renderer after a layout pass.
#[derive(Debug, Default, Clone)]
pub struct LayoutSnapshot {
    container: Option<Rect>,
    buttons: HashMap<&'static str, Rect>,
}

impl LayoutSnapshot {
    /// Read the container box and the box of the button registered for `id`.
    /// Handles that are missing or fail to measure are left out.
    pub async fn capture(
        id: &'static str,
        button: Option<Rc<MountedData>>,
        container: Option<Rc<MountedData>>,
    ) -> Self {
        let mut snapshot = Self::default();
        if let Some(container) = container {
            snapshot.container = client_rect(&container).await;
        }
        if let Some(button) = button {
            if let Some(rect) = client_rect(&button).await {
                snapshot.buttons.insert(id, rect);
            }
        }
        snapshot
    }
}

impl LayoutSource for LayoutSnapshot {
    fn container_box(&self) -> Option<Rect> {
        self.container
    }

    fn button_box(&self, id: &str) -> Option<Rect> {
        self.buttons.get(id).copied()
    }
}

async fn client_rect(handle: &MountedData) -> Option<Rect> {
    match handle.get_client_rect().await {
        Ok(r) => Some(Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)),
        Err(err) => {
            tracing::debug!(?err, "get_client_rect failed");
            None
        }
    }
}
